//! Numeric validation functions

/// Parse user-entered numeric text. Surrounding whitespace is ignored;
/// empty, malformed and non-finite input gives `None`.
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Validates minimum value for numeric types
pub fn is_at_least<T: PartialOrd>(value: T, min: T) -> bool {
    value >= min
}

/// Validates maximum value for numeric types
pub fn is_at_most<T: PartialOrd>(value: T, max: T) -> bool {
    value <= max
}

/// Validates value is within range
pub fn is_in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}
