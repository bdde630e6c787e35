//! Lenient parsing of user-entered amounts

fn parse(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a monetary amount; malformed, negative or non-finite input gives `0`
pub fn coerce_amount(raw: &str) -> f64 {
    match parse(raw) {
        Some(amount) if amount >= 0.0 => amount,
        Some(amount) => {
            tracing::warn!(amount, "negative amount coerced to 0");
            0.0
        }
        None => {
            if !raw.trim().is_empty() {
                tracing::warn!(raw, "unparseable amount coerced to 0");
            }
            0.0
        }
    }
}

/// Parse a percentage; like [`coerce_amount`] but capped at 100
pub fn coerce_percent(raw: &str) -> f64 {
    coerce_amount(raw).min(100.0)
}
