//! String validation functions
//!
//! Lengths are counted in characters, so "Zoë" is three long.

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn has_min_length(s: &str, min: usize) -> bool {
    char_len(s) >= min
}

pub fn has_max_length(s: &str, max: usize) -> bool {
    char_len(s) <= max
}

pub fn has_length_between(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&char_len(s))
}

/// Enum/value restriction, e.g. room types or staff roles
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert!(has_min_length("hello", 3));
        assert!(!has_min_length("hi", 3));

        assert!(has_max_length("hello", 10));
        assert!(!has_max_length("verylongstring", 5));

        assert!(has_length_between("hello", 3, 10));
        assert!(!has_length_between("hi", 3, 10));
        assert!(!has_length_between("verylongstring", 3, 10));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(char_len("Zoë"), 3);
        assert!(has_max_length("Zoë", 3));
    }

    #[test]
    fn test_enum_variant() {
        let allowed = &["single", "double", "suite"];
        assert!(is_one_of("suite", allowed));
        assert!(!is_one_of("penthouse", allowed));
    }
}
