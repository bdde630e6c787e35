//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately light: local@domain.tld, no quoted locals or IP literals.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex")
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("frontdesk@grandhotel.in"));
        assert!(is_valid_email("first.last+stay@mail.example.com"));
        assert!(is_valid_email(" owner@inn.co "));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("guest"));
        assert!(!is_valid_email("guest@"));
        assert!(!is_valid_email("guest@hotel"));
        assert!(!is_valid_email("two words@hotel.com"));
        assert!(!is_valid_email("guest@@hotel.com"));
    }
}
