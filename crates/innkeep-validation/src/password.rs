//! Password validation functions

use serde::{Deserialize, Serialize};

/// Password strength levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    /// 6+ characters minimum
    #[default]
    Basic,
    /// 8+ chars with uppercase, lowercase, and digit
    Medium,
    /// 8+ chars with uppercase, lowercase, digit, and special character
    Strong,
}

impl PasswordStrength {
    /// Parse a strength level; unknown names fall back to `Strong`
    ///
    /// # Examples
    /// ```
    /// use innkeep_validation::PasswordStrength;
    /// assert_eq!(PasswordStrength::parse("basic"), PasswordStrength::Basic);
    /// assert_eq!(PasswordStrength::parse("medium"), PasswordStrength::Medium);
    /// assert_eq!(PasswordStrength::parse("anything"), PasswordStrength::Strong);
    /// ```
    pub fn parse(level: &str) -> Self {
        match level {
            "basic" => PasswordStrength::Basic,
            "medium" => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn is_satisfied_by(self, password: &str) -> bool {
        let long_enough = |min: usize| password.chars().count() >= min;
        let has_upper = || password.chars().any(|c| c.is_uppercase());
        let has_lower = || password.chars().any(|c| c.is_lowercase());
        let has_digit = || password.chars().any(|c| c.is_ascii_digit());
        let has_special = || password.chars().any(|c| !c.is_alphanumeric());

        match self {
            PasswordStrength::Basic => long_enough(6),
            PasswordStrength::Medium => long_enough(8) && has_upper() && has_lower() && has_digit(),
            PasswordStrength::Strong => {
                long_enough(8) && has_upper() && has_lower() && has_digit() && has_special()
            }
        }
    }

    /// Human-readable requirement, used as the default rule message
    pub fn requirement(self) -> &'static str {
        match self {
            PasswordStrength::Basic => "Password must be at least 6 characters",
            PasswordStrength::Medium => {
                "Password must be at least 8 characters with upper and lower case letters and a number"
            }
            PasswordStrength::Strong => {
                "Password must be at least 8 characters with upper and lower case letters, a number and a special character"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert!(PasswordStrength::Basic.is_satisfied_by("abcdef"));
        assert!(!PasswordStrength::Basic.is_satisfied_by("abc"));
    }

    #[test]
    fn test_medium() {
        assert!(PasswordStrength::Medium.is_satisfied_by("Password1"));
        assert!(!PasswordStrength::Medium.is_satisfied_by("password1"));
        assert!(!PasswordStrength::Medium.is_satisfied_by("Password"));
        assert!(!PasswordStrength::Medium.is_satisfied_by("Pass1"));
    }

    #[test]
    fn test_strong() {
        assert!(PasswordStrength::Strong.is_satisfied_by("Password1!"));
        assert!(!PasswordStrength::Strong.is_satisfied_by("Password1"));
    }
}
