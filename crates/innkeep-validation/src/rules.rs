//! Built-in rule constructors
//!
//! Each constructor returns a [`Rule`] carrying the caller's message. Rules
//! other than [`required`] and [`custom`] judge whatever value they are given,
//! including blank ones, so pair them with `required` or include them
//! conditionally when a field is optional.

use std::borrow::Cow;

use regex::Regex;

use crate::email::is_valid_email;
use crate::numeric::{is_at_least, is_at_most, is_in_range};
use crate::password::PasswordStrength;
use crate::rule::Rule;
use crate::string::{has_length_between, has_max_length, has_min_length};
use crate::value::{FieldId, FieldValue};

/// Non-blank text, checked box, a selection or a finite number
pub fn required<F: FieldId>(message: impl Into<Cow<'static, str>>) -> Rule<F> {
    Rule::new(message, |value, _| !value.is_blank())
}

pub fn min_length<F: FieldId>(min: usize, message: impl Into<Cow<'static, str>>) -> Rule<F> {
    Rule::new(message, move |value, _| has_min_length(&value.as_text(), min))
}

pub fn max_length<F: FieldId>(max: usize, message: impl Into<Cow<'static, str>>) -> Rule<F> {
    Rule::new(message, move |value, _| has_max_length(&value.as_text(), max))
}

/// Character count within `min..=max`
pub fn length_between<F: FieldId>(
    min: usize,
    max: usize,
    message: impl Into<Cow<'static, str>>,
) -> Rule<F> {
    Rule::new(message, move |value, _| {
        has_length_between(&value.as_text(), min, max)
    })
}

/// Regex match against the text form of the value
pub fn pattern<F: FieldId>(regex: &Regex, message: impl Into<Cow<'static, str>>) -> Rule<F> {
    let regex = regex.clone();
    Rule::new(message, move |value, _| regex.is_match(&value.as_text()))
}

/// Like [`pattern`], compiling the expression first
pub fn pattern_str<F: FieldId>(
    expr: &str,
    message: impl Into<Cow<'static, str>>,
) -> Result<Rule<F>, regex::Error> {
    Ok(pattern(&Regex::new(expr)?, message))
}

pub fn email<F: FieldId>(message: impl Into<Cow<'static, str>>) -> Rule<F> {
    Rule::new(message, |value, _| is_valid_email(&value.as_text()))
}

/// Numeric lower bound; values that do not parse fail
pub fn min<F: FieldId>(min: f64, message: impl Into<Cow<'static, str>>) -> Rule<F> {
    Rule::new(message, move |value, _| {
        value.as_number().is_some_and(|n| is_at_least(n, min))
    })
}

/// Numeric upper bound; values that do not parse fail
pub fn max<F: FieldId>(max: f64, message: impl Into<Cow<'static, str>>) -> Rule<F> {
    Rule::new(message, move |value, _| {
        value.as_number().is_some_and(|n| is_at_most(n, max))
    })
}

/// Inclusive numeric range, one message for both ends
pub fn range<F: FieldId>(min: f64, max: f64, message: impl Into<Cow<'static, str>>) -> Rule<F> {
    Rule::new(message, move |value, _| {
        value.as_number().is_some_and(|n| is_in_range(n, min, max))
    })
}

/// Value must equal the value of `other` (e.g. confirm password)
pub fn matches<F: FieldId>(other: F, message: impl Into<Cow<'static, str>>) -> Rule<F> {
    Rule::new(message, move |value, form| {
        value.as_text() == form.value(other).as_text()
    })
}

/// Arbitrary predicate over the field's own value
pub fn custom<F, P>(message: impl Into<Cow<'static, str>>, predicate: P) -> Rule<F>
where
    F: FieldId,
    P: Fn(&FieldValue<'_>) -> bool + Send + Sync + 'static,
{
    Rule::new(message, move |value, _| predicate(value))
}

/// Password must meet `strength`; the message is the strength's requirement
pub fn password<F: FieldId>(strength: PasswordStrength) -> Rule<F> {
    Rule::new(strength.requirement(), move |value, _| {
        strength.is_satisfied_by(&value.as_text())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{validate_form, RuleSet};
    use crate::value::FormValues;
    use rstest::rstest;

    crate::form_fields! {
        enum SignupField {
            Email => "email",
            Password => "password",
            ConfirmPassword => "confirmPassword",
            Phone => "phone",
            Age => "age",
            Terms => "terms",
        }
    }

    #[derive(Default)]
    struct Signup {
        email: String,
        password: String,
        confirm_password: String,
        phone: String,
        age: String,
        terms: bool,
    }

    impl FormValues<SignupField> for Signup {
        fn value(&self, field: SignupField) -> FieldValue<'_> {
            match field {
                SignupField::Email => FieldValue::from(&self.email),
                SignupField::Password => FieldValue::from(&self.password),
                SignupField::ConfirmPassword => FieldValue::from(&self.confirm_password),
                SignupField::Phone => FieldValue::from(&self.phone),
                SignupField::Age => FieldValue::from(&self.age),
                SignupField::Terms => FieldValue::from(self.terms),
            }
        }
    }

    fn check(rule: Rule<SignupField>, value: FieldValue<'_>) -> bool {
        rule.check(&value, &Signup::default())
    }

    #[rstest]
    #[case(FieldValue::Text("Asha"), true)]
    #[case(FieldValue::Text(""), false)]
    #[case(FieldValue::Text("  "), false)]
    #[case(FieldValue::Flag(true), true)]
    #[case(FieldValue::Flag(false), false)]
    #[case(FieldValue::Choice(Some("suite")), true)]
    #[case(FieldValue::Choice(None), false)]
    #[case(FieldValue::Empty, false)]
    fn test_required(#[case] value: FieldValue<'static>, #[case] expected: bool) {
        assert_eq!(check(required("required"), value), expected);
    }

    #[rstest]
    #[case("abc", 3, true)]
    #[case("ab", 3, false)]
    fn test_min_length(#[case] text: &str, #[case] min: usize, #[case] expected: bool) {
        assert_eq!(check(min_length(min, "too short"), FieldValue::Text(text)), expected);
    }

    #[test]
    fn test_max_length() {
        assert!(check(max_length(4, "too long"), FieldValue::Text("1204")));
        assert!(!check(max_length(4, "too long"), FieldValue::Text("12045")));
    }

    #[rstest]
    #[case("ab", false)]
    #[case("abcd", true)]
    #[case("Zoë1", true)]
    #[case("abcdefg", false)]
    fn test_length_between(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(check(length_between(3, 6, "bad length"), FieldValue::Text(text)), expected);
    }

    #[test]
    fn test_pattern() {
        let phone = Regex::new(r"^\d{10}$").unwrap();
        assert!(check(pattern(&phone, "bad phone"), FieldValue::Text("9876543210")));
        assert!(!check(pattern(&phone, "bad phone"), FieldValue::Text("98765")));
        assert!(pattern_str::<SignupField>("(", "broken").is_err());
    }

    #[test]
    fn test_email_rule() {
        assert!(check(email("bad email"), FieldValue::Text("guest@hotel.com")));
        assert!(!check(email("bad email"), FieldValue::Text("guest.hotel.com")));
    }

    #[rstest]
    #[case("18", true)]
    #[case("17", false)]
    #[case("", false)]
    #[case("eighteen", false)]
    fn test_min(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(check(min(18.0, "too young"), FieldValue::Text(text)), expected);
    }

    #[test]
    fn test_max() {
        assert!(check(max(100.0, "too big"), FieldValue::Number(100.0)));
        assert!(!check(max(100.0, "too big"), FieldValue::Text("100.01")));
    }

    #[rstest]
    #[case("1", true)]
    #[case("10", true)]
    #[case("0", false)]
    #[case("11", false)]
    #[case("", false)]
    fn test_range(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(check(range(1.0, 10.0, "out of range"), FieldValue::Text(text)), expected);
    }

    #[rstest]
    #[case("Secret12", "Secret12", false)]
    #[case("Secret12", "Secret13", true)]
    #[case("Secret12", "", true)]
    #[case("", "Secret12", true)]
    #[case("", "", false)]
    fn test_matches_password(
        #[case] password: &str,
        #[case] confirm: &str,
        #[case] expect_error: bool,
    ) {
        let form = Signup {
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            ..Default::default()
        };
        let rules = RuleSet::new().field(
            SignupField::ConfirmPassword,
            [matches(SignupField::Password, "Passwords do not match")],
        );
        let errors = validate_form(&form, &rules);
        assert_eq!(errors.has_error(SignupField::ConfirmPassword), expect_error);
    }

    #[test]
    fn test_custom_checkbox() {
        let must_accept = || custom("You must accept the terms", |v| v == &FieldValue::Flag(true));
        assert!(check(must_accept(), FieldValue::Flag(true)));
        assert!(!check(must_accept(), FieldValue::Flag(false)));
    }

    #[test]
    fn test_password_rule_message() {
        let rule: Rule<SignupField> = password(PasswordStrength::Medium);
        assert_eq!(rule.message(), PasswordStrength::Medium.requirement());
        assert!(check(password(PasswordStrength::Medium), FieldValue::Text("Welcome1")));
    }

    #[test]
    fn test_full_signup_form() {
        let form = Signup {
            email: "asha@hotel.in".into(),
            password: "Welcome1".into(),
            confirm_password: "Welcome1".into(),
            phone: "9876543210".into(),
            age: "30".into(),
            terms: true,
        };
        let rules = RuleSet::new()
            .field(SignupField::Email, [required("Email is required"), email("Invalid email")])
            .field(SignupField::Password, [required("Password is required"), password(PasswordStrength::Medium)])
            .field(SignupField::ConfirmPassword, [matches(SignupField::Password, "Passwords do not match")])
            .field(SignupField::Phone, [pattern_str(r"^\d{10}$", "Phone must be 10 digits").unwrap()])
            .field(SignupField::Age, [min(18.0, "Must be 18 or older")])
            .field(SignupField::Terms, [required("Accept the terms")]);

        assert!(validate_form(&form, &rules).is_empty());
    }
}
