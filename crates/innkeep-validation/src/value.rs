//! Field identifiers and the values rules see

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::numeric::parse_number;

/// Identifier of a single form field
///
/// Implemented by the enums generated with [`form_fields!`](crate::form_fields).
pub trait FieldId: Copy + Ord + Debug + Send + Sync + 'static {
    /// Every field of the form, in declaration order
    const ALL: &'static [Self];

    /// External field name, as used by clients and in serialized errors
    fn name(self) -> &'static str;

    /// Look a field up by its external name
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// The value of one field as seen by validation rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Free text input
    Text(&'a str),
    /// Checkbox / toggle
    Flag(bool),
    /// Already-parsed numeric input
    Number(f64),
    /// Select box; `None` when nothing is selected
    Choice(Option<&'a str>),
    /// Field has no value at all
    Empty,
}

impl<'a> FieldValue<'a> {
    /// Empty text (after trimming), an unchecked flag, no selection or a
    /// non-finite number.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(checked) => !checked,
            FieldValue::Number(n) => !n.is_finite(),
            FieldValue::Choice(choice) => choice.map_or(true, |s| s.trim().is_empty()),
            FieldValue::Empty => true,
        }
    }

    /// Text form of the value, used by length, pattern and equality rules
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Choice(Some(s)) => Cow::Borrowed(s),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Flag(checked) => Cow::Owned(checked.to_string()),
            FieldValue::Choice(None) | FieldValue::Empty => Cow::Borrowed(""),
        }
    }

    /// Numeric form of the value; `None` when it does not parse
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            FieldValue::Number(n) if n.is_finite() => Some(n),
            FieldValue::Text(s) | FieldValue::Choice(Some(s)) => parse_number(s),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl<'a> From<&'a Option<String>> for FieldValue<'a> {
    fn from(value: &'a Option<String>) -> Self {
        FieldValue::Choice(value.as_deref())
    }
}

/// Read access to the current value of every field of a form
pub trait FormValues<F> {
    fn value(&self, field: F) -> FieldValue<'_>;
}

/// Loosely-typed forms: a map of field to raw text. Missing fields are `Empty`.
impl<F: FieldId> FormValues<F> for BTreeMap<F, String> {
    fn value(&self, field: F) -> FieldValue<'_> {
        self.get(&field)
            .map(|s| FieldValue::Text(s.as_str()))
            .unwrap_or(FieldValue::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::Text("   ").is_blank());
        assert!(FieldValue::Flag(false).is_blank());
        assert!(FieldValue::Choice(None).is_blank());
        assert!(FieldValue::Empty.is_blank());
        assert!(FieldValue::Number(f64::NAN).is_blank());

        assert!(!FieldValue::Text("Suite").is_blank());
        assert!(!FieldValue::Flag(true).is_blank());
        assert!(!FieldValue::Choice(Some("101")).is_blank());
        assert!(!FieldValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_numeric_view() {
        assert_eq!(FieldValue::Text(" 2500.50 ").as_number(), Some(2500.5));
        assert_eq!(FieldValue::Text("abc").as_number(), None);
        assert_eq!(FieldValue::Number(3.0).as_number(), Some(3.0));
        assert_eq!(FieldValue::Flag(true).as_number(), None);
    }

    #[test]
    fn test_text_view() {
        assert_eq!(FieldValue::Choice(Some("deluxe")).as_text(), "deluxe");
        assert_eq!(FieldValue::Choice(None).as_text(), "");
        assert_eq!(FieldValue::Flag(true).as_text(), "true");
    }
}
