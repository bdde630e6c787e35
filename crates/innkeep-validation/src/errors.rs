//! Field -> message map produced by validation

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::touched::TouchedState;
use crate::value::FieldId;

/// One message per invalid field. Valid fields are absent, never empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F> {
    errors: BTreeMap<F, String>,
}

impl<F: FieldId> ValidationErrors<F> {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Record a message for a field, replacing any previous one
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_error(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Only the errors of fields the user has touched
    pub fn visible_to(&self, touched: &TouchedState<F>) -> Self {
        Self {
            errors: self
                .errors
                .iter()
                .filter(|(field, _)| touched.is_touched(**field))
                .map(|(field, message)| (*field, message.clone()))
                .collect(),
        }
    }

    /// Errors keyed by external field name
    pub fn to_named_map(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(field, message)| (field.name(), message.clone()))
            .collect()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl<F: FieldId> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldId> fmt::Display for ValidationErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.name(), message)?;
        }
        Ok(())
    }
}

impl<F: FieldId> std::error::Error for ValidationErrors<F> {}

impl<F: FieldId> Serialize for ValidationErrors<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, message) in &self.errors {
            map.serialize_entry(field.name(), message)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::form_fields! {
        enum GuestField {
            FirstName => "firstName",
            Phone => "phone",
        }
    }

    fn sample() -> ValidationErrors<GuestField> {
        let mut errors = ValidationErrors::new();
        errors.insert(GuestField::Phone, "Phone must be 10 digits");
        errors.insert(GuestField::FirstName, "First name is required");
        errors
    }

    #[test]
    fn test_lookup() {
        let errors = sample();
        assert!(errors.has_error(GuestField::Phone));
        assert_eq!(errors.get(GuestField::FirstName), Some("First name is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_touched_filter() {
        let errors = sample();
        let mut touched = TouchedState::new();
        assert!(errors.visible_to(&touched).is_empty());

        touched.touch(GuestField::Phone);
        let visible = errors.visible_to(&touched);
        assert_eq!(visible.fields().collect::<Vec<_>>(), vec![GuestField::Phone]);
        // The raw errors are untouched by filtering
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_serializes_by_external_name() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["phone"], "Phone must be 10 digits");
        assert_eq!(json["firstName"], "First name is required");
    }

    #[test]
    fn test_display_and_result() {
        let errors = sample();
        assert_eq!(
            errors.to_string(),
            "firstName: First name is required; phone: Phone must be 10 digits"
        );
        assert!(errors.into_result().is_err());
        assert!(ValidationErrors::<GuestField>::new().into_result().is_ok());
    }
}
