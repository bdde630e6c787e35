// File: src/validation_pipeline.rs
// Purpose: Pipeline for decoding and validating a form payload received as JSON

use std::collections::BTreeMap;

use innkeep_validation::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key under which payload decoding failures are reported
pub const FORM_ERROR_KEY: &str = "_form";

/// Result of the validation pipeline
#[derive(Debug)]
pub enum ValidationPipelineResult<T> {
    /// Validation passed, data is ready for processing
    Valid(T),
    /// Validation failed; field name -> message
    Invalid(FieldErrors),
}

/// Errors keyed by external field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn has_error(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<T> ValidationPipelineResult<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationPipelineResult::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn ok(self) -> Option<T> {
        match self {
            ValidationPipelineResult::Valid(data) => Some(data),
            ValidationPipelineResult::Invalid(_) => None,
        }
    }

    pub fn err(self) -> Option<FieldErrors> {
        match self {
            ValidationPipelineResult::Valid(_) => None,
            ValidationPipelineResult::Invalid(errors) => Some(errors),
        }
    }
}

/// Decode a JSON payload into `T` and validate it
///
/// A payload that does not decode is reported as a single
/// [`FORM_ERROR_KEY`] error rather than a Rust error.
pub fn validate_payload<T: DeserializeOwned + Validate>(
    payload: serde_json::Value,
) -> ValidationPipelineResult<T> {
    let data = match serde_json::from_value::<T>(payload) {
        Ok(data) => data,
        Err(e) => {
            let mut errors = BTreeMap::new();
            errors.insert(
                FORM_ERROR_KEY.to_string(),
                format!("Failed to parse form data: {}", e),
            );
            return ValidationPipelineResult::Invalid(FieldErrors(errors));
        }
    };

    match data.validate() {
        Ok(()) => ValidationPipelineResult::Valid(data),
        Err(errors) => {
            let named = errors
                .to_named_map()
                .into_iter()
                .map(|(name, message)| (name.to_string(), message))
                .collect();
            ValidationPipelineResult::Invalid(FieldErrors(named))
        }
    }
}
