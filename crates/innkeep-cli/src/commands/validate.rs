use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use innkeep::forms::{
    BookingForm, FormKind, GuestForm, LoginForm, PropertyOwnerForm, RoomForm, SignupForm,
    StaffForm,
};
use innkeep::{validate_payload, FieldErrors, ValidationPipelineResult};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum FormArg {
    Login,
    Signup,
    Guest,
    Room,
    Staff,
    Booking,
    PropertyOwner,
}

/// Validation result of one payload
#[derive(Debug)]
pub struct Report {
    pub form: &'static str,
    pub errors: FieldErrors,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> Value {
        json!({
            "form": self.form,
            "valid": self.is_valid(),
            "errors": self.errors,
        })
    }
}

fn check<T: DeserializeOwned + FormKind>(payload: Value) -> Report {
    let errors = match validate_payload::<T>(payload) {
        ValidationPipelineResult::Valid(_) => FieldErrors::default(),
        ValidationPipelineResult::Invalid(errors) => errors,
    };
    Report {
        form: T::KIND,
        errors,
    }
}

pub fn validate(form: FormArg, payload: Value) -> Report {
    match form {
        FormArg::Login => check::<LoginForm>(payload),
        FormArg::Signup => check::<SignupForm>(payload),
        FormArg::Guest => check::<GuestForm>(payload),
        FormArg::Room => check::<RoomForm>(payload),
        FormArg::Staff => check::<StaffForm>(payload),
        FormArg::Booking => check::<BookingForm>(payload),
        FormArg::PropertyOwner => check::<PropertyOwnerForm>(payload),
    }
}

/// Returns whether the payload is valid
pub fn execute(form: FormArg, file: &Path) -> Result<bool> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read payload file: {:?}", file))?;
    let payload: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse payload file: {:?}", file))?;

    let report = validate(form, payload);
    tracing::debug!(form = report.form, errors = report.errors.len(), "payload validated");

    println!("{}", serde_json::to_string_pretty(&report.to_json())?);

    if report.is_valid() {
        eprintln!("{}", "✓ Payload is valid".green());
    } else {
        eprintln!(
            "{}",
            format!("✗ {} field(s) failed validation", report.errors.len()).red()
        );
    }

    Ok(report.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_room_payload() {
        let report = validate(
            FormArg::Room,
            json!({
                "roomNumber": "204",
                "roomType": "suite",
                "floor": "2",
                "baseRate": "4500",
                "capacity": "3"
            }),
        );
        assert!(report.is_valid());
        assert_eq!(report.to_json()["form"], "room");
    }

    #[test]
    fn test_invalid_booking_payload() {
        let report = validate(
            FormArg::Booking,
            json!({
                "guestId": "g1",
                "roomId": "r101",
                "checkIn": "2024-05-13",
                "checkOut": "2024-05-10",
                "adults": "2",
                "taxRate": "18"
            }),
        );
        assert!(!report.is_valid());
        assert_eq!(
            report.to_json()["errors"],
            json!({ "checkOut": "Check-out must be after check-in" })
        );
    }

    #[test]
    fn test_non_object_payload() {
        let report = validate(FormArg::Staff, json!([1, 2, 3]));
        assert!(report.errors.has_error("_form"));
    }
}
