// File: src/forms/mod.rs
// Purpose: Form definitions shared by every screen of the hotel app

use innkeep_validation::Validate;

pub mod auth;
pub mod booking;
pub mod guest;
pub mod patterns;
pub mod property_owner;
pub mod room;
pub mod staff;

pub use auth::{AuthModal, AuthMode, LoginField, LoginForm, SignupField, SignupForm};
pub use booking::{BookingField, BookingForm};
pub use guest::{GuestField, GuestForm};
pub use property_owner::{PropertyOwnerField, PropertyOwnerForm};
pub use room::{RoomField, RoomForm, RoomStatus};
pub use staff::{StaffField, StaffForm};

/// A form with a stable identity, used in logs and user feedback
pub trait FormKind: Validate {
    /// Machine name, e.g. `"booking"`
    const KIND: &'static str;
    /// Human label, e.g. `"Booking"`
    const LABEL: &'static str;
}

/// A new value for one field, as produced by an input event
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Flag(bool),
    Choice(Option<String>),
}

impl FieldInput {
    pub fn into_text(self) -> String {
        match self {
            FieldInput::Text(text) => text,
            FieldInput::Flag(checked) => checked.to_string(),
            FieldInput::Choice(choice) => choice.unwrap_or_default(),
        }
    }

    pub fn into_flag(self) -> bool {
        match self {
            FieldInput::Flag(checked) => checked,
            FieldInput::Text(text) => matches!(text.trim(), "true" | "on" | "1"),
            FieldInput::Choice(choice) => choice.is_some(),
        }
    }

    /// Blank text becomes "nothing selected"
    pub fn into_choice(self) -> Option<String> {
        match self {
            FieldInput::Choice(choice) => choice,
            FieldInput::Text(text) if text.trim().is_empty() => None,
            FieldInput::Text(text) => Some(text),
            FieldInput::Flag(checked) => Some(checked.to_string()),
        }
    }
}

impl From<&str> for FieldInput {
    fn from(text: &str) -> Self {
        FieldInput::Text(text.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(text: String) -> Self {
        FieldInput::Text(text)
    }
}

impl From<bool> for FieldInput {
    fn from(checked: bool) -> Self {
        FieldInput::Flag(checked)
    }
}

impl From<Option<&str>> for FieldInput {
    fn from(choice: Option<&str>) -> Self {
        FieldInput::Choice(choice.map(str::to_string))
    }
}

/// Forms whose fields can be written one at a time
pub trait Editable: Validate {
    fn apply(&mut self, field: Self::Field, input: FieldInput);
}
