//! # innkeep
//!
//! Forms of a hotel management app: authentication, guests, rooms, staff,
//! bookings and property owner onboarding. Each form validates with
//! [`innkeep_validation`], booking forms price themselves with
//! [`innkeep_pricing`], and [`SubmissionModal`] drives the async
//! save-and-confirm flow.
//!
//! ```rust
//! use innkeep::forms::{GuestField, GuestForm};
//! use innkeep::FormState;
//!
//! let mut state = FormState::new(GuestForm::default());
//! state.set(GuestField::Phone, "12345");
//!
//! // Nothing is shown until the user leaves the field
//! assert!(state.visible_errors().is_empty());
//!
//! state.blur(GuestField::Phone);
//! assert_eq!(state.visible_error(GuestField::Phone), Some("Phone number must be 10 digits"));
//! ```

pub mod booking_editor;
pub mod config;
pub mod error;
pub mod form_state;
pub mod forms;
pub mod notify;
pub mod options;
pub mod submission;
pub mod validation_pipeline;

pub use booking_editor::{BookingEditor, BookingSubmission};
pub use config::{Config, ConfigSource};
pub use error::SubmitError;
pub use form_state::FormState;
pub use forms::{Editable, FieldInput, FormKind};
pub use notify::{LogNotifier, Notice, NoticeLog, Notifier};
pub use options::{GuestOption, RoomOption};
pub use submission::{
    Delay, NoDelay, SubmissionModal, SubmissionPhase, SubmitOutcome, Submitter, TokioDelay,
};
pub use validation_pipeline::{validate_payload, FieldErrors, ValidationPipelineResult};

pub use innkeep_pricing as pricing;
pub use innkeep_validation as validation;
