// File: src/error.rs
// Purpose: Typed errors of the submission flow

use thiserror::Error;

/// Why a submission did not go through
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The backend refused the data
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The backend could not be reached
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// `submit` was called while the modal was not showing the form
    #[error("form is not open for submission (phase: {0})")]
    NotOpen(&'static str),
}
