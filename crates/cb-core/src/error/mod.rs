use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid dashboard kind: {value} {location}")]
    InvalidDashboardKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid document status: {value} {location}")]
    InvalidDocumentStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a named field
    #[track_caller]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
