//! Fiscal code domain errors
//!
//! Generation failures are always surfaced to the caller. Validation of an
//! existing identifier never produces an error; it answers `true` or `false`.

use thiserror::Error;

use core_kernel::{CalendarError, CoreError};

/// Errors that can occur in the fiscal code domain
#[derive(Debug, Error)]
pub enum FiscalCodeError {
    /// A generation input field is malformed
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// No municipality matched the given name
    #[error("Unknown municipality: {0}")]
    UnknownMunicipality(String),

    /// Text could not be parsed as a fiscal code
    #[error("Malformed identifier: {0}")]
    MalformedIdentifier(String),

    /// Omocodia disambiguation is not implemented
    #[error("Collision resolution (omocodia) is not implemented")]
    CollisionResolutionUnsupported,

    /// Kernel failure, e.g. configuration
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FiscalCodeError {
    /// Creates an InvalidInput error for a named field
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FiscalCodeError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a MalformedIdentifier error with a reason
    pub fn malformed(reason: impl Into<String>) -> Self {
        FiscalCodeError::MalformedIdentifier(reason.into())
    }

    /// Returns the offending field for InvalidInput errors
    pub fn field(&self) -> Option<&str> {
        match self {
            FiscalCodeError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<CalendarError> for FiscalCodeError {
    fn from(err: CalendarError) -> Self {
        FiscalCodeError::invalid("birth_date", err.to_string())
    }
}
