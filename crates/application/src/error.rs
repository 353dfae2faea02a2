//! Errors surfaced by the application layer.

use domain::{PricingError, RepositoryError};
use thiserror::Error;

/// Errors returned to callers of the order workflows.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The request is malformed; `field` names the first offending field.
    #[error("validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// The requested order does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Persistence or other failure the caller cannot correct.
    ///
    /// The cause is kept for diagnostics but is not part of the message.
    #[error("internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<RepositoryError>,
    },
}

impl ApplicationError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, source: impl Into<Option<RepositoryError>>) -> Self {
        Self::Internal {
            message: message.into(),
            source: source.into(),
        }
    }
}

/// Amounts too large to price are a caller error.
impl From<PricingError> for ApplicationError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::SubtotalOverflow { index } => Self::validation(
                format!("items[{index}].price"),
                "item subtotal is out of range",
            ),
            PricingError::TotalOverflow => Self::validation("items", "order total is out of range"),
        }
    }
}

/// Convenience type alias for application results.
pub type Result<T> = std::result::Result<T, ApplicationError>;
