//! Domain errors for the trade pipeline.

use std::fmt;

/// Domain-level errors that can occur in business logic.
///
/// These errors are independent of infrastructure concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// A write-once field of an aggregate was written a second time.
    FieldAlreadySet {
        /// Aggregate type (e.g., "TradeState").
        aggregate: String,
        /// Field that already holds a value.
        field: String,
    },
}

impl DomainError {
    /// Create an invalid value error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::FieldAlreadySet { aggregate, field } => {
                write!(f, "{aggregate}.{field} is already set and cannot be overwritten")
            }
        }
    }
}

impl std::error::Error for DomainError {}
