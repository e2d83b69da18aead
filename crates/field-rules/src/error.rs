//! Validation error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Error type custom validators may return. Anything that implements
/// `std::error::Error` converts into it, including plain strings.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Which check produced a validation failure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required field held its zero value
    Required,
    /// A custom validator function rejected the value
    Custom,
}

impl ErrorKind {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::Custom => "custom",
        }
    }
}

/// The first rule violation found on a record.
///
/// `Display` renders only the human-readable message, so
/// `err.to_string()` is exactly what a caller should show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
    /// The check that failed
    pub kind: ErrorKind,
}

impl ValidationError {
    /// Create a validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
        }
    }

    /// Error for a required field holding its zero value
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{} is required", field);
        Self::new(field, message, ErrorKind::Required)
    }

    /// Error surfaced from a custom validator, keeping its text verbatim
    pub fn custom(field: impl Into<String>, source: &(dyn std::error::Error + Send + Sync)) -> Self {
        Self::new(field, source.to_string(), ErrorKind::Custom)
    }

    /// Replace the message, keeping field and kind
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Stable code of the failed check
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Convert to a JSON-serializable format for API responses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.code(),
                "message": self.message,
                "field": self.field,
            }
        })
    }
}
