//! Single validation rule for a field

use crate::error::{BoxError, ValidationError, ValidationResult};
use crate::value::FieldValue;
use serde_json::Value;
use std::sync::Arc;

/// Custom check run against a field value.
///
/// Receives the rule being evaluated, the field's serialized value, and the
/// whole typed target so cross-field checks can read sibling fields.
pub type ValidateFn<T> = Arc<dyn Fn(&Rule<T>, &Value, &T) -> Result<(), BoxError> + Send + Sync>;

/// One validation unit: a required flag, an optional custom check and an
/// optional message that replaces whatever error the rule produces.
pub struct Rule<T> {
    required: bool,
    message: Option<String>,
    validator: Option<ValidateFn<T>>,
}

impl<T> Rule<T> {
    /// Create a rule that checks nothing
    pub fn new() -> Self {
        Self {
            required: false,
            message: None,
            validator: None,
        }
    }

    /// Create a rule that rejects zero values
    pub fn required() -> Self {
        Self::new().set_required(true)
    }

    /// Create a rule backed by a custom validation function
    pub fn custom<F>(validator: F) -> Self
    where
        F: Fn(&Rule<T>, &Value, &T) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Self::new().validator(validator)
    }

    /// Set whether the field is required
    pub fn set_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the custom validation function
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Rule<T>, &Value, &T) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Set a message that replaces this rule's error text
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// The override message, if one is set and non-empty
    pub fn override_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// Evaluate this rule against a field value.
    ///
    /// The required check runs first; when it fails the custom validator is
    /// not invoked. Any failure is reported with the override message when
    /// one is set.
    pub fn evaluate(&self, value: &FieldValue, field: &str, target: &T) -> ValidationResult<()> {
        self.check(value, field, target).map_err(|error| match self.override_message() {
            Some(message) => error.with_message(message),
            None => error,
        })
    }

    fn check(&self, value: &FieldValue, field: &str, target: &T) -> ValidationResult<()> {
        if self.required && value.is_zero() {
            return Err(ValidationError::required(field));
        }

        if let Some(ref validator) = self.validator {
            validator(self, value.value(), target)
                .map_err(|source| ValidationError::custom(field, source.as_ref()))?;
        }

        Ok(())
    }
}

impl<T> Default for Rule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            required: self.required,
            message: self.message.clone(),
            validator: self.validator.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("required", &self.required)
            .field("has_validator", &self.validator.is_some())
            .field("message", &self.message)
            .finish()
    }
}
