//! Numeric value validators

use super::{type_error, FieldCheck};
use crate::error::BoxError;
use serde_json::Value;

/// Validator for numeric constraints
#[derive(Debug, Clone, Default)]
pub struct NumericValidator {
    /// Minimum value (inclusive)
    pub min: Option<f64>,
    /// Maximum value (inclusive)
    pub max: Option<f64>,
    /// Allow only integers (no decimals)
    pub integer_only: bool,
}

impl NumericValidator {
    /// Create a new numeric validator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum value constraint
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum value constraint
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set value range (min and max)
    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// Require integer values only (no decimals)
    pub fn integer_only(mut self, integer_only: bool) -> Self {
        self.integer_only = integer_only;
        self
    }

    fn bounds_message(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min == max => format!("must equal {}", min),
            (Some(min), Some(max)) => format!("must be between {} and {}", min, max),
            (Some(min), None) => format!("must be at least {}", min),
            (None, Some(max)) => format!("must be at most {}", max),
            (None, None) => "must be a valid number".to_string(),
        }
    }
}

impl FieldCheck for NumericValidator {
    fn check(&self, value: &Value) -> Result<(), BoxError> {
        if value.is_null() {
            return Ok(());
        }

        let num = value.as_f64().ok_or_else(|| type_error("a number"))?;

        if self.integer_only && num.fract() != 0.0 {
            return Err(type_error("an integer"));
        }

        let too_small = self.min.is_some_and(|min| num < min);
        let too_large = self.max.is_some_and(|max| num > max);
        if too_small || too_large {
            return Err(self.bounds_message().into());
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "numeric"
    }
}
