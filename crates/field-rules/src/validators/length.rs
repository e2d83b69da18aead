//! Length-based validators for strings and collections

use super::{type_error, FieldCheck};
use crate::error::BoxError;
use serde_json::Value;

/// Validator for string/array length constraints
#[derive(Debug, Clone, Default)]
pub struct LengthValidator {
    /// Minimum length (inclusive)
    pub min: Option<usize>,
    /// Maximum length (inclusive)
    pub max: Option<usize>,
    /// Exact length required
    pub exact: Option<usize>,
}

impl LengthValidator {
    /// Create a new length validator with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum length constraint
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum length constraint
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Set exact length requirement
    pub fn exact(mut self, exact: usize) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Set length range (min and max)
    pub fn range(self, min: usize, max: usize) -> Self {
        self.min(min).max(max)
    }

    /// Get the length of a value (supports strings and arrays)
    fn get_length(value: &Value) -> Option<(usize, &'static str)> {
        match value {
            Value::String(s) => Some((s.chars().count(), "characters long")),
            Value::Array(arr) => Some((arr.len(), "items")),
            _ => None,
        }
    }
}

impl FieldCheck for LengthValidator {
    fn check(&self, value: &Value) -> Result<(), BoxError> {
        if value.is_null() {
            return Ok(());
        }

        let (len, unit) = Self::get_length(value).ok_or_else(|| type_error("a string or an array"))?;

        if let Some(exact) = self.exact {
            if len != exact {
                return Err(format!("must be exactly {} {}", exact, unit).into());
            }
        }
        if let Some(min) = self.min {
            if len < min {
                return Err(format!("must be at least {} {}", min, unit).into());
            }
        }
        if let Some(max) = self.max {
            if len > max {
                return Err(format!("must be at most {} {}", max, unit).into());
            }
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_length_min_max() {
        let validator = LengthValidator::new().range(2, 5);
        assert!(validator.check(&json!("abc")).is_ok());
        assert_eq!(validator.check(&json!("a")).unwrap_err().to_string(), "must be at least 2 characters long");
        assert_eq!(validator.check(&json!("abcdef")).unwrap_err().to_string(), "must be at most 5 characters long");
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let validator = LengthValidator::new().max(3);
        assert!(validator.check(&json!("héé")).is_ok());
    }

    #[test]
    fn test_length_exact_on_arrays() {
        let validator = LengthValidator::new().exact(2);
        assert!(validator.check(&json!(["a", "b"])).is_ok());
        assert_eq!(validator.check(&json!(["a"])).unwrap_err().to_string(), "must be exactly 2 items");
    }

    #[test]
    fn test_length_null_and_wrong_type() {
        let validator = LengthValidator::new().min(1);
        assert!(validator.check(&Value::Null).is_ok());
        assert_eq!(validator.check(&json!(42)).unwrap_err().to_string(), "must be a string or an array");
        assert_eq!(validator.rule_name(), "length");
    }
}
