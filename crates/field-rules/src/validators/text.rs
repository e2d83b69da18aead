//! String membership and substring checks

use super::{type_error, FieldCheck};
use crate::error::BoxError;
use serde_json::Value;

/// Validator that checks if a string is one of the allowed values
#[derive(Debug, Clone)]
pub struct OneOfValidator {
    allowed: Vec<String>,
}

impl OneOfValidator {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

impl FieldCheck for OneOfValidator {
    fn check(&self, value: &Value) -> Result<(), BoxError> {
        if value.is_null() {
            return Ok(());
        }

        let text = value.as_str().ok_or_else(|| type_error("a string"))?;
        if self.allowed.iter().any(|allowed| allowed == text) {
            Ok(())
        } else {
            Err(format!("must be one of: {}", self.allowed.join(", ")).into())
        }
    }

    fn rule_name(&self) -> &'static str {
        "one_of"
    }
}

/// Validator that checks if a string contains a specific substring
#[derive(Debug, Clone)]
pub struct ContainsValidator {
    substring: String,
}

impl ContainsValidator {
    pub fn new(substring: impl Into<String>) -> Self {
        Self {
            substring: substring.into(),
        }
    }
}

impl FieldCheck for ContainsValidator {
    fn check(&self, value: &Value) -> Result<(), BoxError> {
        if value.is_null() {
            return Ok(());
        }

        let text = value.as_str().ok_or_else(|| type_error("a string"))?;
        if text.contains(&self.substring) {
            Ok(())
        } else {
            Err(format!("must contain '{}'", self.substring).into())
        }
    }

    fn rule_name(&self) -> &'static str {
        "contains"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_of() {
        let validator = OneOfValidator::new(["active", "inactive"]);
        assert!(validator.check(&json!("active")).is_ok());
        assert_eq!(
            validator.check(&json!("unknown")).unwrap_err().to_string(),
            "must be one of: active, inactive"
        );
        assert_eq!(validator.check(&json!(1)).unwrap_err().to_string(), "must be a string");
        assert_eq!(validator.allowed().len(), 2);
    }

    #[test]
    fn test_contains() {
        let validator = ContainsValidator::new("@company.com");
        assert!(validator.check(&json!("john@company.com")).is_ok());
        assert_eq!(
            validator.check(&json!("john@gmail.com")).unwrap_err().to_string(),
            "must contain '@company.com'"
        );
        assert!(validator.check(&Value::Null).is_ok());
    }
}
