//! Email format validator

use super::{type_error, FieldCheck};
use crate::error::BoxError;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

// ASCII-only, requires a TLD, no leading/trailing dots in either part
const EMAIL_PATTERN: &str =
    r"^[a-zA-Z0-9]([a-zA-Z0-9._%+-]*[a-zA-Z0-9])?@[a-zA-Z0-9]([a-zA-Z0-9.-]*[a-zA-Z0-9])?\.[a-zA-Z]{2,}$";

fn email_regex() -> Option<&'static Regex> {
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// Validator for email address format
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }

    fn is_valid(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        // RFC 5321 limits
        if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.len() > 255 {
            return false;
        }
        if domain.contains('@') || email.contains("..") {
            return false;
        }

        email_regex().is_some_and(|regex| regex.is_match(email))
    }
}

impl FieldCheck for EmailValidator {
    fn check(&self, value: &Value) -> Result<(), BoxError> {
        if value.is_null() {
            return Ok(());
        }

        let email = value.as_str().ok_or_else(|| type_error("a string"))?;
        if !Self::is_valid(email) {
            return Err("must be a valid email address".into());
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_valid_addresses() {
        let validator = EmailValidator::new();
        for email in ["user@example.com", "first.last+tag@sub.example.org", "a1@b2.io"] {
            assert!(validator.check(&json!(email)).is_ok(), "{email} should be valid");
        }
    }

    #[test]
    fn test_email_invalid_addresses() {
        let validator = EmailValidator::new();
        for email in ["bad", "@example.com", "user@", "a@b@c.com", "user@example", "us..er@example.com", ""] {
            assert_eq!(
                validator.check(&json!(email)).unwrap_err().to_string(),
                "must be a valid email address",
                "{email} should be invalid"
            );
        }
    }

    #[test]
    fn test_email_local_part_limit() {
        let email = format!("{}@example.com", "a".repeat(65));
        assert!(EmailValidator::new().check(&json!(email)).is_err());
    }

    #[test]
    fn test_email_wrong_type() {
        assert_eq!(EmailValidator::new().check(&json!(true)).unwrap_err().to_string(), "must be a string");
    }
}
