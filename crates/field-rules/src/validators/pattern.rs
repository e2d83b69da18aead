//! Pattern-based validators using regular expressions

use super::{type_error, FieldCheck};
use crate::error::BoxError;
use regex::Regex;
use serde_json::Value;

/// Validator for custom regular expression patterns
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: Regex,
    /// Whether to match the entire string (default) or just find a match
    pub full_match: bool,
}

impl PatternValidator {
    /// Create a new pattern validator
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    /// Create a case-insensitive pattern validator
    pub fn new_case_insensitive(pattern: &str) -> Result<Self, regex::Error> {
        Self::new(&format!("(?i){}", pattern))
    }

    /// Create a validator from an existing Regex
    pub fn from_regex(pattern: Regex) -> Self {
        Self {
            pattern,
            full_match: true,
        }
    }

    /// Set whether to match the full string or just find a match
    pub fn full_match(mut self, full_match: bool) -> Self {
        self.full_match = full_match;
        self
    }

    /// Get the pattern string
    pub fn pattern_string(&self) -> &str {
        self.pattern.as_str()
    }

    fn matches(&self, text: &str) -> bool {
        if self.full_match {
            self.pattern
                .find(text)
                .is_some_and(|m| m.start() == 0 && m.end() == text.len())
        } else {
            self.pattern.is_match(text)
        }
    }
}

impl FieldCheck for PatternValidator {
    fn check(&self, value: &Value) -> Result<(), BoxError> {
        if value.is_null() {
            return Ok(());
        }

        let text = value.as_str().ok_or_else(|| type_error("a string"))?;
        if !self.matches(text) {
            return Err("does not match the required pattern".into());
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "pattern"
    }
}
