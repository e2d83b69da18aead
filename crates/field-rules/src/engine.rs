//! First-error evaluation of a rule map against records

use crate::error::ValidationResult;
use crate::options::EngineOptions;
use crate::record::RecordView;
use crate::rules::RuleMap;
use serde::Serialize;

/// Evaluates a [`RuleMap`] against records of type `T`.
///
/// The rule map is fixed at construction. `evaluate_first` only reads it, so
/// one engine can be shared across threads as long as its validator
/// functions are thread-safe (which `ValidateFn` already requires).
pub struct RuleEngine<T> {
    options: EngineOptions,
    rules: RuleMap<T>,
}

impl<T> RuleEngine<T>
where
    T: Serialize,
{
    /// Create an engine with default options
    pub fn new(rules: RuleMap<T>) -> Self {
        Self::with_options(rules, EngineOptions::default())
    }

    /// Create an engine with explicit options
    pub fn with_options(rules: RuleMap<T>, options: EngineOptions) -> Self {
        tracing::debug!(fields = rules.len(), "rule engine created");
        Self { options, rules }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn rules(&self) -> &RuleMap<T> {
        &self.rules
    }

    /// Validate a record and stop at the first error.
    ///
    /// Fields are checked in rule map order; within a field, rules run in
    /// declared order.
    ///
    /// # Panics
    ///
    /// Panics if `target` does not serialize to a struct, or if the rule map
    /// names a field the record does not have. Both mean the engine was wired
    /// to the wrong type.
    pub fn evaluate_first(&self, target: &T) -> ValidationResult<()> {
        let record = RecordView::of(target);

        for (field, rules) in self.rules.iter() {
            let value = record.field_or_panic(field);
            tracing::trace!(field, rules = rules.len(), "evaluating field");

            if let Err(error) = rules.evaluate(value, field, target) {
                tracing::debug!(field, code = error.code(), "validation failed");
                return Err(error);
            }
        }

        Ok(())
    }
}

impl<T> Clone for RuleEngine<T> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<T> std::fmt::Debug for RuleEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("options", &self.options)
            .field("rules", &self.rules)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    #[derive(Serialize)]
    struct Account {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Age")]
        age: u32,
    }

    #[test]
    fn test_valid_record_passes() {
        let engine = RuleEngine::new(
            RuleMap::new()
                .field("Name", Rule::required())
                .field("Age", Rule::required()),
        );
        let account = Account {
            name: "Ada".to_string(),
            age: 36,
        };
        assert!(engine.evaluate_first(&account).is_ok());
    }

    #[test]
    fn test_first_failing_field_wins() {
        let engine = RuleEngine::new(
            RuleMap::new()
                .field("Age", Rule::required().message("age missing"))
                .field("Name", Rule::required()),
        );
        let account = Account {
            name: String::new(),
            age: 0,
        };
        let error = engine.evaluate_first(&account).unwrap_err();
        assert_eq!(error.field, "Age");
        assert_eq!(error.to_string(), "age missing");
    }

    #[test]
    fn test_empty_rule_map_accepts_any_record() {
        let engine = RuleEngine::<Account>::new(RuleMap::new());
        let account = Account {
            name: String::new(),
            age: 0,
        };
        assert!(engine.evaluate_first(&account).is_ok());
    }

    #[test]
    #[should_panic(expected = "value must be a struct")]
    fn test_empty_rule_map_still_rejects_primitive() {
        RuleEngine::<u8>::new(RuleMap::new()).evaluate_first(&7).ok();
    }

    #[derive(Serialize)]
    struct Profile {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Nickname", skip_serializing_if = "Option::is_none")]
        nickname: Option<String>,
        #[serde(rename = "Visits")]
        visits: Option<u32>,
    }

    #[test]
    fn test_skipped_none_is_required_not_missing() {
        let engine = RuleEngine::new(
            RuleMap::new()
                .field("Name", Rule::required())
                .field("Nickname", Rule::required()),
        );
        let anonymous = Profile {
            name: "Ada".to_string(),
            nickname: None,
            visits: None,
        };
        assert_eq!(
            engine.evaluate_first(&anonymous).unwrap_err().to_string(),
            "Nickname is required"
        );

        let named = Profile {
            nickname: Some("countess".to_string()),
            ..anonymous
        };
        assert!(engine.evaluate_first(&named).is_ok());
    }

    #[test]
    fn test_some_zero_satisfies_required() {
        let engine = RuleEngine::new(RuleMap::new().field("Visits", Rule::required()));
        let profile = Profile {
            name: String::new(),
            nickname: None,
            visits: Some(0),
        };
        assert!(engine.evaluate_first(&profile).is_ok());
    }

    #[test]
    fn test_with_options_and_accessors() {
        let engine = RuleEngine::<Account>::with_options(
            RuleMap::new().field("Name", Rule::required()),
            EngineOptions::new(),
        );
        assert_eq!(engine.options(), &EngineOptions::default());
        assert_eq!(engine.rules().len(), 1);

        let cloned = engine.clone();
        assert!(format!("{:?}", cloned).contains("RuleEngine"));
    }
}
