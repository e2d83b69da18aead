//! Rule collections: ordered rules per field, and fields per record type

use crate::error::ValidationResult;
use crate::rule::Rule;
use indexmap::IndexMap;
use crate::value::FieldValue;

/// Ordered rules for a single field. The first failing rule wins.
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleSet<T> {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule
    pub fn push(&mut self, rule: Rule<T>) {
        self.rules.push(rule);
    }

    /// Append a rule, builder style
    pub fn with(mut self, rule: Rule<T>) -> Self {
        self.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule<T>> {
        self.rules.iter()
    }

    /// Evaluate rules in declared order, stopping at the first failure
    pub fn evaluate(&self, value: &FieldValue, field: &str, target: &T) -> ValidationResult<()> {
        for rule in &self.rules {
            rule.evaluate(value, field, target)?;
        }
        Ok(())
    }
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RuleSet<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T> std::fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.rules).finish()
    }
}

impl<T> From<Vec<Rule<T>>> for RuleSet<T> {
    fn from(rules: Vec<Rule<T>>) -> Self {
        Self { rules }
    }
}

impl<T> From<Rule<T>> for RuleSet<T> {
    fn from(rule: Rule<T>) -> Self {
        Self { rules: vec![rule] }
    }
}

impl<T> FromIterator<Rule<T>> for RuleSet<T> {
    fn from_iter<I: IntoIterator<Item = Rule<T>>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RuleSet<T> {
    type Item = &'a Rule<T>;
    type IntoIter = std::slice::Iter<'a, Rule<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Field name to rule set mapping for one record type.
///
/// Fields are evaluated in insertion order, so "the first error" is
/// deterministic.
pub struct RuleMap<T> {
    fields: IndexMap<String, RuleSet<T>>,
}

impl<T> RuleMap<T> {
    /// Create an empty rule map
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Set the rule set for a field.
    ///
    /// Replacing an existing field keeps its original evaluation position.
    /// Returns the previous rule set, if any.
    pub fn insert(&mut self, field: impl Into<String>, rules: impl Into<RuleSet<T>>) -> Option<RuleSet<T>> {
        self.fields.insert(field.into(), rules.into())
    }

    /// Add a validation rule for a specific field
    pub fn field(mut self, field: impl Into<String>, rule: Rule<T>) -> Self {
        self.fields.entry(field.into()).or_default().push(rule);
        self
    }

    /// Add multiple validation rules for a specific field
    pub fn rules<I>(mut self, field: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule<T>>,
    {
        let set = self.fields.entry(field.into()).or_default();
        for rule in rules {
            set.push(rule);
        }
        self
    }

    /// Get rules for a specific field
    pub fn get(&self, field: &str) -> Option<&RuleSet<T>> {
        self.fields.get(field)
    }

    /// Get the number of fields with rules
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in evaluation order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate `(field, rules)` pairs in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSet<T>)> {
        self.fields.iter().map(|(field, rules)| (field.as_str(), rules))
    }
}

impl<T> Default for RuleMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RuleMap<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T> std::fmt::Debug for RuleMap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleMap")
            .field("field_count", &self.fields.len())
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}

impl<T, K> FromIterator<(K, RuleSet<T>)> for RuleMap<T>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, RuleSet<T>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (field, rules) in iter {
            map.insert(field, rules);
        }
        map
    }
}
