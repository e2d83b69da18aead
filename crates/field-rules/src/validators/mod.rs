//! Built-in checks for common validation scenarios
//!
//! Each check validates a single serialized field value and turns into a
//! custom-validator [`Rule`] with [`FieldCheck::into_rule`]. Null values pass
//! every check; pair a check with [`Rule::required`] to reject them.

pub mod email;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod text;

pub use email::EmailValidator;
pub use length::LengthValidator;
pub use numeric::NumericValidator;
pub use pattern::PatternValidator;
pub use text::{ContainsValidator, OneOfValidator};

use crate::error::BoxError;
use crate::rule::Rule;
use serde_json::Value;

/// A reusable check over one field value
pub trait FieldCheck: Send + Sync + 'static {
    /// Validate a single value
    fn check(&self, value: &Value) -> Result<(), BoxError>;

    /// Get the check name
    fn rule_name(&self) -> &'static str;

    /// Wrap this check as a custom-validator rule
    fn into_rule<T>(self) -> Rule<T>
    where
        Self: Sized,
    {
        Rule::custom(move |_rule, value, _target| self.check(value))
    }
}

fn type_error(expected: &str) -> BoxError {
    format!("must be {}", expected).into()
}
