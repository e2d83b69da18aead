//! # field-rules
//!
//! Declarative field validation for any `serde::Serialize` record. Build a
//! [`RuleMap`] of field names to ordered [`Rule`]s, hand it to a
//! [`RuleEngine`], and get back the first violation found.
//!
//! ```
//! use field_rules::{Rule, RuleEngine, RuleMap};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Signup {
//!     #[serde(rename = "Name")]
//!     name: String,
//! }
//!
//! let engine = RuleEngine::new(RuleMap::new().field("Name", Rule::required()));
//! let err = engine.evaluate_first(&Signup { name: String::new() }).unwrap_err();
//! assert_eq!(err.to_string(), "Name is required");
//! ```
//!
//! Wiring mistakes (validating a non-struct, or naming a field the record
//! does not have) panic instead of returning a validation error.

pub mod engine;
pub mod error;
pub mod options;
pub mod record;
pub mod rule;
pub mod rules;
pub mod validators;
pub mod value;

pub use engine::RuleEngine;
pub use error::{BoxError, ErrorKind, ValidationError, ValidationResult};
pub use options::EngineOptions;
pub use record::RecordView;
pub use rule::{Rule, ValidateFn};
pub use rules::{RuleMap, RuleSet};
pub use value::{is_zero, FieldValue};

// Built-in validators
pub use validators::{
    ContainsValidator, EmailValidator, FieldCheck, LengthValidator, NumericValidator,
    OneOfValidator, PatternValidator,
};
