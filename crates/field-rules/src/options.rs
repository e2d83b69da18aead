//! Engine configuration

use serde::{Deserialize, Serialize};

/// Options for a [`RuleEngine`](crate::RuleEngine).
///
/// Reserved for future extension: no option is recognized yet. Unknown keys
/// are accepted when deserializing so configs written for newer versions
/// still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct EngineOptions {}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }
}
