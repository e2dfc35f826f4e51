//! Lifeline configuration from TOML (`[lifelines]` section)

use millionaire_domain::AudiencePolicy;
use serde::{Deserialize, Serialize};

/// Raw lifeline odds from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLifelinesConfig {
    /// Chance the audience backs the correct answer
    pub audience_accuracy: f64,
    /// The same chance once 50:50 has removed two answers
    pub audience_reduced_pool_accuracy: f64,
}

impl Default for FileLifelinesConfig {
    fn default() -> Self {
        let policy = AudiencePolicy::default();
        Self {
            audience_accuracy: policy.accuracy,
            audience_reduced_pool_accuracy: policy.reduced_pool_accuracy,
        }
    }
}

impl FileLifelinesConfig {
    pub fn to_policy(&self) -> AudiencePolicy {
        AudiencePolicy {
            accuracy: self.audience_accuracy,
            reduced_pool_accuracy: self.audience_reduced_pool_accuracy,
        }
    }
}
