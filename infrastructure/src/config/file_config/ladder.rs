//! Prize ladder configuration from TOML (`[ladder]` section)

use millionaire_domain::{DomainError, PrizeLadder};
use serde::{Deserialize, Serialize};

/// Raw ladder configuration from TOML
///
/// # Example
///
/// ```toml
/// [ladder]
/// amounts = [100, 200, 300, 500, 1000, 2000, 4000, 8000,
///            16000, 32000, 64000, 125000, 250000, 500000, 1000000]
/// checkpoints = [5, 10]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLadderConfig {
    /// Prize for each rung, lowest first
    pub amounts: Vec<u64>,
    /// Ordinals (1-based) of the checkpoint rungs
    pub checkpoints: Vec<usize>,
}

impl Default for FileLadderConfig {
    fn default() -> Self {
        let standard = PrizeLadder::standard();
        Self {
            amounts: standard.rungs().iter().map(|r| r.amount).collect(),
            checkpoints: standard.checkpoint_ordinals(),
        }
    }
}

impl FileLadderConfig {
    pub fn to_ladder(&self) -> Result<PrizeLadder, DomainError> {
        PrizeLadder::from_amounts(&self.amounts, &self.checkpoints)
    }
}
