//! Game configuration from TOML (`[game]` section)

use millionaire_application::config::{DEFAULT_REVEAL_DELAY_MS, DEFAULT_TIME_LIMIT_SECONDS};
use serde::{Deserialize, Serialize};

/// Raw game configuration from TOML
///
/// # Example
///
/// ```toml
/// [game]
/// countdown = true
/// time_limit_seconds = 45
/// reveal_delay_ms = 1500
/// autosave = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Run a countdown on each question
    pub countdown: bool,
    /// Seconds allowed per question when the countdown is on
    pub time_limit_seconds: u64,
    /// Pause before the verdict on a selected answer
    pub reveal_delay_ms: u64,
    /// Save the unfinished game after every move
    pub autosave: bool,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            countdown: true,
            time_limit_seconds: DEFAULT_TIME_LIMIT_SECONDS,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            autosave: true,
        }
    }
}
