//! Application-level configuration.
//!
//! Controls how the game driver behaves: the countdown, the pause before a
//! result is revealed, autosave, and which ladder and audience odds apply.

use millionaire_domain::{AudiencePolicy, PrizeLadder};
use std::time::Duration;

/// Default seconds allowed per question
pub const DEFAULT_TIME_LIMIT_SECONDS: u64 = 30;

/// Default pause before an answer is resolved
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 2_000;

/// Game driver configuration.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Time allowed to answer each question; `None` disables the countdown.
    pub answer_time_limit: Option<Duration>,
    /// Pause between selecting an answer and resolving it.
    pub reveal_delay: Duration,
    /// Save the unfinished game after every move.
    pub autosave: bool,
    pub ladder: PrizeLadder,
    pub audience: AudiencePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            answer_time_limit: Some(Duration::from_secs(DEFAULT_TIME_LIMIT_SECONDS)),
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
            autosave: true,
            ladder: PrizeLadder::standard(),
            audience: AudiencePolicy::default(),
        }
    }
}

impl GameConfig {
    /// Sets the countdown from seconds; `0` disables it.
    pub fn with_time_limit_seconds(mut self, seconds: u64) -> Self {
        self.answer_time_limit = (seconds > 0).then(|| Duration::from_secs(seconds));
        self
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn with_ladder(mut self, ladder: PrizeLadder) -> Self {
        self.ladder = ladder;
        self
    }

    pub fn with_audience_policy(mut self, policy: AudiencePolicy) -> Self {
        self.audience = policy;
        self
    }
}
