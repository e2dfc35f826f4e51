//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application and domain
//! types once validated.

mod game;
mod ladder;
mod lifelines;
mod output;
mod storage;

pub use game::FileGameConfig;
pub use ladder::FileLadderConfig;
pub use lifelines::FileLifelinesConfig;
pub use output::FileOutputConfig;
pub use storage::FileStorageConfig;

use millionaire_application::GameConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("game.time_limit_seconds cannot be 0 (set game.countdown = false instead)")]
    ZeroTimeLimit,

    #[error("lifelines.{field} must be between 0 and 1, got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("invalid [ladder]: {0}")]
    InvalidLadder(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub game: FileGameConfig,
    pub ladder: FileLadderConfig,
    pub lifelines: FileLifelinesConfig,
    pub storage: FileStorageConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.game.countdown && self.game.time_limit_seconds == 0 {
            return Err(ConfigValidationError::ZeroTimeLimit);
        }

        for (field, value) in [
            ("audience_accuracy", self.lifelines.audience_accuracy),
            (
                "audience_reduced_pool_accuracy",
                self.lifelines.audience_reduced_pool_accuracy,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::ProbabilityOutOfRange { field, value });
            }
        }

        self.ladder
            .to_ladder()
            .map_err(|e| ConfigValidationError::InvalidLadder(e.to_string()))?;

        Ok(())
    }

    /// Build the game driver configuration
    pub fn to_game_config(&self) -> Result<GameConfig, ConfigValidationError> {
        self.validate()?;
        let ladder = self
            .ladder
            .to_ladder()
            .map_err(|e| ConfigValidationError::InvalidLadder(e.to_string()))?;
        let time_limit = if self.game.countdown {
            self.game.time_limit_seconds
        } else {
            0
        };

        Ok(GameConfig::default()
            .with_time_limit_seconds(time_limit)
            .with_reveal_delay(Duration::from_millis(self.game.reveal_delay_ms))
            .with_autosave(self.game.autosave)
            .with_ladder(ladder)
            .with_audience_policy(self.lifelines.to_policy()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[game]
time_limit_seconds = 45
reveal_delay_ms = 500
autosave = false

[ladder]
amounts = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
checkpoints = [3, 12]

[lifelines]
audience_accuracy = 0.5

[storage]
data_dir = "/var/games"
event_log = true

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.time_limit_seconds, 45);
        assert!(!config.game.autosave);
        assert_eq!(config.ladder.checkpoints, vec![3, 12]);
        assert_eq!(config.lifelines.audience_accuracy, 0.5);
        assert_eq!(config.lifelines.audience_reduced_pool_accuracy, 0.85);
        assert_eq!(config.storage.data_dir.as_deref(), Some("/var/games"));
        assert!(config.storage.event_log);
        assert!(!config.output.color);

        let game = config.to_game_config().unwrap();
        assert_eq!(game.answer_time_limit, Some(Duration::from_secs(45)));
        assert_eq!(game.reveal_delay, Duration::from_millis(500));
        assert_eq!(game.ladder.top_prize(), 15);
        assert!(game.ladder.is_checkpoint(12));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[game]
reveal_delay_ms = 0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.reveal_delay_ms, 0);
        // Defaults should apply
        assert!(config.game.countdown);
        assert_eq!(config.game.time_limit_seconds, 30);
        assert_eq!(config.ladder, FileLadderConfig::default());
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ladder.amounts.len(), 15);
        assert_eq!(config.ladder.checkpoints, vec![5, 10]);
        assert!(!config.storage.event_log);

        let game = config.to_game_config().unwrap();
        assert_eq!(game.answer_time_limit, Some(Duration::from_secs(30)));
        assert!(game.autosave);
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let toml_str = r#"
[game]
time_limit_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroTimeLimit));
    }

    #[test]
    fn test_countdown_off() {
        let toml_str = r#"
[game]
countdown = false
time_limit_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let game = config.to_game_config().unwrap();
        assert!(game.answer_time_limit.is_none());
    }

    #[test]
    fn test_validate_probability_range() {
        let toml_str = r#"
[lifelines]
audience_reduced_pool_accuracy = 1.5
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::ProbabilityOutOfRange {
                field: "audience_reduced_pool_accuracy",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_malformed_ladder() {
        let toml_str = r#"
[ladder]
amounts = [100, 200, 300]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidLadder(_))
        ));
    }
}
