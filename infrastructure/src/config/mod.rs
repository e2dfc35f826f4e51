//! Configuration file loading for millionaire
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./millionaire.toml` or `./.millionaire.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/millionaire/config.toml`
//! 4. Fallback: `~/.config/millionaire/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGameConfig, FileLadderConfig, FileLifelinesConfig,
    FileOutputConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
