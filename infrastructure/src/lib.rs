//! Infrastructure layer for millionaire
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod questions;
pub mod random;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGameConfig, FileLadderConfig,
    FileLifelinesConfig, FileOutputConfig, FileStorageConfig,
};
pub use logging::JsonlGameEventLogger;
pub use questions::{BuiltinDeck, FeedFileSource};
pub use random::StdRandom;
pub use storage::JsonFileSessionStore;
