//! Presentation layer for millionaire
//!
//! This crate contains CLI definitions, the console formatter and the
//! interactive terminal game loop.

pub mod cli;
pub mod output;
pub mod play;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use play::{GameRepl, PlayOutcome, PlayerCommand};
