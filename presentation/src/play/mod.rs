//! Terminal game loop

pub mod command;
pub mod repl;

pub use command::PlayerCommand;
pub use repl::{GameRepl, PlayOutcome};
