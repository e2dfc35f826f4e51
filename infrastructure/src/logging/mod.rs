//! Logging infrastructure: structured game transcripts.
//!
//! Provides [`JsonlGameEventLogger`], a JSONL file writer that implements
//! the [`GameEventLogger`](millionaire_application::GameEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlGameEventLogger;
