//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod game_event_logger;
pub mod question_source;
pub mod session_store;
