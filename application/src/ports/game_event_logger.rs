//! Port for structured game-event logging.
//!
//! Defines the [`GameEventLogger`] trait for recording what happened in a
//! game (answers resolved, lifelines used, game over) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the game
//! transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured game event for logging.
pub struct GameEvent {
    /// Event type identifier (e.g., "answer_resolved", "lifeline_used").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GameEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging game events to a structured log.
///
/// The `log` method is synchronous and non-fallible: a broken log must not
/// stop the game.
pub trait GameEventLogger: Send + Sync {
    fn log(&self, event: GameEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoGameEventLogger;

impl GameEventLogger for NoGameEventLogger {
    fn log(&self, _event: GameEvent) {}
}
