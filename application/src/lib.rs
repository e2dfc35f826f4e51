//! Application layer for millionaire
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GameConfig;
pub use ports::{
    game_event_logger::{GameEvent, GameEventLogger, NoGameEventLogger},
    question_source::{QuestionSource, QuestionSourceError},
    session_store::{InMemorySessionStore, SessionStore, SessionStoreError},
};
pub use use_cases::answer_resolver::{AnswerReport, AnswerResolver};
pub use use_cases::game_controller::{GameController, Resolution};
pub use use_cases::resolution::{PendingResolution, ResolutionGate, Submission};
pub use use_cases::start_game::{GameOrigin, StartGameError, StartGameUseCase};
