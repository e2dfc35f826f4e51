//! Session value objects

use crate::lifeline::value_objects::Lifeline;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of resolving one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// Lifecycle state of a session
///
/// `Created` behaves exactly like `InProgress`; it only marks that no turn
/// has been played and no lifeline spent yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Created,
    InProgress,
    Finished,
}

impl SessionState {
    pub fn as_str(&self) -> &str {
        match self {
            SessionState::Created => "created",
            SessionState::InProgress => "in_progress",
            SessionState::Finished => "finished",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signal that a mutator was refused and nothing changed.
///
/// This is an expected outcome (a double tap, a late timer), so callers
/// branch on it rather than treating it as a failure.
#[must_use]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    #[error("The game is already finished")]
    GameFinished,

    #[error("{0} has already been used")]
    LifelineSpent(Lifeline),

    #[error("Your answer is locked in")]
    AnswerLocked,
}
