//! Domain layer for millionaire
//!
//! This crate contains the game rules: the prize ladder, the session state
//! machine and the lifelines. It has no dependencies on infrastructure or
//! presentation concerns and never blocks, sleeps or touches I/O.
//!
//! # Core Concepts
//!
//! ## Ladder
//!
//! Fifteen rungs of rising prizes. Rungs 5 and 10 are checkpoints: a wrong
//! answer later in the game falls back to the last one passed.
//!
//! ## Session
//!
//! One game. The score is always the value of the last rung cleared (or the
//! checkpoint fallen back to), never a running sum.
//!
//! ## Lifelines
//!
//! - **50:50**: removes two wrong answers
//! - **Ask the Audience**: suggests an answer with a percentage poll
//! - **Call a Friend**: pardons the next wrong answer (not a timeout)

pub mod core;
pub mod lifeline;
pub mod prize;
pub mod random;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use crate::core::{
    error::DomainError,
    question::{Difficulty, INCORRECT_ANSWER_COUNT, Question},
};
pub use lifeline::{
    engine::{AudiencePolicy, LifelineEngine},
    value_objects::{
        AudienceOutcome, FiftyFiftyOutcome, FriendOutcome, Lifeline, LifelineOutcome, PollShare,
    },
};
pub use prize::{
    ladder::{LADDER_LENGTH, PrizeLadder, Rung},
    scoreboard::{RowKind, ScoreboardRow},
};
pub use random::{RandomSource, ScriptedRandom, shuffle};
pub use session::{
    entities::Session,
    snapshot::SessionSnapshot,
    value_objects::{AnswerOutcome, SessionState, Unavailable},
};
