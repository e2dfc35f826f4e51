//! Question source port
//!
//! Where a game's fifteen questions come from. Adapters live in the
//! infrastructure layer (feed files, the built-in deck).

use async_trait::async_trait;
use millionaire_domain::Question;
use thiserror::Error;

/// Errors that can occur while fetching questions
#[derive(Error, Debug)]
pub enum QuestionSourceError {
    #[error("Could not read questions from {origin}: {message}")]
    Unreadable { origin: String, message: String },

    #[error("Malformed question feed: {0}")]
    Malformed(String),

    #[error("Question feed reported error code {0}")]
    FeedError(i64),

    #[error("Not enough questions: needed {needed}, found {available}")]
    NotEnough { needed: usize, available: usize },
}

/// Port for obtaining a question set
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch exactly `count` questions
    async fn fetch_questions(&self, count: usize) -> Result<Vec<Question>, QuestionSourceError>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String;
}
