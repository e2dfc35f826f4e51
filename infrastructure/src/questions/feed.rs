//! Trivia feed file adapter.
//!
//! Reads a saved response of the public trivia feed:
//!
//! ```json
//! {
//!   "response_code": 0,
//!   "results": [
//!     {
//!       "difficulty": "easy",
//!       "category": "Science: Computers",
//!       "question": "What does CPU stand for?",
//!       "correct_answer": "Central Processing Unit",
//!       "incorrect_answers": ["...", "...", "..."]
//!     }
//!   ]
//! }
//! ```

use async_trait::async_trait;
use millionaire_application::ports::question_source::{QuestionSource, QuestionSourceError};
use millionaire_domain::{Difficulty, Question};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Top-level feed document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub response_code: i64,
    pub results: Vec<FeedQuestion>,
}

/// One feed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedQuestion {
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub category: Option<String>,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl FeedQuestion {
    fn into_question(self) -> Result<Question, QuestionSourceError> {
        let text = self.question.clone();
        let mut question = Question::new(self.question, self.correct_answer, self.incorrect_answers)
            .map_err(|e| QuestionSourceError::Malformed(format!("{:?}: {}", text, e)))?;
        if let Some(category) = self.category {
            question = question.with_category(category);
        }
        if let Some(difficulty) = self.difficulty {
            question = question.with_difficulty(difficulty);
        }
        Ok(question)
    }
}

/// Parse a feed document into questions, in feed order
pub fn parse_feed(json: &str) -> Result<Vec<Question>, QuestionSourceError> {
    let response: FeedResponse =
        serde_json::from_str(json).map_err(|e| QuestionSourceError::Malformed(e.to_string()))?;

    if response.response_code != 0 {
        return Err(QuestionSourceError::FeedError(response.response_code));
    }

    response
        .results
        .into_iter()
        .map(FeedQuestion::into_question)
        .collect()
}

/// Question source reading a feed file from disk
#[derive(Debug, Clone)]
pub struct FeedFileSource {
    path: PathBuf,
}

impl FeedFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionSource for FeedFileSource {
    async fn fetch_questions(&self, count: usize) -> Result<Vec<Question>, QuestionSourceError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            QuestionSourceError::Unreadable {
                origin: self.path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        let mut questions = parse_feed(&content)?;
        debug!("Feed {} holds {} questions", self.path.display(), questions.len());

        if questions.len() < count {
            return Err(QuestionSourceError::NotEnough {
                needed: count,
                available: questions.len(),
            });
        }
        questions.truncate(count);
        info!("Loaded {} questions from {}", count, self.path.display());
        Ok(questions)
    }

    fn describe(&self) -> String {
        format!("feed file {}", self.path.display())
    }
}
