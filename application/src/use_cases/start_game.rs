//! Start Game use case
//!
//! Fetches a question set and builds a fresh session, or rebuilds an
//! unfinished one from the store.

use crate::ports::question_source::{QuestionSource, QuestionSourceError};
use crate::ports::session_store::SessionStore;
use millionaire_domain::{DomainError, LADDER_LENGTH, PrizeLadder, Session};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while starting a game
#[derive(Error, Debug)]
pub enum StartGameError {
    #[error("Question source failed: {0}")]
    Source(#[from] QuestionSourceError),

    #[error("Invalid question set: {0}")]
    InvalidQuestions(#[from] DomainError),
}

/// How the session came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOrigin {
    New,
    Resumed,
}

/// Use case for starting or resuming a game
pub struct StartGameUseCase<Q: QuestionSource + 'static> {
    source: Arc<Q>,
    store: Arc<dyn SessionStore>,
    ladder: PrizeLadder,
}

impl<Q: QuestionSource + 'static> StartGameUseCase<Q> {
    pub fn new(source: Arc<Q>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            source,
            store,
            ladder: PrizeLadder::standard(),
        }
    }

    pub fn with_ladder(mut self, ladder: PrizeLadder) -> Self {
        self.ladder = ladder;
        self
    }

    /// Start a brand new game
    pub async fn new_game(&self) -> Result<Session, StartGameError> {
        info!("Fetching questions from {}", self.source.describe());
        let questions = self.source.fetch_questions(LADDER_LENGTH).await?;
        let session = Session::with_ladder(questions, self.ladder.clone())?;

        // A new game replaces whatever was saved
        if let Err(e) = self.store.clear_session() {
            warn!("Could not clear saved game: {}", e);
        }
        Ok(session)
    }

    /// Resume the saved game if there is an unfinished one, otherwise start new
    pub async fn resume_or_new(&self) -> Result<(Session, GameOrigin), StartGameError> {
        if let Some(session) = self.saved_game() {
            return Ok((session, GameOrigin::Resumed));
        }
        Ok((self.new_game().await?, GameOrigin::New))
    }

    /// The saved unfinished game, if it can be restored.
    ///
    /// Unreadable or invalid saves are logged and ignored.
    pub fn saved_game(&self) -> Option<Session> {
        let snapshot = match self.store.load_session() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                debug!("No saved game");
                return None;
            }
            Err(e) => {
                warn!("Could not load saved game: {}", e);
                return None;
            }
        };

        if snapshot.is_finished {
            debug!("Saved game is already finished, ignoring it");
            return None;
        }

        match Session::resume(snapshot, self.ladder.clone()) {
            Ok(session) => {
                info!("Resuming saved game at question {}", session.ordinal());
                Some(session)
            }
            Err(e) => {
                warn!("Saved game is invalid, ignoring it: {}", e);
                None
            }
        }
    }
}
