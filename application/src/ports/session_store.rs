//! Session store port
//!
//! Persists the unfinished game and the best score between runs. The store
//! deals only in [`SessionSnapshot`] values; rebuilding a
//! [`Session`](millionaire_domain::Session) from one is the caller's job.

use millionaire_domain::SessionSnapshot;
use std::sync::Mutex;
use thiserror::Error;

/// Errors raised by session store adapters
#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),
}

/// Port for saving and restoring game state
pub trait SessionStore: Send + Sync {
    fn save_session(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError>;

    /// The saved game, if one exists
    fn load_session(&self) -> Result<Option<SessionSnapshot>, SessionStoreError>;

    fn clear_session(&self) -> Result<(), SessionStoreError>;

    /// Best finished score so far (0 when none recorded)
    fn load_best_score(&self) -> Result<u64, SessionStoreError>;

    fn save_best_score(&self, score: u64) -> Result<(), SessionStoreError>;
}

/// Volatile store for tests and for running without saves
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    session: Mutex<Option<SessionSnapshot>>,
    best_score: Mutex<u64>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> SessionStoreError {
    SessionStoreError::Io("in-memory store lock poisoned".to_string())
}

impl SessionStore for InMemorySessionStore {
    fn save_session(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError> {
        *self.session.lock().map_err(poisoned)? = Some(snapshot.clone());
        Ok(())
    }

    fn load_session(&self) -> Result<Option<SessionSnapshot>, SessionStoreError> {
        Ok(self.session.lock().map_err(poisoned)?.clone())
    }

    fn clear_session(&self) -> Result<(), SessionStoreError> {
        *self.session.lock().map_err(poisoned)? = None;
        Ok(())
    }

    fn load_best_score(&self) -> Result<u64, SessionStoreError> {
        Ok(*self.best_score.lock().map_err(poisoned)?)
    }

    fn save_best_score(&self, score: u64) -> Result<(), SessionStoreError> {
        *self.best_score.lock().map_err(poisoned)? = score;
        Ok(())
    }
}
