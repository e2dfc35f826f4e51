//! JSON file implementation of the session store port.
//!
//! Layout under the data directory:
//!
//! - `session.json`: the unfinished game's [`SessionSnapshot`]
//! - `best_score.json`: `{"best_score": <u64>}`
//!
//! Files are written to a temporary sibling and renamed into place so a
//! crash mid-write never leaves a truncated save.

use millionaire_application::ports::session_store::{SessionStore, SessionStoreError};
use millionaire_domain::SessionSnapshot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const SESSION_FILE: &str = "session.json";
const BEST_SCORE_FILE: &str = "best_score.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u64,
}

/// Session store backed by JSON files
#[derive(Debug, Clone)]
pub struct JsonFileSessionStore {
    dir: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the platform data directory (`~/.local/share/millionaire` on Linux)
    pub fn default_location() -> Option<Self> {
        dirs::data_dir().map(|d| Self::new(d.join("millionaire")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    pub fn best_score_path(&self) -> PathBuf {
        self.dir.join(BEST_SCORE_FILE)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| io_error(path, e))?;

        debug!("Wrote {}", path.display());
        Ok(())
    }

    fn read_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &Path,
    ) -> Result<Option<T>, SessionStoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(path, e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| SessionStoreError::Corrupt(format!("{}: {}", path.display(), e)))
    }
}

fn io_error(path: &Path, e: std::io::Error) -> SessionStoreError {
    SessionStoreError::Io(format!("{}: {}", path.display(), e))
}

impl SessionStore for JsonFileSessionStore {
    fn save_session(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError> {
        self.write_json(&self.session_path(), snapshot)
    }

    fn load_session(&self) -> Result<Option<SessionSnapshot>, SessionStoreError> {
        self.read_json(&self.session_path())
    }

    fn clear_session(&self) -> Result<(), SessionStoreError> {
        let path = self.session_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    fn load_best_score(&self) -> Result<u64, SessionStoreError> {
        Ok(self
            .read_json::<BestScoreRecord>(&self.best_score_path())?
            .unwrap_or_default()
            .best_score)
    }

    fn save_best_score(&self, score: u64) -> Result<(), SessionStoreError> {
        self.write_json(
            &self.best_score_path(),
            &BestScoreRecord { best_score: score },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use millionaire_domain::{Lifeline, Question};

    fn snapshot() -> SessionSnapshot {
        let questions = (0..15)
            .map(|i| {
                Question::new(
                    format!("Question {}?", i),
                    format!("right-{}", i),
                    [
                        format!("wrong-{}-a", i),
                        format!("wrong-{}-b", i),
                        format!("wrong-{}-c", i),
                    ],
                )
                .unwrap()
            })
            .collect();
        SessionSnapshot::fresh(questions)
    }

    #[test]
    fn test_missing_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSessionStore::new(dir.path().join("nested"));
        assert!(store.load_session().unwrap().is_none());
        assert_eq!(store.load_best_score().unwrap(), 0);
        // Clearing a missing save is fine
        store.clear_session().unwrap();
    }

    #[test]
    fn test_session_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSessionStore::new(dir.path());

        let mut saved = snapshot();
        saved.current_index = 3;
        saved.score = 300;
        saved.unused_lifelines.remove(&Lifeline::Audience);
        store.save_session(&saved).unwrap();

        assert!(store.session_path().exists());
        assert!(!store.session_path().with_extension("json.tmp").exists());
        assert_eq!(store.load_session().unwrap(), Some(saved));

        store.clear_session().unwrap();
        assert!(store.load_session().unwrap().is_none());
    }

    #[test]
    fn test_best_score_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        JsonFileSessionStore::new(dir.path())
            .save_best_score(125_000)
            .unwrap();
        let reopened = JsonFileSessionStore::new(dir.path());
        assert_eq!(reopened.load_best_score().unwrap(), 125_000);
    }

    #[test]
    fn test_corrupt_session_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSessionStore::new(dir.path());
        fs::write(store.session_path(), "{ not json").unwrap();
        assert!(matches!(
            store.load_session(),
            Err(SessionStoreError::Corrupt(_))
        ));
    }
}
