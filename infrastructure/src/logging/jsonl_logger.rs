//! JSONL file writer for game events.
//!
//! Each [`GameEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use millionaire_application::ports::game_event_logger::{GameEvent, GameEventLogger};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

struct Transcript {
    writer: BufWriter<File>,
    next_seq: u64,
}

/// JSONL game transcript that writes one JSON object per line.
///
/// Every record carries `type`, `timestamp` and a 0-based `seq`.
/// Thread-safe via a mutex around the writer. Flushes on `Drop`.
pub struct JsonlGameEventLogger {
    transcript: Mutex<Transcript>,
    path: PathBuf,
}

impl JsonlGameEventLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create game log directory {}: {}", parent.display(), e);
            return None;
        }

        let file = File::create(path)
            .inspect_err(|e| warn!("Could not create game log {}: {}", path.display(), e))
            .ok()?;

        Some(Self {
            transcript: Mutex::new(Transcript {
                writer: BufWriter::new(file),
                next_seq: 0,
            }),
            path: path.to_path_buf(),
        })
    }

    /// Create a transcript for a new game under `<data_dir>/games/`,
    /// named after the current UTC time.
    pub fn for_new_game(data_dir: impl AsRef<Path>) -> Option<Self> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        Self::new(
            data_dir
                .as_ref()
                .join("games")
                .join(format!("{}.game.jsonl", stamp)),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Object payloads are flattened into the record; anything else goes under `data`
fn record(event: GameEvent, seq: u64) -> Value {
    let mut map = match event.payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    map.insert("type".to_string(), Value::from(event.event_type));
    map.insert("seq".to_string(), Value::from(seq));
    map.insert(
        "timestamp".to_string(),
        Value::from(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
    );
    Value::Object(map)
}

impl GameEventLogger for JsonlGameEventLogger {
    fn log(&self, event: GameEvent) {
        let Ok(mut transcript) = self.transcript.lock() else {
            return;
        };
        let seq = transcript.next_seq;
        let Ok(line) = serde_json::to_string(&record(event, seq)) else {
            return;
        };

        transcript.next_seq += 1;
        // Flushed per line so a killed game still leaves a readable transcript
        let _ = writeln!(transcript.writer, "{}", line);
        let _ = transcript.writer.flush();
    }
}

impl Drop for JsonlGameEventLogger {
    fn drop(&mut self) {
        if let Ok(mut transcript) = self.transcript.lock() {
            let _ = transcript.writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
            .trim()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.game.jsonl");
        let logger = JsonlGameEventLogger::new(&path).unwrap();

        logger.log(GameEvent::new(
            "answer_resolved",
            serde_json::json!({
                "ordinal": 3,
                "outcome": "correct",
                "score": 300
            }),
        ));

        logger.log(GameEvent::new(
            "lifeline_used",
            serde_json::json!({
                "ordinal": 4,
                "outcome": {"lifeline": "call_friend", "forgiveness_active": true}
            }),
        ));

        // Flush
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);

        // Each line should carry type + timestamp
        for value in &lines {
            assert!(value.get("type").is_some());
            assert!(value.get("timestamp").is_some());
        }

        assert_eq!(lines[0]["type"], "answer_resolved");
        assert_eq!(lines[0]["ordinal"], 3);
        assert_eq!(lines[0]["score"], 300);

        assert_eq!(lines[0]["seq"], 0);
        assert_eq!(lines[1]["seq"], 1);
        assert_eq!(lines[1]["type"], "lifeline_used");
        assert_eq!(lines[1]["outcome"]["lifeline"], "call_friend");
    }

    #[test]
    fn test_jsonl_logger_handles_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test2.game.jsonl");
        let logger = JsonlGameEventLogger::new(&path).unwrap();

        logger.log(GameEvent::new("note", serde_json::json!("just a string")));

        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_for_new_game_creates_games_dir() {
        let dir = tempfile::tempdir().unwrap();
        let logger = JsonlGameEventLogger::for_new_game(dir.path()).unwrap();
        assert!(logger.path().starts_with(dir.path().join("games")));
        assert!(logger.path().to_string_lossy().ends_with(".game.jsonl"));
        assert!(logger.path().exists());
    }
}
