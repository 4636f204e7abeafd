//! JSONL file writer for coordination events.
//!
//! Each [`CoordinationEvent`] becomes a single JSON line with a `type` field
//! and a `timestamp`, appended through a buffered writer. Existing files are
//! appended to, so one log can span many requests.

use council_application::ports::coordination_logger::{CoordinationEvent, CoordinationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL coordination logger, one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event and on `Drop`.
pub struct JsonlCoordinationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlCoordinationLogger {
    /// Open (or create) the log file at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened; the caller falls back
    /// to no event logging.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create event log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open event log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: CoordinationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::String(event.event_type.to_string()));
        map.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(map)
    }
}

impl CoordinationLogger for JsonlCoordinationLogger {
    fn log(&self, event: CoordinationEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlCoordinationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_events_written_as_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let logger = JsonlCoordinationLogger::new(&path).unwrap();

        logger.log(CoordinationEvent::new(
            "query_scored",
            json!({ "complexity": 0.4, "requires_modeling": true }),
        ));
        logger.log(CoordinationEvent::new(
            "specialists_selected",
            json!({ "specialists": ["analyst", "data_scientist"] }),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "query_scored");
        assert_eq!(records[0]["complexity"], 0.4);
        assert_eq!(records[0]["requires_modeling"], true);
        assert_eq!(records[1]["type"], "specialists_selected");
        assert_eq!(records[1]["specialists"][1], "data_scientist");

        let timestamp = records[0]["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(timestamp.ends_with('Z'));
    }

    #[test]
    fn test_non_object_payload_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let logger = JsonlCoordinationLogger::new(&path).unwrap();

        logger.log(CoordinationEvent::new("note", json!(["a", "b"])));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "note");
        assert_eq!(records[0]["data"], json!(["a", "b"]));
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.jsonl");

        for i in 0..2 {
            let logger = JsonlCoordinationLogger::new(&path).unwrap();
            logger.log(CoordinationEvent::new("answer_synthesized", json!({ "run": i })));
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["run"], 1);
    }

    #[test]
    fn test_directory_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlCoordinationLogger::new(dir.path()).is_none());
    }
}
