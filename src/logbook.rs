use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::{fs, sync::Mutex};
use tracing::{info, warn};

/// One persisted interaction. Append-only; entries are never rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub question: String,
    pub response: String,
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to write log store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize log store: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable record of every question/response pair, kept as a single
/// pretty-printed JSON array on disk.
///
/// Each `record` call re-reads the whole file, appends, and rewrites it.
/// The mutex is held across that entire cycle, so concurrent requests
/// cannot drop each other's entries.
pub struct InteractionLog {
    path: PathBuf,
    guard: Mutex<()>,
}

impl InteractionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// Append one entry stamped with the current local time and rewrite the
    /// store. Also mirrors both texts to the application log.
    pub async fn record(&self, question: &str, response: &str) -> Result<(), LogError> {
        let _guard = self.guard.lock().await;

        let mut entries = self.load_or_reset().await;
        entries.push(LogEntry {
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            question: question.to_string(),
            response: response.to_string(),
        });

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json).await?;

        info!("Question: {question}");
        info!("Response: {response}");
        Ok(())
    }

    /// Current store contents. Missing or unreadable stores read as empty.
    pub async fn entries(&self) -> Vec<LogEntry> {
        let _guard = self.guard.lock().await;
        self.load_or_reset().await
    }

    // Missing file means a fresh store. A file that no longer parses as a
    // JSON array is abandoned and the store restarts empty; the next write
    // overwrites the corrupt content.
    async fn load_or_reset(&self) -> Vec<LogEntry> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    "log store at {} is not valid JSON, starting over: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_in(dir: &tempfile::TempDir) -> InteractionLog {
        InteractionLog::new(dir.path().join("islamic_qa_log.json"))
    }

    #[tokio::test]
    async fn sequential_records_append_in_call_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);

        log.record("first", "answer one").await.unwrap();
        log.record("second", "answer two").await.unwrap();
        log.record("third", "answer three").await.unwrap();

        let entries = log.entries().await;
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].question, "first");
        assert_eq!(entries[1].question, "second");
        assert_eq!(entries[2].question, "third");
        assert!(entries.iter().all(|e| !e.timestamp.is_empty()));
    }

    #[tokio::test]
    async fn store_file_is_a_pretty_printed_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("islamic_qa_log.json");
        let log = InteractionLog::new(&path);

        log.record("q", "a").await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains('\n'), "store should be pretty-printed");
        let parsed: Vec<LogEntry> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].question, "q");
        assert_eq!(parsed[0].response, "a");
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);

        assert!(log.entries().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_store_is_reset_not_merged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("islamic_qa_log.json");
        std::fs::write(&path, "{ this is not a json array").unwrap();
        let log = InteractionLog::new(&path);

        log.record("q", "a").await.unwrap();

        let entries = log.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].question, "q");
    }

    #[tokio::test]
    async fn concurrent_records_both_survive() {
        let dir = tempfile::tempdir().unwrap();
        let log = std::sync::Arc::new(log_in(&dir));

        let a = {
            let log = log.clone();
            tokio::spawn(async move { log.record("left", "a").await })
        };
        let b = {
            let log = log.clone();
            tokio::spawn(async move { log.record("right", "b").await })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        assert_eq!(log.entries().await.len(), 2);
    }
}
