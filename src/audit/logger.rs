//! Session logger
//!
//! Writes log entries to the session log file. Each entry is a single JSON
//! line, flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{KeywardError, KeywardResult};

use super::entry::LogEntry;

/// Handles writing session log entries to a JSONL file
pub struct SessionLogger {
    /// Path to the log file
    log_path: PathBuf,
}

impl SessionLogger {
    /// Create a new SessionLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one log entry
    ///
    /// The write is flushed immediately so the line survives an abrupt
    /// session end.
    pub fn log(&self, entry: &LogEntry) -> KeywardResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| KeywardError::Io(format!("Failed to open session log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| KeywardError::Json(format!("Failed to serialize log entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| KeywardError::Io(format!("Failed to write log entry: {}", e)))?;

        file.flush()
            .map_err(|e| KeywardError::Io(format!("Failed to flush session log: {}", e)))?;

        Ok(())
    }

    /// Read all log entries, oldest first
    ///
    /// Unparseable lines are skipped rather than failing the whole read.
    pub fn read_all(&self) -> KeywardResult<Vec<LogEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| KeywardError::Io(format!("Failed to open session log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                KeywardError::Io(format!(
                    "Failed to read session log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            if let Ok(entry) = serde_json::from_str::<LogEntry>(&line) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }
}
