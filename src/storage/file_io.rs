//! File I/O for the envelope and salt files
//!
//! The vault and backup files hold exactly one serialized envelope line.
//! Writes go through a temp file and an atomic rename so a crash mid-write
//! cannot leave a half-written vault behind.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::crypto::Envelope;
use crate::error::{KeywardError, KeywardResult};

/// Read the envelope line from a vault or backup file
pub fn read_envelope<P: AsRef<Path>>(path: P) -> KeywardResult<Envelope> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(KeywardError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| KeywardError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| KeywardError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(line.trim_end()).map_err(|e| {
        KeywardError::CorruptData(format!("Invalid envelope in {}: {}", path.display(), e))
    })
}

/// Write an envelope as a single line, atomically (write to temp, then rename)
pub fn write_envelope<P: AsRef<Path>>(path: P, envelope: &Envelope) -> KeywardResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            KeywardError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory, required for an atomic rename
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)
        .map_err(|e| KeywardError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let line = serde_json::to_string(envelope)
        .map_err(|e| KeywardError::Json(format!("Failed to serialize envelope: {}", e)))?;

    writeln!(writer, "{}", line)
        .map_err(|e| KeywardError::Io(format!("Failed to write envelope: {}", e)))?;

    writer
        .flush()
        .map_err(|e| KeywardError::Io(format!("Failed to flush envelope: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| KeywardError::Io(format!("Failed to sync envelope: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        KeywardError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Read the raw key-derivation salt
pub fn read_salt<P: AsRef<Path>>(path: P) -> KeywardResult<Vec<u8>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(KeywardError::Storage(format!(
            "Salt file not found: {}",
            path.display()
        )));
    }

    fs::read(path)
        .map_err(|e| KeywardError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write the raw key-derivation salt, once per vault
pub fn write_salt<P: AsRef<Path>>(path: P, salt: &[u8]) -> KeywardResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            KeywardError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::write(path, salt)
        .map_err(|e| KeywardError::Io(format!("Failed to write {}: {}", path.display(), e)))
}
