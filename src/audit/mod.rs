//! Session logging for Keyward
//!
//! An append-only, line-delimited JSON log of vault operations. Log entries
//! carry timestamps, operations and entity ids, never values, so the
//! plaintext log cannot leak secrets.

pub mod entry;
pub mod logger;

pub use entry::{EntityKind, LogEntry, Operation};
pub use logger::SessionLogger;
