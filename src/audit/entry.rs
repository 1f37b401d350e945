//! Session log entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that are logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was updated
    Update,
    /// Entity was deleted
    Delete,
    /// Vault state was written to disk
    Persist,
    /// Backup snapshot was written
    Backup,
    /// Main store was overwritten from the backup
    Restore,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Persist => write!(f, "PERSIST"),
            Operation::Backup => write!(f, "BACKUP"),
            Operation::Restore => write!(f, "RESTORE"),
        }
    }
}

/// Types of entities that appear in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Scheme,
    Entry,
    Settings,
    Vault,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Scheme => write!(f, "Scheme"),
            EntityKind::Entry => write!(f, "Entry"),
            EntityKind::Settings => write!(f, "Settings"),
            EntityKind::Vault => write!(f, "Vault"),
        }
    }
}

/// A single session log line
///
/// Deliberately value-free: the log lives next to the vault in plaintext,
/// so it must never contain decoded entry data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity: EntityKind,

    /// ID of the affected entity, if it has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

impl LogEntry {
    /// Create an entry stamped with the current time
    pub fn now(operation: Operation, entity: EntityKind, entity_id: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity,
            entity_id,
        }
    }
}
