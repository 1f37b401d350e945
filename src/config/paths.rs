//! Path management for Keyward
//!
//! Provides XDG-compliant path resolution for the vault and its sibling files.
//!
//! ## Path Resolution Order
//!
//! 1. `KEYWARD_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/keyward` or `~/.config/keyward`
//! 3. Windows: `%APPDATA%\keyward`

use std::path::PathBuf;

use crate::error::KeywardError;

/// Manages all paths used by Keyward
#[derive(Debug, Clone)]
pub struct KeywardPaths {
    /// Base directory for all Keyward data
    base_dir: PathBuf,
}

impl KeywardPaths {
    /// Create a new KeywardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, KeywardError> {
        let base_dir = if let Ok(custom) = std::env::var("KEYWARD_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create KeywardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path of the encrypted vault file (one envelope line)
    pub fn vault_file(&self) -> PathBuf {
        self.base_dir.join("vault.kwd")
    }

    /// Path of the raw key-derivation salt, written once at vault creation
    pub fn salt_file(&self) -> PathBuf {
        self.base_dir.join(".salt")
    }

    /// Path of the backup envelope, written/read only on explicit request
    pub fn backup_file(&self) -> PathBuf {
        self.base_dir.join("vault.backup")
    }

    /// Path of the append-only session log
    pub fn session_log(&self) -> PathBuf {
        self.base_dir.join("session.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), KeywardError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            KeywardError::Storage(format!(
                "Failed to create directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }

    /// Check whether a vault has been created under this base directory
    pub fn vault_exists(&self) -> bool {
        self.vault_file().exists()
    }
}

/// Resolve the default base directory for the current platform
fn resolve_default_path() -> Result<PathBuf, KeywardError> {
    use directories::BaseDirs;

    let base_dirs = BaseDirs::new()
        .ok_or_else(|| KeywardError::Config("Could not determine home directory".to_string()))?;

    Ok(base_dirs.config_dir().join("keyward"))
}
