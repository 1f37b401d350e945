//! Storage layer for Keyward
//!
//! Owns the on-disk envelope: key derivation at open, authenticated
//! encryption/decryption, full-state persistence, backup/restore, and
//! password verification.

pub mod file_io;

pub use file_io::{read_envelope, read_salt, write_envelope, write_salt};

use crate::config::KeywardPaths;
use crate::crypto::{
    decrypt_string, derive_key, encrypt_string, generate_salt, DerivedKey, KdfParams,
};
use crate::error::{KeywardError, KeywardResult};
use crate::models::Vault;

/// Handle to one opened (or freshly created) vault file
///
/// Holds the derived key for the session. All persistence is a full-state
/// rewrite; there are no incremental writes.
pub struct VaultStore {
    paths: KeywardPaths,
    kdf_params: KdfParams,
    key: DerivedKey,
}

impl VaultStore {
    /// Create a new vault with default KDF parameters
    ///
    /// Generates and writes the salt, derives the key, and persists an
    /// encrypted default vault. Refuses to overwrite an existing vault.
    pub fn create(paths: KeywardPaths, password: &str) -> KeywardResult<(Self, Vault)> {
        Self::create_with_params(paths, password, KdfParams::default())
    }

    /// Create a new vault with explicit KDF parameters
    pub fn create_with_params(
        paths: KeywardPaths,
        password: &str,
        kdf_params: KdfParams,
    ) -> KeywardResult<(Self, Vault)> {
        if paths.vault_exists() {
            return Err(KeywardError::Storage(format!(
                "Vault already exists at {}",
                paths.vault_file().display()
            )));
        }

        paths.ensure_directories()?;

        let salt = generate_salt();
        write_salt(paths.salt_file(), &salt)?;

        let key = derive_key(password, &salt, &kdf_params)?;
        let store = Self {
            paths,
            kdf_params,
            key,
        };

        let vault = Vault::default();
        store.persist(&vault)?;

        Ok((store, vault))
    }

    /// Open an existing vault with default KDF parameters
    ///
    /// A failed authentication tag check surfaces as `WrongPassword`;
    /// decrypted bytes that do not parse as a vault surface as
    /// `CorruptData`. Both are fatal for the session at startup.
    pub fn open(paths: KeywardPaths, password: &str) -> KeywardResult<(Self, Vault)> {
        Self::open_with_params(paths, password, KdfParams::default())
    }

    /// Open an existing vault with explicit KDF parameters
    pub fn open_with_params(
        paths: KeywardPaths,
        password: &str,
        kdf_params: KdfParams,
    ) -> KeywardResult<(Self, Vault)> {
        let salt = read_salt(paths.salt_file())?;
        let key = derive_key(password, &salt, &kdf_params)?;

        let store = Self {
            paths,
            kdf_params,
            key,
        };
        let vault = store.decrypt_vault_file(&store.paths.vault_file())?;

        Ok((store, vault))
    }

    /// Paths this store reads and writes
    pub fn paths(&self) -> &KeywardPaths {
        &self.paths
    }

    /// Serialize, encrypt, and rewrite the main vault file
    pub fn persist(&self, vault: &Vault) -> KeywardResult<()> {
        let envelope = self.encrypt_vault(vault)?;
        write_envelope(self.paths.vault_file(), &envelope)
    }

    /// Write an independent snapshot to the backup path
    pub fn backup(&self, vault: &Vault) -> KeywardResult<()> {
        let envelope = self.encrypt_vault(vault)?;
        write_envelope(self.paths.backup_file(), &envelope)
    }

    /// Destructively overwrite the main store from the backup snapshot
    ///
    /// User-initiated only; never automatic. Returns the restored vault.
    pub fn restore(&self) -> KeywardResult<Vault> {
        let vault = self.decrypt_vault_file(&self.paths.backup_file())?;
        self.persist(&vault)?;
        Ok(vault)
    }

    /// Check a candidate password against the existing vault file
    ///
    /// Performs a complete open (salt read, key derivation, decryption,
    /// parse) without mutating anything. The KDF cost is deliberate: this
    /// gates destructive and secret-revealing actions, so it should be as
    /// slow as a login attempt.
    pub fn verify_password(&self, candidate: &str) -> bool {
        let salt = match read_salt(self.paths.salt_file()) {
            Ok(salt) => salt,
            Err(_) => return false,
        };
        let key = match derive_key(candidate, &salt, &self.kdf_params) {
            Ok(key) => key,
            Err(_) => return false,
        };
        match read_envelope(self.paths.vault_file()) {
            Ok(envelope) => decrypt_string(&envelope, &key)
                .ok()
                .and_then(|json| serde_json::from_str::<Vault>(&json).ok())
                .is_some(),
            Err(_) => false,
        }
    }

    fn encrypt_vault(&self, vault: &Vault) -> KeywardResult<crate::crypto::Envelope> {
        let json = serde_json::to_string(vault)
            .map_err(|e| KeywardError::Json(format!("Failed to serialize vault: {}", e)))?;
        encrypt_string(&json, &self.key)
    }

    fn decrypt_vault_file(&self, path: &std::path::Path) -> KeywardResult<Vault> {
        let envelope = read_envelope(path)?;
        let json = decrypt_string(&envelope, &self.key)?;
        serde_json::from_str(&json)
            .map_err(|e| KeywardError::CorruptData(format!("Vault does not parse: {}", e)))
    }
}
