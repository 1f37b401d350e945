//! Entry service
//!
//! CRUD for credential records. Value counts are validated against the
//! owning scheme before any state changes, so a rejected operation leaves
//! the vault untouched.

use chrono::Utc;

use crate::error::{KeywardError, KeywardResult};
use crate::models::{Entry, EntryId, SchemeId, Vault};

/// Service for entry management
pub struct EntryService<'a> {
    vault: &'a mut Vault,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(vault: &'a mut Vault) -> Self {
        Self { vault }
    }

    /// Add an entry with plaintext visible values
    ///
    /// The scheme must exist and `values` must hold exactly one value per
    /// visible column. Timestamps are appended and everything is stored
    /// encoded.
    pub fn add(&mut self, scheme_id: &SchemeId, values: Vec<String>) -> KeywardResult<EntryId> {
        let scheme = self
            .vault
            .scheme(scheme_id)
            .ok_or_else(|| KeywardError::scheme_not_found(scheme_id.as_str()))?;

        let expected = scheme.visible_count();
        if values.len() != expected {
            return Err(KeywardError::Validation(format!(
                "Expected {} values for this scheme, got {}",
                expected,
                values.len()
            )));
        }

        let id = EntryId::generate();
        self.vault
            .entries
            .insert(id.clone(), Entry::new(scheme_id.clone(), values, Utc::now()));
        Ok(id)
    }

    /// Replace an entry's visible values wholesale
    ///
    /// Keeps the original creation date and stamps a fresh change date.
    /// Returns `Ok(false)` when the entry does not exist.
    pub fn update(&mut self, id: &EntryId, values: Vec<String>) -> KeywardResult<bool> {
        let scheme_id = match self.vault.scheme_of_entry(id) {
            Some(scheme_id) => scheme_id.clone(),
            None => return Ok(false),
        };

        // The scheme is live by the cascade invariant; validate the count
        // against it before touching the entry.
        if let Some(scheme) = self.vault.scheme(&scheme_id) {
            let expected = scheme.visible_count();
            if values.len() != expected {
                return Err(KeywardError::Validation(format!(
                    "Expected {} values for this scheme, got {}",
                    expected,
                    values.len()
                )));
            }
        }

        if let Some(entry) = self.vault.entries.get_mut(id) {
            entry.replace_values(values, Utc::now());
        }
        Ok(true)
    }

    /// Delete an entry; no-op when absent
    pub fn delete(&mut self, id: &EntryId) -> bool {
        self.vault.entries.remove(id).is_some()
    }
}

/// Decoded plaintext values of an entry, timestamps included
///
/// `None` when the entry does not exist; callers must check before acting.
pub fn entry_values(vault: &Vault, id: &EntryId) -> KeywardResult<Option<Vec<String>>> {
    match vault.entry(id) {
        Some(entry) => entry.decoded_values().map(Some),
        None => Ok(None),
    }
}
