//! Session facade
//!
//! The object handed to the interactive surface: it owns the opened vault,
//! the store handle holding the derived key, and the session logger. All
//! mutations go through here; the presentation layer never reaches into
//! vault internals directly.
//!
//! Mutations do not auto-persist. Durability requires an explicit
//! [`Session::persist`] call whose failure is reported to the caller.

use std::collections::BTreeSet;

use crate::audit::{EntityKind, LogEntry, Operation, SessionLogger};
use crate::config::KeywardPaths;
use crate::crypto::KdfParams;
use crate::display::{render_snapshot, ViewSnapshot};
use crate::error::{KeywardError, KeywardResult};
use crate::models::{Column, EntryId, OrderRule, SchemeId, Vault};
use crate::services::{entry::entry_values, EntryService, SchemeService, SearchMatch};
use crate::storage::VaultStore;

/// One exclusive session over a vault file
pub struct Session {
    store: VaultStore,
    vault: Vault,
    logger: SessionLogger,
}

impl Session {
    /// Create a fresh vault and start a session over it
    pub fn create(paths: KeywardPaths, password: &str) -> KeywardResult<Self> {
        Self::create_with_params(paths, password, KdfParams::default())
    }

    /// Create with explicit KDF parameters
    pub fn create_with_params(
        paths: KeywardPaths,
        password: &str,
        kdf_params: KdfParams,
    ) -> KeywardResult<Self> {
        let logger = SessionLogger::new(paths.session_log());
        let (store, vault) = VaultStore::create_with_params(paths, password, kdf_params)?;
        Ok(Self {
            store,
            vault,
            logger,
        })
    }

    /// Open an existing vault
    ///
    /// A failed open is fatal for the session; there is no retry here.
    pub fn open(paths: KeywardPaths, password: &str) -> KeywardResult<Self> {
        Self::open_with_params(paths, password, KdfParams::default())
    }

    /// Open with explicit KDF parameters
    pub fn open_with_params(
        paths: KeywardPaths,
        password: &str,
        kdf_params: KdfParams,
    ) -> KeywardResult<Self> {
        let logger = SessionLogger::new(paths.session_log());
        let (store, vault) = VaultStore::open_with_params(paths, password, kdf_params)?;
        Ok(Self {
            store,
            vault,
            logger,
        })
    }

    /// Read-only access to the vault state
    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// The session log, oldest first
    pub fn history(&self) -> KeywardResult<Vec<LogEntry>> {
        self.logger.read_all()
    }

    // View

    /// Render a fresh view snapshot of the current vault state
    pub fn render_snapshot(&self) -> ViewSnapshot {
        render_snapshot(&self.vault)
    }

    /// Fuzzy-search entry values
    pub fn search(&self, query: &str, top_n: usize) -> Vec<SearchMatch> {
        crate::services::search(&self.vault, query, top_n)
    }

    /// Decoded plaintext values of an entry
    pub fn entry_values(&self, id: &EntryId) -> KeywardResult<Option<Vec<String>>> {
        entry_values(&self.vault, id)
    }

    // Scheme mutations

    /// Add a scheme from its visible columns
    pub fn add_scheme(&mut self, columns: Vec<Column>) -> KeywardResult<SchemeId> {
        let id = SchemeService::new(&mut self.vault).add(columns)?;
        self.log(Operation::Create, EntityKind::Scheme, Some(id.to_string()));
        Ok(id)
    }

    /// Replace a scheme's visible columns
    pub fn update_scheme(&mut self, id: &SchemeId, columns: Vec<Column>) -> KeywardResult<bool> {
        let updated = SchemeService::new(&mut self.vault).update(id, columns)?;
        if updated {
            self.log(Operation::Update, EntityKind::Scheme, Some(id.to_string()));
        }
        Ok(updated)
    }

    /// Delete a scheme and every entry referencing it
    pub fn delete_scheme(&mut self, id: &SchemeId) -> bool {
        let deleted = SchemeService::new(&mut self.vault).delete(id);
        if deleted {
            self.log(Operation::Delete, EntityKind::Scheme, Some(id.to_string()));
        }
        deleted
    }

    // Entry mutations

    /// Add an entry with plaintext visible values
    pub fn add_entry(&mut self, scheme_id: &SchemeId, values: Vec<String>) -> KeywardResult<EntryId> {
        let id = EntryService::new(&mut self.vault).add(scheme_id, values)?;
        self.log(Operation::Create, EntityKind::Entry, Some(id.to_string()));
        Ok(id)
    }

    /// Replace an entry's visible values
    pub fn update_entry(&mut self, id: &EntryId, values: Vec<String>) -> KeywardResult<bool> {
        let updated = EntryService::new(&mut self.vault).update(id, values)?;
        if updated {
            self.log(Operation::Update, EntityKind::Entry, Some(id.to_string()));
        }
        Ok(updated)
    }

    /// Delete an entry
    pub fn delete_entry(&mut self, id: &EntryId) -> bool {
        let deleted = EntryService::new(&mut self.vault).delete(id);
        if deleted {
            self.log(Operation::Delete, EntityKind::Entry, Some(id.to_string()));
        }
        deleted
    }

    // Settings mutations

    /// Set visibility of the (change date, creation date) columns
    pub fn set_hidden_dates(&mut self, dates_hidden: (bool, bool)) {
        self.vault.settings.dates_hidden = dates_hidden;
        self.log(Operation::Update, EntityKind::Settings, None);
    }

    /// Replace the set of hidden schemes
    pub fn set_hidden_schemes(&mut self, hidden: BTreeSet<SchemeId>) {
        self.vault.settings.hidden_schemes = hidden;
        self.log(Operation::Update, EntityKind::Settings, None);
    }

    /// Install an order rule, replacing any previous rule for the scheme
    pub fn set_order_rule(&mut self, rule: OrderRule) -> KeywardResult<()> {
        let scheme = self
            .vault
            .scheme(&rule.scheme_id)
            .ok_or_else(|| KeywardError::scheme_not_found(rule.scheme_id.as_str()))?;

        if rule.column >= scheme.column_count() {
            return Err(KeywardError::Validation(format!(
                "Column index {} out of range for a scheme with {} columns",
                rule.column,
                scheme.column_count()
            )));
        }

        self.vault.settings.set_order_rule(rule);
        self.log(Operation::Update, EntityKind::Settings, None);
        Ok(())
    }

    /// Remove the order rule for a scheme, if any
    pub fn clear_order_rule(&mut self, scheme_id: &SchemeId) {
        self.vault.settings.clear_order_rule(scheme_id);
        self.log(Operation::Update, EntityKind::Settings, None);
    }

    // Persistence

    /// Serialize, encrypt and rewrite the main vault file
    pub fn persist(&self) -> KeywardResult<()> {
        self.store.persist(&self.vault)?;
        self.log(Operation::Persist, EntityKind::Vault, None);
        Ok(())
    }

    /// Write an independent backup snapshot
    pub fn backup(&self) -> KeywardResult<()> {
        self.store.backup(&self.vault)?;
        self.log(Operation::Backup, EntityKind::Vault, None);
        Ok(())
    }

    /// Destructively overwrite the main store from the backup
    pub fn restore(&mut self) -> KeywardResult<()> {
        self.vault = self.store.restore()?;
        self.log(Operation::Restore, EntityKind::Vault, None);
        Ok(())
    }

    /// Check a candidate against the master password
    ///
    /// Full-cost KDF check; used to gate destructive or secret-revealing
    /// actions.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.store.verify_password(candidate)
    }

    // Best-effort: a session-log failure must never undo or block a vault
    // mutation that already happened.
    fn log(&self, operation: Operation, entity: EntityKind, entity_id: Option<String>) {
        let _ = self.logger.log(&LogEntry::now(operation, entity, entity_id));
    }
}
