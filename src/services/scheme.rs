//! Scheme service
//!
//! CRUD for column templates. Deleting a scheme cascades to its entries
//! and purges settings references, so `entry.scheme_id` always resolves to
//! a live scheme.

use crate::error::{KeywardError, KeywardResult};
use crate::models::{Column, Scheme, SchemeId, Vault};

/// Service for scheme management
pub struct SchemeService<'a> {
    vault: &'a mut Vault,
}

impl<'a> SchemeService<'a> {
    /// Create a new scheme service
    pub fn new(vault: &'a mut Vault) -> Self {
        Self { vault }
    }

    /// Add a scheme from its visible columns
    ///
    /// The two hidden stat columns are appended automatically.
    pub fn add(&mut self, columns: Vec<Column>) -> KeywardResult<SchemeId> {
        validate_columns(&columns)?;

        let id = SchemeId::generate();
        self.vault
            .schemes
            .insert(id.clone(), Scheme::from_visible(columns));
        Ok(id)
    }

    /// Replace a scheme's visible columns wholesale
    ///
    /// Existing entries keep their old value count and order; they are not
    /// remapped to the new columns. Returns `Ok(false)` when the scheme
    /// does not exist.
    pub fn update(&mut self, id: &SchemeId, columns: Vec<Column>) -> KeywardResult<bool> {
        validate_columns(&columns)?;

        match self.vault.schemes.get_mut(id) {
            Some(scheme) => {
                scheme.replace_visible(columns);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete a scheme and cascade to every entry referencing it
    ///
    /// Also drops the scheme's hidden flag and order rule from settings.
    /// Returns `false` when the scheme does not exist.
    pub fn delete(&mut self, id: &SchemeId) -> bool {
        if self.vault.schemes.remove(id).is_none() {
            return false;
        }

        self.vault.entries.retain(|_, entry| &entry.scheme_id != id);
        self.vault.settings.forget_scheme(id);
        true
    }
}

fn validate_columns(columns: &[Column]) -> KeywardResult<()> {
    if columns.is_empty() {
        return Err(KeywardError::Validation(
            "A scheme needs at least one column".into(),
        ));
    }
    for column in columns {
        if column.name.trim().is_empty() {
            return Err(KeywardError::Validation(
                "Column names cannot be empty".into(),
            ));
        }
    }
    Ok(())
}
