//! Vault aggregate
//!
//! Settings + schemes + entries: the sole unit of encryption and
//! persistence. The vault is mutated only by the service layer; the view
//! layer reads it through the lookup methods here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entry::Entry;
use super::ids::{EntryId, SchemeId};
use super::scheme::{Column, Constraint, Scheme};
use super::settings::VaultSettings;

/// The full persisted state of one user's secret store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    pub settings: VaultSettings,
    pub schemes: BTreeMap<SchemeId, Scheme>,
    pub entries: BTreeMap<EntryId, Entry>,
}

impl Default for Vault {
    /// A fresh vault: default settings, the two seed schemes, no entries
    fn default() -> Self {
        let mut schemes = BTreeMap::new();
        schemes.insert(
            SchemeId::generate(),
            Scheme::from_visible(vec![
                Column::new("Application", Constraint::None),
                Column::new("Password", Constraint::Password),
            ]),
        );
        schemes.insert(
            SchemeId::generate(),
            Scheme::from_visible(vec![
                Column::new("Application", Constraint::None),
                Column::new("Verification through", Constraint::None),
                Column::new("Email used", Constraint::Truncate),
            ]),
        );

        Self {
            settings: VaultSettings::default(),
            schemes,
            entries: BTreeMap::new(),
        }
    }
}

impl Vault {
    /// A vault with no schemes at all (mostly useful in tests)
    pub fn empty() -> Self {
        Self {
            settings: VaultSettings::default(),
            schemes: BTreeMap::new(),
            entries: BTreeMap::new(),
        }
    }

    /// Look up a scheme by id
    pub fn scheme(&self, id: &SchemeId) -> Option<&Scheme> {
        self.schemes.get(id)
    }

    /// Look up an entry by id
    pub fn entry(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// The scheme id an entry belongs to
    pub fn scheme_of_entry(&self, id: &EntryId) -> Option<&SchemeId> {
        self.entries.get(id).map(|e| &e.scheme_id)
    }

    /// Every entry belonging to a scheme, in canonical order
    pub fn entries_of_scheme(&self, scheme_id: &SchemeId) -> Vec<(&EntryId, &Entry)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, e)| &e.scheme_id == scheme_id)
            .collect();
        sort_canonical(&mut entries);
        entries
    }

    /// Every entry in canonical (creation-date, id) order
    ///
    /// This realizes "insertion order": the creation timestamp is stored in
    /// the entry itself, so the order survives save/load cycles.
    pub fn entries_in_order(&self) -> Vec<(&EntryId, &Entry)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        sort_canonical(&mut entries);
        entries
    }

    /// Resolve a scheme from its visible column list
    ///
    /// Matches visible columns only, ignoring the trailing stat columns.
    pub fn scheme_id_by_signature(&self, visible: &[Column]) -> Option<&SchemeId> {
        self.schemes
            .iter()
            .find(|(_, scheme)| scheme.matches_signature(visible))
            .map(|(id, _)| id)
    }
}

fn sort_canonical(entries: &mut [(&EntryId, &Entry)]) {
    entries.sort_by(|(a_id, a), (b_id, b)| {
        a.creation_sort_key()
            .cmp(&b.creation_sort_key())
            .then_with(|| a_id.cmp(b_id))
    });
}
