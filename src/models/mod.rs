//! Core data models for Keyward
//!
//! This module contains the data structures of the secret-store domain:
//! schemes (column templates), entries (credential records), settings,
//! and the vault aggregate that is encrypted and persisted as one unit.

pub mod encoding;
pub mod entry;
pub mod ids;
pub mod scheme;
pub mod settings;
pub mod vault;

pub use entry::Entry;
pub use ids::{EntryId, SchemeId};
pub use scheme::{Column, Constraint, Scheme};
pub use settings::{OrderRule, VaultSettings};
pub use vault::Vault;
