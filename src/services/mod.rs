//! Service layer for Keyward
//!
//! Validated mutations on top of the vault model: scheme and entry CRUD,
//! fuzzy search, and password generation/evaluation. Services validate
//! first and mutate second, so rejected operations leave the vault
//! untouched.

pub mod entry;
pub mod password;
pub mod scheme;
pub mod search;

pub use entry::EntryService;
pub use password::{evaluate_password, generate_password, PasswordStrength};
pub use scheme::SchemeService;
pub use search::{search, SearchMatch};
