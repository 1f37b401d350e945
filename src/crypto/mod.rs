//! Cryptographic functions for Keyward
//!
//! Provides AES-256-GCM authenticated encryption with PBKDF2-SHA256 key
//! derivation for at-rest encryption of the vault.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;

pub use encryption::{decrypt, decrypt_string, encrypt, encrypt_string, Envelope};
pub use key_derivation::{derive_key, generate_salt, DerivedKey, KdfParams, SALT_SIZE};
pub use secure_memory::SecureString;
