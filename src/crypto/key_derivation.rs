//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Derives encryption keys from the master password. The iteration count is
//! deliberately high so a single derivation takes hundreds of milliseconds,
//! slowing offline brute-force attempts.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::{KeywardError, KeywardResult};

/// Size of the key-derivation salt in bytes
pub const SALT_SIZE: usize = 16;

/// Default PBKDF2 iteration count (OWASP-range for SHA-256)
const DEFAULT_ITERATIONS: u32 = 480_000;

/// Parameters for key derivation
#[derive(Debug, Clone)]
pub struct KdfParams {
    /// Number of PBKDF2 iterations
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KdfParams {
    /// Create params with a custom iteration count (useful for fast tests)
    pub fn with_iterations(iterations: u32) -> Self {
        Self { iterations }
    }
}

/// A derived encryption key
pub struct DerivedKey {
    /// The 32-byte key for AES-256
    key: [u8; 32],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.key
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Generate a fresh random salt
///
/// Called once per vault; the salt is stored alongside the vault file and
/// never rotated.
pub fn generate_salt() -> [u8; SALT_SIZE] {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Derive an encryption key from the master password and salt
pub fn derive_key(password: &str, salt: &[u8], params: &KdfParams) -> KeywardResult<DerivedKey> {
    if salt.len() < 8 {
        return Err(KeywardError::Encryption(format!(
            "Salt too short: expected at least 8 bytes, got {}",
            salt.len()
        )));
    }
    if params.iterations == 0 {
        return Err(KeywardError::Encryption(
            "Iteration count must be non-zero".to_string(),
        ));
    }

    let mut key = [0u8; 32];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, params.iterations, &mut key);

    Ok(DerivedKey { key })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_params() -> KdfParams {
        KdfParams::with_iterations(10)
    }

    #[test]
    fn test_derive_key_is_deterministic() {
        let salt = [7u8; SALT_SIZE];
        let key1 = derive_key("master", &salt, &fast_params()).unwrap();
        let key2 = derive_key("master", &salt, &fast_params()).unwrap();
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = [7u8; SALT_SIZE];
        let key1 = derive_key("master", &salt, &fast_params()).unwrap();
        let key2 = derive_key("other", &salt, &fast_params()).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("master", &[1u8; SALT_SIZE], &fast_params()).unwrap();
        let key2 = derive_key("master", &[2u8; SALT_SIZE], &fast_params()).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_generated_salts_are_unique() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn test_short_salt_rejected() {
        let result = derive_key("master", &[0u8; 4], &fast_params());
        assert!(matches!(result, Err(KeywardError::Encryption(_))));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = derive_key("master", &[0u8; SALT_SIZE], &KdfParams::with_iterations(0));
        assert!(matches!(result, Err(KeywardError::Encryption(_))));
    }
}
