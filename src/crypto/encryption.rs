//! AES-256-GCM encryption/decryption
//!
//! Provides authenticated encryption for the vault at rest. Each encryption
//! operation generates a unique nonce. The serialized [`Envelope`] is the
//! versioned nonce + ciphertext + tag structure stored on disk.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use serde::{Deserialize, Serialize};

use crate::error::{KeywardError, KeywardResult};

use super::DerivedKey;

/// Size of the AES-GCM nonce in bytes (96 bits)
const NONCE_SIZE: usize = 12;

/// Encrypted vault envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Version for future algorithm upgrades
    #[serde(default = "default_version")]
    pub version: u8,
    /// The nonce used for this encryption (base64 encoded)
    pub nonce: String,
    /// The encrypted ciphertext with authentication tag (base64 encoded)
    pub ciphertext: String,
}

fn default_version() -> u8 {
    1
}

impl Envelope {
    /// Create a new Envelope from raw bytes
    fn new(nonce: &[u8], ciphertext: &[u8]) -> Self {
        use base64::{engine::general_purpose::STANDARD, Engine};
        Self {
            version: 1,
            nonce: STANDARD.encode(nonce),
            ciphertext: STANDARD.encode(ciphertext),
        }
    }

    /// Decode the nonce from base64
    fn decode_nonce(&self) -> KeywardResult<Vec<u8>> {
        use base64::{engine::general_purpose::STANDARD, Engine};
        STANDARD
            .decode(&self.nonce)
            .map_err(|e| KeywardError::CorruptData(format!("Invalid nonce encoding: {}", e)))
    }

    /// Decode the ciphertext from base64
    fn decode_ciphertext(&self) -> KeywardResult<Vec<u8>> {
        use base64::{engine::general_purpose::STANDARD, Engine};
        STANDARD
            .decode(&self.ciphertext)
            .map_err(|e| KeywardError::CorruptData(format!("Invalid ciphertext encoding: {}", e)))
    }
}

/// Encrypt plaintext data using AES-256-GCM
///
/// Generates a random nonce for each encryption operation.
pub fn encrypt(plaintext: &[u8], key: &DerivedKey) -> KeywardResult<Envelope> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| KeywardError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| KeywardError::Encryption(format!("Encryption failed: {}", e)))?;

    Ok(Envelope::new(&nonce_bytes, &ciphertext))
}

/// Decrypt an envelope using AES-256-GCM
///
/// A failed authentication tag check means the key (and therefore the master
/// password) is wrong, so that case maps to [`KeywardError::WrongPassword`].
pub fn decrypt(envelope: &Envelope, key: &DerivedKey) -> KeywardResult<Vec<u8>> {
    if envelope.version != 1 {
        return Err(KeywardError::CorruptData(format!(
            "Unsupported envelope version: {}",
            envelope.version
        )));
    }

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| KeywardError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let nonce_bytes = envelope.decode_nonce()?;
    if nonce_bytes.len() != NONCE_SIZE {
        return Err(KeywardError::CorruptData(format!(
            "Invalid nonce size: expected {}, got {}",
            NONCE_SIZE,
            nonce_bytes.len()
        )));
    }
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = envelope.decode_ciphertext()?;

    cipher
        .decrypt(nonce, ciphertext.as_ref())
        .map_err(|_| KeywardError::WrongPassword)
}

/// Encrypt a string
pub fn encrypt_string(plaintext: &str, key: &DerivedKey) -> KeywardResult<Envelope> {
    encrypt(plaintext.as_bytes(), key)
}

/// Decrypt to a string
pub fn decrypt_string(envelope: &Envelope, key: &DerivedKey) -> KeywardResult<String> {
    let plaintext = decrypt(envelope, key)?;
    String::from_utf8(plaintext)
        .map_err(|e| KeywardError::CorruptData(format!("Invalid UTF-8 in decrypted data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::key_derivation::{derive_key, KdfParams, SALT_SIZE};

    fn test_key() -> DerivedKey {
        derive_key("test_password", &[9u8; SALT_SIZE], &KdfParams::with_iterations(10)).unwrap()
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = test_key();
        let plaintext = b"{\"schemes\":{},\"entries\":{}}";

        let envelope = encrypt(plaintext, &key).unwrap();
        let decrypted = decrypt(&envelope, &key).unwrap();

        assert_eq!(plaintext, decrypted.as_slice());
    }

    #[test]
    fn test_encrypt_decrypt_string() {
        let key = test_key();
        let envelope = encrypt_string("secret text", &key).unwrap();
        assert_eq!(decrypt_string(&envelope, &key).unwrap(), "secret text");
    }

    #[test]
    fn test_different_nonces() {
        let key = test_key();
        let envelope1 = encrypt(b"same input", &key).unwrap();
        let envelope2 = encrypt(b"same input", &key).unwrap();

        assert_ne!(envelope1.nonce, envelope2.nonce);
        assert_ne!(envelope1.ciphertext, envelope2.ciphertext);
    }

    #[test]
    fn test_wrong_key_is_wrong_password() {
        let key1 = test_key();
        let key2 =
            derive_key("other_password", &[9u8; SALT_SIZE], &KdfParams::with_iterations(10))
                .unwrap();

        let envelope = encrypt(b"secret", &key1).unwrap();
        let result = decrypt(&envelope, &key2);
        assert!(matches!(result, Err(KeywardError::WrongPassword)));
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let key = test_key();
        let mut envelope = encrypt(b"secret", &key).unwrap();

        use base64::{engine::general_purpose::STANDARD, Engine};
        let mut ciphertext = STANDARD.decode(&envelope.ciphertext).unwrap();
        ciphertext[0] ^= 0xFF;
        envelope.ciphertext = STANDARD.encode(&ciphertext);

        assert!(decrypt(&envelope, &key).is_err());
    }

    #[test]
    fn test_unsupported_version() {
        let key = test_key();
        let mut envelope = encrypt(b"secret", &key).unwrap();
        envelope.version = 9;

        assert!(matches!(
            decrypt(&envelope, &key),
            Err(KeywardError::CorruptData(_))
        ));
    }

    #[test]
    fn test_empty_plaintext() {
        let key = test_key();
        let envelope = encrypt(b"", &key).unwrap();
        assert_eq!(decrypt(&envelope, &key).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_envelope_serializes_to_one_line() {
        let key = test_key();
        let envelope = encrypt(b"secret", &key).unwrap();
        let line = serde_json::to_string(&envelope).unwrap();
        assert!(!line.contains('\n'));

        let parsed: Envelope = serde_json::from_str(&line).unwrap();
        assert_eq!(decrypt(&parsed, &key).unwrap(), b"secret");
    }
}
