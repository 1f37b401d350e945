//! Reversible text-safe value encoding
//!
//! Entry values are stored base64-encoded so arbitrary characters (table
//! delimiters, newlines, unicode) survive serialization and display
//! handling unchanged.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{KeywardError, KeywardResult};

/// Encode a plaintext value for storage
pub fn encode_value(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

/// Decode a stored value back to plaintext
pub fn decode_value(encoded: &str) -> KeywardResult<String> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| KeywardError::CorruptData(format!("Invalid value encoding: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| KeywardError::CorruptData(format!("Invalid UTF-8 in stored value: {}", e)))
}
