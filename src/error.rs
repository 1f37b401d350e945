//! Custom error types for Keyward
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Keyward operations
#[derive(Error, Debug)]
pub enum KeywardError {
    /// Master password rejected by the authentication tag check
    #[error("Wrong master password")]
    WrongPassword,

    /// Decryption succeeded but the plaintext is not a valid vault
    #[error("Corrupt vault data: {0}")]
    CorruptData(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Encryption/KDF errors
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KeywardError {
    /// Create a "not found" error for schemes
    pub fn scheme_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Scheme",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an authentication failure
    pub fn is_wrong_password(&self) -> bool {
        matches!(self, Self::WrongPassword)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for KeywardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KeywardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Keyward operations
pub type KeywardResult<T> = Result<T, KeywardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KeywardError::Validation("value count mismatch".into());
        assert_eq!(err.to_string(), "Validation error: value count mismatch");
    }

    #[test]
    fn test_not_found_error() {
        let err = KeywardError::scheme_not_found("deadbeef");
        assert_eq!(err.to_string(), "Scheme not found: deadbeef");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_wrong_password() {
        let err = KeywardError::WrongPassword;
        assert!(err.is_wrong_password());
        assert_eq!(err.to_string(), "Wrong master password");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KeywardError = io_err.into();
        assert!(matches!(err, KeywardError::Io(_)));
    }
}
