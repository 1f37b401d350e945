//! Password generation and strength evaluation
//!
//! Helpers offered to the interactive surface when the user fills a
//! password column.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

/// Characters eligible for generated passwords: letters, digits, punctuation
const ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Rough strength verdict for a candidate password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    /// Short, or too few character classes
    Bad,
    /// Three character classes
    Okay,
    /// All four character classes
    Excellent,
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bad => write!(f, "BAD"),
            Self::Okay => write!(f, "OKAY"),
            Self::Excellent => write!(f, "EXCELLENT"),
        }
    }
}

/// Generate a random password of `length` characters
///
/// Each character is drawn from letters, digits and punctuation with a
/// cryptographic RNG.
pub fn generate_password(length: usize) -> String {
    let alphabet: Vec<char> = ALPHABET.chars().collect();

    (0..length)
        .map(|_| {
            // Rejection sampling keeps the distribution uniform
            loop {
                let idx = (OsRng.next_u32() as usize) % alphabet.len().next_power_of_two();
                if idx < alphabet.len() {
                    break alphabet[idx];
                }
            }
        })
        .collect()
}

/// Evaluate a password by length and character-class variety
pub fn evaluate_password(password: &str) -> PasswordStrength {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_punct = password.chars().any(|c| c.is_ascii_punctuation());

    let variety = [has_lower, has_upper, has_digit, has_punct]
        .iter()
        .filter(|&&present| present)
        .count();

    if password.chars().count() < 8 || variety <= 2 {
        PasswordStrength::Bad
    } else if variety == 3 {
        PasswordStrength::Okay
    } else {
        PasswordStrength::Excellent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_length() {
        assert_eq!(generate_password(16).chars().count(), 16);
        assert_eq!(generate_password(0), "");
    }

    #[test]
    fn test_generated_passwords_differ() {
        assert_ne!(generate_password(24), generate_password(24));
    }

    #[test]
    fn test_generated_charset() {
        let password = generate_password(64);
        assert!(password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_punctuation()));
    }

    #[test]
    fn test_evaluate_short_is_bad() {
        assert_eq!(evaluate_password("aB3!"), PasswordStrength::Bad);
    }

    #[test]
    fn test_evaluate_two_classes_is_bad() {
        assert_eq!(evaluate_password("abcdefgh1234"), PasswordStrength::Bad);
    }

    #[test]
    fn test_evaluate_three_classes_is_okay() {
        assert_eq!(evaluate_password("abcdEFGH1234"), PasswordStrength::Okay);
    }

    #[test]
    fn test_evaluate_four_classes_is_excellent() {
        assert_eq!(evaluate_password("abcdEF12!?"), PasswordStrength::Excellent);
    }
}
