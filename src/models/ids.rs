//! Strongly-typed ID wrappers for schemes and entries
//!
//! Ids are random 32-character lowercase hex tokens. Newtype wrappers
//! prevent mixing up scheme and entry ids at compile time, and the token
//! ordering gives groups a deterministic, stable total order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers over hex tokens
macro_rules! define_id {
    ($name:ident, $entity:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh random ID
            pub fn generate() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            /// Get the hex token
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() || !s.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(IdParseError {
                        entity: $entity,
                        token: s.to_string(),
                    });
                }
                Ok(Self(s.to_ascii_lowercase()))
            }
        }
    };
}

/// Error returned when an ID token is not valid hex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError {
    entity: &'static str,
    token: String,
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} id token: {:?}", self.entity, self.token)
    }
}

impl std::error::Error for IdParseError {}

define_id!(SchemeId, "scheme");
define_id!(EntryId, "entry");
