//! Entry model
//!
//! One credential record, tied to exactly one scheme. The `values` list
//! always holds one encoded value per visible column plus the two trailing
//! encoded timestamps (change date, creation date).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::KeywardResult;

use super::encoding::{decode_value, encode_value};
use super::ids::SchemeId;

/// Timestamp format used for the stat values (ISO-like, microseconds)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Format a timestamp the way it is stored in entry values
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// One credential record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The owning scheme
    pub scheme_id: SchemeId,
    /// Encoded values, one per visible column, then change date, then
    /// creation date
    pub values: Vec<String>,
}

impl Entry {
    /// Create a new entry from plaintext visible values
    ///
    /// Appends the creation/change timestamps; every value is stored in the
    /// text-safe encoding.
    pub fn new(scheme_id: SchemeId, visible_values: Vec<String>, at: DateTime<Utc>) -> Self {
        let stamp = encode_value(&format_timestamp(at));
        let mut values: Vec<String> =
            visible_values.iter().map(|v| encode_value(v)).collect();
        values.push(stamp.clone());
        values.push(stamp);
        Self { scheme_id, values }
    }

    /// Replace the visible values wholesale
    ///
    /// Stamps a fresh change date and carries the stored creation date over
    /// verbatim.
    pub fn replace_values(&mut self, visible_values: Vec<String>, at: DateTime<Utc>) {
        let creation = self
            .values
            .last()
            .cloned()
            .unwrap_or_else(|| encode_value(&format_timestamp(at)));

        let mut values: Vec<String> =
            visible_values.iter().map(|v| encode_value(v)).collect();
        values.push(encode_value(&format_timestamp(at)));
        values.push(creation);
        self.values = values;
    }

    /// All values decoded back to plaintext, timestamps included
    pub fn decoded_values(&self) -> KeywardResult<Vec<String>> {
        self.values.iter().map(|v| decode_value(v)).collect()
    }

    /// The decoded change date value
    pub fn change_date(&self) -> KeywardResult<Option<String>> {
        let idx = match self.values.len().checked_sub(2) {
            Some(idx) => idx,
            None => return Ok(None),
        };
        decode_value(&self.values[idx]).map(Some)
    }

    /// The decoded creation date value
    pub fn creation_date(&self) -> KeywardResult<Option<String>> {
        match self.values.last() {
            Some(value) => decode_value(value).map(Some),
            None => Ok(None),
        }
    }

    /// Sort key realizing insertion order: the creation timestamp
    ///
    /// The fixed-width timestamp format makes plain string comparison
    /// chronological. Falls back to the raw stored value if decoding fails
    /// so ordering never errors.
    pub fn creation_sort_key(&self) -> String {
        match self.values.last() {
            Some(value) => decode_value(value).unwrap_or_else(|_| value.clone()),
            None => String::new(),
        }
    }
}
