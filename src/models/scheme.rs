//! Scheme model
//!
//! A scheme is the column template entries are instantiated against: an
//! ordered list of named columns, each carrying a display constraint.
//! Every scheme implicitly ends with the two hidden stat columns
//! `ChangeDate` and `CreationDate`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-column display policy
///
/// Constraints only affect rendering; stored values are never modified by
/// a masking pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// Value shown unchanged
    None,
    /// Value replaced by exactly eight `*` characters
    Password,
    /// The middle span of the value replaced by `*`
    Truncate,
    /// Column dropped from the rendered table entirely
    Hidden,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Password => write!(f, "Password"),
            Self::Truncate => write!(f, "Truncate"),
            Self::Hidden => write!(f, "Hidden"),
        }
    }
}

/// One named, constrained column of a scheme
///
/// Serialized as a two-element array `[name, constraint]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, Constraint)", into = "(String, Constraint)")]
pub struct Column {
    pub name: String,
    pub constraint: Constraint,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, constraint: Constraint) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }
}

impl From<(String, Constraint)> for Column {
    fn from((name, constraint): (String, Constraint)) -> Self {
        Self { name, constraint }
    }
}

impl From<Column> for (String, Constraint) {
    fn from(column: Column) -> Self {
        (column.name, column.constraint)
    }
}

/// Number of trailing hidden stat columns on every scheme
pub const STAT_COLUMN_COUNT: usize = 2;

/// The two implicit stat columns appended to every scheme
fn stat_columns() -> [Column; STAT_COLUMN_COUNT] {
    [
        Column::new("ChangeDate", Constraint::Hidden),
        Column::new("CreationDate", Constraint::Hidden),
    ]
}

/// A column template for entries
///
/// Serialized as the bare column array, keyed by scheme id in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scheme {
    columns: Vec<Column>,
}

impl Scheme {
    /// Build a scheme from its visible columns, appending the stat columns
    pub fn from_visible(visible: Vec<Column>) -> Self {
        let mut columns = visible;
        columns.extend(stat_columns());
        Self { columns }
    }

    /// Replace the visible columns wholesale, re-appending the stat columns
    pub fn replace_visible(&mut self, visible: Vec<Column>) {
        *self = Self::from_visible(visible);
    }

    /// All columns, stat columns included
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The user-defined columns, without the trailing stat columns
    pub fn visible_columns(&self) -> &[Column] {
        let visible = self.columns.len().saturating_sub(STAT_COLUMN_COUNT);
        &self.columns[..visible]
    }

    /// Number of visible columns
    pub fn visible_count(&self) -> usize {
        self.visible_columns().len()
    }

    /// Total column count (visible + stat columns)
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether this scheme's visible columns equal the given signature
    ///
    /// The trailing stat columns are ignored, so a scheme can be resolved
    /// from its displayed column list.
    pub fn matches_signature(&self, visible: &[Column]) -> bool {
        self.visible_columns() == visible
    }
}
