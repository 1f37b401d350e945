//! Display masking
//!
//! Applies column constraints to values for rendering. Masking is
//! display-only: stored values are never touched by a render pass.

use crate::models::{Column, Constraint};

/// Mask a single value according to its column constraint
///
/// `Hidden` is not handled here; hidden columns are dropped from the
/// rendered table entirely rather than blanked.
pub fn mask_value(value: &str, constraint: Constraint) -> String {
    match constraint {
        Constraint::None | Constraint::Hidden => value.to_string(),
        Constraint::Password => "*".repeat(8),
        Constraint::Truncate => truncate_mask(value),
    }
}

/// Replace the middle span of a value with `*`
///
/// The masked span is the character index range
/// `[len/2 - 0.25*len, len/2 + 0.30*len)`, computed with truncating float
/// conversion. Operates on characters, not bytes.
pub fn truncate_mask(value: &str) -> String {
    let len = value.chars().count();
    let half = (len / 2) as f64;
    let start = (half - 0.25 * len as f64) as usize;
    let end = (half + 0.30 * len as f64) as usize;

    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i >= start && i < end { '*' } else { c })
        .collect()
}

/// Header cells for a scheme's visible columns, hidden columns dropped
pub fn visible_header(columns: &[Column]) -> Vec<String> {
    columns
        .iter()
        .filter(|c| c.constraint != Constraint::Hidden)
        .map(|c| c.name.clone())
        .collect()
}

/// Masked row cells for an entry's visible values, hidden columns dropped
///
/// Values are zipped against the columns, so an entry that has drifted from
/// an edited scheme renders its overlapping prefix rather than failing.
pub fn visible_cells(values: &[String], columns: &[Column]) -> Vec<String> {
    values
        .iter()
        .zip(columns.iter())
        .filter(|(_, c)| c.constraint != Constraint::Hidden)
        .map(|(v, c)| mask_value(v, c.constraint))
        .collect()
}

/// Keep the change/creation date cells allowed by the `dates_hidden` setting
///
/// The tuple is (change date hidden, creation date hidden).
pub fn filter_dates<T>(change: T, creation: T, dates_hidden: (bool, bool)) -> Vec<T> {
    match dates_hidden {
        (true, true) => vec![],
        (false, false) => vec![change, creation],
        (true, false) => vec![creation],
        (false, true) => vec![change],
    }
}
