//! View snapshot and pointer indexing
//!
//! `render_snapshot` flattens the vault into display lines and the
//! pointer-offset space. The snapshot is an immutable value, recomputed
//! from scratch after every mutation; stale snapshots are discarded, never
//! patched.

use crate::models::encoding::decode_value;
use crate::models::{Entry, EntryId, Scheme, SchemeId, Vault};

use super::mask::{filter_dates, visible_cells, visible_header};
use super::table::AsciiTable;

/// Line shown when no entries are visible
const EMPTY_PLACEHOLDER: &str = "You have no entries to display yet.";

/// One rendered view of the vault
///
/// `pointer_offsets` is the only valid cursor-position space: one
/// addressable offset per data row, in group-then-row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    lines: Vec<String>,
    pointer_offsets: Vec<usize>,
    row_entries: Vec<EntryId>,
}

impl ViewSnapshot {
    /// The rendered display lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Addressable cursor offsets, one per data row
    pub fn pointer_offsets(&self) -> &[usize] {
        &self.pointer_offsets
    }

    /// The entry rendered at a pointer offset
    ///
    /// A stale offset (its row disappeared in this snapshot) falls back to
    /// the first entry of the first visible group. `None` only when the
    /// snapshot has no entries at all.
    pub fn entry_id_at_offset(&self, offset: usize) -> Option<&EntryId> {
        match self.pointer_offsets.iter().position(|&o| o == offset) {
            Some(idx) => self.row_entries.get(idx),
            None => self.row_entries.first(),
        }
    }

    /// The pointer offset of an entry
    ///
    /// `None` when the entry is not part of this snapshot (deleted, or its
    /// scheme is hidden); the caller should fall back to a default offset.
    pub fn offset_of_entry_id(&self, id: &EntryId) -> Option<usize> {
        self.row_entries
            .iter()
            .position(|e| e == id)
            .map(|idx| self.pointer_offsets[idx])
    }

    /// Whether the snapshot renders any entries
    pub fn is_empty(&self) -> bool {
        self.row_entries.is_empty()
    }
}

/// Flatten the vault into a fresh snapshot
pub fn render_snapshot(vault: &Vault) -> ViewSnapshot {
    let mut lines: Vec<String> = Vec::new();
    let mut pointer_offsets: Vec<usize> = Vec::new();
    let mut row_entries: Vec<EntryId> = Vec::new();

    for (scheme, entries) in visible_groups(vault) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        let table_start = lines.len();

        let mut table = AsciiTable::new(header_cells(scheme, vault));
        for (entry_id, entry) in &entries {
            table.add_row(row_cells(entry, scheme, vault));
            row_entries.push((*entry_id).clone());
        }

        for (row_index, _) in entries.iter().enumerate() {
            pointer_offsets.push(table_start + AsciiTable::HEADER_LINES + row_index);
        }

        lines.extend(table.render());
    }

    if row_entries.is_empty() {
        return ViewSnapshot {
            lines: vec![EMPTY_PLACEHOLDER.to_string()],
            pointer_offsets: Vec::new(),
            row_entries: Vec::new(),
        };
    }

    ViewSnapshot {
        lines,
        pointer_offsets,
        row_entries,
    }
}

/// Group visible entries by scheme, ordered and sorted for display
///
/// Groups are ordered by ascending scheme id; within a group entries are in
/// canonical creation order unless an order rule overrides it.
fn visible_groups(vault: &Vault) -> Vec<(&Scheme, Vec<(&EntryId, &Entry)>)> {
    let mut groups = Vec::new();

    // BTreeMap iteration gives the ascending scheme-id order
    for (scheme_id, scheme) in &vault.schemes {
        if vault.settings.is_scheme_hidden(scheme_id) {
            continue;
        }

        let mut entries = vault.entries_of_scheme(scheme_id);
        if entries.is_empty() {
            continue;
        }

        if let Some(rule) = vault.settings.order_rule_for(scheme_id) {
            if rule.column < scheme.column_count() {
                apply_order_rule(&mut entries, rule.column, rule.descending);
            }
        }

        groups.push((scheme, entries));
    }

    groups
}

/// Stable sort a group by the decoded value of one column
///
/// Stability keeps ties in insertion order, and makes re-applying the same
/// rule idempotent.
fn apply_order_rule(entries: &mut [(&EntryId, &Entry)], column: usize, descending: bool) {
    entries.sort_by(|(_, a), (_, b)| {
        let a_key = sort_value(a, column);
        let b_key = sort_value(b, column);
        if descending {
            b_key.cmp(&a_key)
        } else {
            a_key.cmp(&b_key)
        }
    });
}

fn sort_value(entry: &Entry, column: usize) -> String {
    entry
        .values
        .get(column)
        .map(|v| decode_value(v).unwrap_or_else(|_| v.clone()))
        .unwrap_or_default()
}

fn header_cells(scheme: &Scheme, vault: &Vault) -> Vec<String> {
    let mut cells = visible_header(scheme.visible_columns());
    cells.extend(filter_dates(
        "ChangeDate".to_string(),
        "CreationDate".to_string(),
        vault.settings.dates_hidden,
    ));
    cells
}

fn row_cells(entry: &Entry, scheme: &Scheme, vault: &Vault) -> Vec<String> {
    let visible_count = scheme.visible_count();
    let decoded: Vec<String> = entry
        .values
        .iter()
        .map(|v| decode_value(v).unwrap_or_else(|_| v.clone()))
        .collect();

    let visible_values = &decoded[..decoded.len().min(visible_count)];
    let mut cells = visible_cells(visible_values, scheme.visible_columns());

    if decoded.len() >= visible_count + 2 {
        cells.extend(filter_dates(
            decoded[decoded.len() - 2].clone(),
            decoded[decoded.len() - 1].clone(),
            vault.settings.dates_hidden,
        ));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, Constraint, OrderRule};
    use crate::services::{EntryService, SchemeService};
    use chrono::{TimeZone, Utc};

    /// Insert an entry with an explicit creation second, so insertion order
    /// is unambiguous in assertions.
    fn insert_at(vault: &mut Vault, scheme_id: &SchemeId, values: &[&str], secs: u32) -> EntryId {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, secs).unwrap();
        let id = EntryId::generate();
        vault.entries.insert(
            id.clone(),
            Entry::new(
                scheme_id.clone(),
                values.iter().map(|v| v.to_string()).collect(),
                at,
            ),
        );
        id
    }

    fn vault_with_entries(values: &[&str]) -> (Vault, SchemeId, Vec<EntryId>) {
        let mut vault = Vault::empty();
        let scheme_id = SchemeService::new(&mut vault)
            .add(vec![Column::new("Value", Constraint::None)])
            .unwrap();

        let mut ids = Vec::new();
        for (i, value) in values.iter().copied().enumerate() {
            ids.push(insert_at(&mut vault, &scheme_id, &[value], i as u32));
        }
        (vault, scheme_id, ids)
    }

    #[test]
    fn test_offsets_for_single_group() {
        let (vault, _, _) = vault_with_entries(&["a", "b", "c"]);
        let snapshot = render_snapshot(&vault);

        // Top border, header, separator, then one offset per row
        assert_eq!(snapshot.pointer_offsets(), &[3, 4, 5]);
        assert_eq!(snapshot.lines().len(), 7);
    }

    #[test]
    fn test_offsets_across_groups() {
        // Explicit ids pin the group order (ascending scheme id)
        let mut vault = Vault::empty();
        let first: SchemeId = "aa000000000000000000000000000000".parse().unwrap();
        let second: SchemeId = "bb000000000000000000000000000000".parse().unwrap();
        vault.schemes.insert(
            first.clone(),
            crate::models::Scheme::from_visible(vec![Column::new("Value", Constraint::None)]),
        );
        vault.schemes.insert(
            second.clone(),
            crate::models::Scheme::from_visible(vec![Column::new("Other", Constraint::None)]),
        );
        insert_at(&mut vault, &first, &["a"], 0);
        insert_at(&mut vault, &first, &["b"], 1);
        insert_at(&mut vault, &second, &["x"], 2);

        let snapshot = render_snapshot(&vault);

        // Group one rows at 3 and 4; its bottom border at 5, blank at 6,
        // second table starts at 7 and its row lands at 10.
        assert_eq!(snapshot.pointer_offsets(), &[3, 4, 10]);
        assert_eq!(snapshot.lines()[6], "");
    }

    #[test]
    fn test_pointer_roundtrip() {
        let (mut vault, _, _) = vault_with_entries(&["a", "b", "c"]);
        let second = SchemeService::new(&mut vault)
            .add(vec![Column::new("Other", Constraint::None)])
            .unwrap();
        EntryService::new(&mut vault)
            .add(&second, vec!["x".into()])
            .unwrap();

        let snapshot = render_snapshot(&vault);
        for &offset in snapshot.pointer_offsets() {
            let id = snapshot.entry_id_at_offset(offset).unwrap();
            assert_eq!(snapshot.offset_of_entry_id(id), Some(offset));
        }
    }

    #[test]
    fn test_stale_offset_falls_back_to_first_entry() {
        let (mut vault, _, ids) = vault_with_entries(&["a", "b"]);
        let snapshot = render_snapshot(&vault);
        let last_offset = *snapshot.pointer_offsets().last().unwrap();

        EntryService::new(&mut vault).delete(&ids[1]);
        let fresh = render_snapshot(&vault);

        // The old offset no longer exists; the cursor lands on the first row
        assert_eq!(fresh.entry_id_at_offset(last_offset), Some(&ids[0]));
        assert_eq!(fresh.offset_of_entry_id(&ids[1]), None);
    }

    #[test]
    fn test_empty_vault_renders_placeholder() {
        let vault = Vault::empty();
        let snapshot = render_snapshot(&vault);

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.lines().len(), 1);
        assert!(snapshot.pointer_offsets().is_empty());
        assert_eq!(snapshot.entry_id_at_offset(3), None);
    }

    #[test]
    fn test_hidden_scheme_is_dropped() {
        let (mut vault, scheme_id, ids) = vault_with_entries(&["a"]);
        vault.settings.hidden_schemes.insert(scheme_id);

        let snapshot = render_snapshot(&vault);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.offset_of_entry_id(&ids[0]), None);
    }

    #[test]
    fn test_password_column_is_masked() {
        let mut vault = Vault::empty();
        let scheme_id = SchemeService::new(&mut vault)
            .add(vec![
                Column::new("Site", Constraint::None),
                Column::new("Pwd", Constraint::Password),
            ])
            .unwrap();
        EntryService::new(&mut vault)
            .add(&scheme_id, vec!["github.com".into(), "s3cr3t!".into()])
            .unwrap();

        let snapshot = render_snapshot(&vault);
        let rendered = snapshot.lines().join("\n");

        assert!(rendered.contains("github.com"));
        assert!(rendered.contains("********"));
        assert!(!rendered.contains("s3cr3t!"));
    }

    #[test]
    fn test_dates_hidden_by_default() {
        let (vault, _, _) = vault_with_entries(&["a"]);
        let snapshot = render_snapshot(&vault);
        let rendered = snapshot.lines().join("\n");

        assert!(!rendered.contains("ChangeDate"));
        assert!(!rendered.contains("CreationDate"));
    }

    #[test]
    fn test_dates_shown_when_unhidden() {
        let (mut vault, _, _) = vault_with_entries(&["a"]);
        vault.settings.dates_hidden = (false, false);

        let snapshot = render_snapshot(&vault);
        let rendered = snapshot.lines().join("\n");
        assert!(rendered.contains("ChangeDate"));
        assert!(rendered.contains("CreationDate"));
    }

    #[test]
    fn test_only_creation_date_shown() {
        let (mut vault, _, _) = vault_with_entries(&["a"]);
        vault.settings.dates_hidden = (true, false);

        let snapshot = render_snapshot(&vault);
        let rendered = snapshot.lines().join("\n");
        assert!(!rendered.contains("ChangeDate"));
        assert!(rendered.contains("CreationDate"));
    }

    #[test]
    fn test_order_rule_ascending_and_descending() {
        let (mut vault, scheme_id, _) = vault_with_entries(&["3", "1", "2"]);

        vault.settings.set_order_rule(OrderRule {
            scheme_id: scheme_id.clone(),
            column: 0,
            descending: false,
        });
        let ascending: Vec<String> = rendered_column_values(&render_snapshot(&vault));
        assert_eq!(ascending, vec!["1", "2", "3"]);

        vault.settings.set_order_rule(OrderRule {
            scheme_id,
            column: 0,
            descending: true,
        });
        let descending: Vec<String> = rendered_column_values(&render_snapshot(&vault));
        assert_eq!(descending, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_order_rule_is_idempotent() {
        let (mut vault, scheme_id, _) = vault_with_entries(&["b", "a", "b", "c"]);
        vault.settings.set_order_rule(OrderRule {
            scheme_id: scheme_id.clone(),
            column: 0,
            descending: false,
        });

        let once = render_snapshot(&vault);
        vault.settings.set_order_rule(OrderRule {
            scheme_id,
            column: 0,
            descending: false,
        });
        let twice = render_snapshot(&vault);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_rule_with_out_of_range_column() {
        let (mut vault, scheme_id, _) = vault_with_entries(&["3", "1", "2"]);
        vault.settings.set_order_rule(OrderRule {
            scheme_id,
            column: 99,
            descending: false,
        });

        // Rule ignored; canonical insertion order preserved
        let values = rendered_column_values(&render_snapshot(&vault));
        assert_eq!(values, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_groups_ordered_by_scheme_id() {
        let mut vault = Vault::empty();
        let a: SchemeId = "aa000000000000000000000000000000".parse().unwrap();
        let z: SchemeId = "ff000000000000000000000000000000".parse().unwrap();

        vault.schemes.insert(
            z.clone(),
            crate::models::Scheme::from_visible(vec![Column::new("Z", Constraint::None)]),
        );
        vault.schemes.insert(
            a.clone(),
            crate::models::Scheme::from_visible(vec![Column::new("A", Constraint::None)]),
        );
        EntryService::new(&mut vault).add(&z, vec!["zv".into()]).unwrap();
        EntryService::new(&mut vault).add(&a, vec!["av".into()]).unwrap();

        let snapshot = render_snapshot(&vault);
        let rendered = snapshot.lines().join("\n");
        let a_pos = rendered.find("av").unwrap();
        let z_pos = rendered.find("zv").unwrap();
        assert!(a_pos < z_pos);
    }

    fn rendered_column_values(snapshot: &ViewSnapshot) -> Vec<String> {
        snapshot
            .pointer_offsets()
            .iter()
            .map(|&o| {
                snapshot.lines()[o]
                    .trim_matches('|')
                    .trim()
                    .to_string()
            })
            .collect()
    }
}
