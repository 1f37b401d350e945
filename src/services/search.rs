//! Fuzzy search over entry values
//!
//! For each entry, the single best-scoring value against the query is kept;
//! the overall result is the top N entries by score. There is no persistent
//! index; every query re-scores the vault, which is fine at the scale of a
//! personal secret store.

use crate::models::{EntryId, Vault};

/// One search hit: the entry, its best-matching value, and the score
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    pub entry_id: EntryId,
    pub value: String,
    pub score: f64,
}

/// Find the `top_n` entries whose values best match `query`
///
/// Every decoded value of every entry is scored; ties keep the canonical
/// entry order.
pub fn search(vault: &Vault, query: &str, top_n: usize) -> Vec<SearchMatch> {
    let mut matches: Vec<SearchMatch> = Vec::new();

    for (id, entry) in vault.entries_in_order() {
        let mut best: Option<(String, f64)> = None;
        for value in entry.values.iter() {
            let decoded = match crate::models::encoding::decode_value(value) {
                Ok(decoded) => decoded,
                Err(_) => continue,
            };
            let score = similarity(&decoded, query);
            match &best {
                Some((_, best_score)) if score <= *best_score => {}
                _ => best = Some((decoded, score)),
            }
        }
        if let Some((value, score)) = best {
            matches.push(SearchMatch {
                entry_id: id.clone(),
                value,
                score,
            });
        }
    }

    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    matches.truncate(top_n);
    matches
}

/// Similarity between a stored value and the query, in `0.0..=1.0`
///
/// Exact match (case-insensitive) scores 1.0, containment 0.8, anything
/// else the character-set overlap ratio.
fn similarity(value: &str, query: &str) -> f64 {
    let value = normalize(value);
    let query = normalize(query);

    if value == query {
        return 1.0;
    }

    if !value.is_empty() && !query.is_empty() && (value.contains(&query) || query.contains(&value))
    {
        return 0.8;
    }

    let value_chars: std::collections::HashSet<char> = value.chars().collect();
    let query_chars: std::collections::HashSet<char> = query.chars().collect();
    let intersection = value_chars.intersection(&query_chars).count();
    let union = value_chars.union(&query_chars).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
