//! Vault settings
//!
//! Display-affecting preferences persisted inside the vault: visibility of
//! the stat date columns, hidden schemes, and per-scheme order rules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ids::SchemeId;

/// One per-scheme ordering rule
///
/// At most one rule is active per scheme; setting a new rule replaces the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRule {
    /// The scheme whose group this rule orders
    pub scheme_id: SchemeId,
    /// Index into the scheme's full column list
    pub column: usize,
    /// Sort descending instead of ascending
    pub descending: bool,
}

/// Persisted display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSettings {
    /// Visibility of the (change date, creation date) columns; hidden when true
    pub dates_hidden: (bool, bool),
    /// Schemes excluded from the rendered view
    pub hidden_schemes: BTreeSet<SchemeId>,
    /// Active order rules, at most one per scheme
    #[serde(default)]
    pub order_rules: Vec<OrderRule>,
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            dates_hidden: (true, true),
            hidden_schemes: BTreeSet::new(),
            order_rules: Vec::new(),
        }
    }
}

impl VaultSettings {
    /// The active order rule for a scheme, if any
    pub fn order_rule_for(&self, scheme_id: &SchemeId) -> Option<&OrderRule> {
        self.order_rules.iter().find(|r| &r.scheme_id == scheme_id)
    }

    /// Install a rule, replacing any previous rule for the same scheme
    pub fn set_order_rule(&mut self, rule: OrderRule) {
        self.order_rules.retain(|r| r.scheme_id != rule.scheme_id);
        self.order_rules.push(rule);
    }

    /// Remove the rule for a scheme, if present
    pub fn clear_order_rule(&mut self, scheme_id: &SchemeId) {
        self.order_rules.retain(|r| &r.scheme_id != scheme_id);
    }

    /// Drop every reference to a scheme (hidden flag and order rule)
    pub fn forget_scheme(&mut self, scheme_id: &SchemeId) {
        self.hidden_schemes.remove(scheme_id);
        self.clear_order_rule(scheme_id);
    }

    /// Whether a scheme is excluded from the rendered view
    pub fn is_scheme_hidden(&self, scheme_id: &SchemeId) -> bool {
        self.hidden_schemes.contains(scheme_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme_id(token: &str) -> SchemeId {
        token.parse().unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = VaultSettings::default();
        assert_eq!(settings.dates_hidden, (true, true));
        assert!(settings.hidden_schemes.is_empty());
        assert!(settings.order_rules.is_empty());
    }

    #[test]
    fn test_set_order_rule_replaces_existing() {
        let mut settings = VaultSettings::default();
        let id = scheme_id("aa000000000000000000000000000000");

        settings.set_order_rule(OrderRule {
            scheme_id: id.clone(),
            column: 0,
            descending: false,
        });
        settings.set_order_rule(OrderRule {
            scheme_id: id.clone(),
            column: 1,
            descending: true,
        });

        assert_eq!(settings.order_rules.len(), 1);
        let rule = settings.order_rule_for(&id).unwrap();
        assert_eq!(rule.column, 1);
        assert!(rule.descending);
    }

    #[test]
    fn test_rules_for_different_schemes_coexist() {
        let mut settings = VaultSettings::default();
        let a = scheme_id("aa000000000000000000000000000000");
        let b = scheme_id("bb000000000000000000000000000000");

        settings.set_order_rule(OrderRule {
            scheme_id: a.clone(),
            column: 0,
            descending: false,
        });
        settings.set_order_rule(OrderRule {
            scheme_id: b.clone(),
            column: 0,
            descending: true,
        });

        assert_eq!(settings.order_rules.len(), 2);
        assert!(settings.order_rule_for(&a).is_some());
        assert!(settings.order_rule_for(&b).is_some());
    }

    #[test]
    fn test_forget_scheme_purges_references() {
        let mut settings = VaultSettings::default();
        let id = scheme_id("aa000000000000000000000000000000");

        settings.hidden_schemes.insert(id.clone());
        settings.set_order_rule(OrderRule {
            scheme_id: id.clone(),
            column: 0,
            descending: false,
        });

        settings.forget_scheme(&id);
        assert!(!settings.is_scheme_hidden(&id));
        assert!(settings.order_rule_for(&id).is_none());
    }

    #[test]
    fn test_dates_hidden_wire_format() {
        let settings = VaultSettings::default();
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["dates_hidden"], serde_json::json!([true, true]));
        assert_eq!(json["hidden_schemes"], serde_json::json!([]));
    }
}
