//! Field-to-column mapping owned and mutated by the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields::FieldKey;

/// Assignment of semantic fields to source column names.
///
/// Unset fields are simply absent from the table. Serializes as a flat
/// `field key -> column name` map so presets and config files stay plain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping {
    entries: BTreeMap<FieldKey, String>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column name mapped to `key`, if any. Blank assignments count as unset.
    pub fn column_for(&self, key: FieldKey) -> Option<&str> {
        self.entries
            .get(&key)
            .map(String::as_str)
            .filter(|column| !column.trim().is_empty())
    }

    pub fn set(&mut self, key: FieldKey, column: impl Into<String>) {
        self.entries.insert(key, column.into());
    }

    pub fn unset(&mut self, key: FieldKey) {
        self.entries.remove(&key);
    }

    pub fn is_set(&self, key: FieldKey) -> bool {
        self.column_for(key).is_some()
    }

    /// Overlays suggested assignments onto this mapping.
    ///
    /// A suggestion is applied only when the field is currently unset or its
    /// assigned column no longer exists in `headers`. Explicit live choices
    /// are never overwritten.
    pub fn merge_suggestions(
        &mut self,
        suggestions: &BTreeMap<FieldKey, String>,
        headers: &[String],
    ) {
        for (key, column) in suggestions {
            let stale = match self.column_for(*key) {
                Some(current) => !headers.iter().any(|header| header == current),
                None => true,
            };
            if stale {
                self.entries.insert(*key, column.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_fills_only_unset_or_stale_entries() {
        let headers = vec!["Ship Date".to_string(), "Status".to_string()];
        let mut mapping = FieldMapping::new();
        mapping.set(FieldKey::Status, "Status");
        mapping.set(FieldKey::Method, "Old Column");

        let mut suggestions = BTreeMap::new();
        suggestions.insert(FieldKey::Status, "Ship Date".to_string());
        suggestions.insert(FieldKey::Method, "Status".to_string());
        suggestions.insert(FieldKey::ShippingDate, "Ship Date".to_string());
        mapping.merge_suggestions(&suggestions, &headers);

        // Live explicit choice kept.
        assert_eq!(mapping.column_for(FieldKey::Status), Some("Status"));
        // Stale column replaced.
        assert_eq!(mapping.column_for(FieldKey::Method), Some("Status"));
        // Unset field filled.
        assert_eq!(mapping.column_for(FieldKey::ShippingDate), Some("Ship Date"));
    }

    #[test]
    fn blank_assignment_behaves_as_unset() {
        let mut mapping = FieldMapping::new();
        mapping.set(FieldKey::Product, "  ");
        assert!(!mapping.is_set(FieldKey::Product));
        assert_eq!(mapping.column_for(FieldKey::Product), None);
    }
}
