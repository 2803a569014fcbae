//! Rule and filter configuration supplied by the caller.

use serde::{Deserialize, Serialize};

/// Business rules applied to every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesConfig {
    /// Exclude rows whose destination country mentions China.
    pub exclude_china: bool,
    /// Case-insensitive substrings; a status matches when any occurs in it.
    pub status_matchers: Vec<String>,
    /// Optional case-insensitive pattern OR'd with the matcher list.
    /// A pattern that fails to compile degrades to the list alone.
    pub status_regex: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            exclude_china: false,
            status_matchers: vec!["shipped".to_string()],
            status_regex: String::new(),
        }
    }
}

/// Allow-list filters narrowing which rows feed the metrics.
///
/// Empty lists and absent bounds mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FiltersConfig {
    pub methods: Vec<String>,
    pub products: Vec<String>,
    /// Inclusive `"YYYY-MM"` bounds, compared lexicographically.
    pub month_range: (Option<String>, Option<String>),
}

impl FiltersConfig {
    pub fn is_unrestricted(&self) -> bool {
        self.methods.is_empty()
            && self.products.is_empty()
            && self.month_range.0.is_none()
            && self.month_range.1.is_none()
    }
}
