//! The fixed vocabulary of exclusion reasons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a row was withheld from the metrics.
///
/// Variants are listed in rule-evaluation priority order; a row carries the
/// first reason it fails, never more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExclusionReason {
    #[serde(rename = "Missing required fields")]
    MissingRequiredFields,
    #[serde(rename = "Unparseable or missing dates")]
    UnparseableDates,
    #[serde(rename = "Status mismatch")]
    StatusMismatch,
    #[serde(rename = "Excluded country")]
    ExcludedCountry,
    #[serde(rename = "Filtered out by method")]
    FilteredByMethod,
    #[serde(rename = "Filtered out by product")]
    FilteredByProduct,
    #[serde(rename = "Filtered out by month")]
    FilteredByMonth,
    #[serde(rename = "Missing shipping month")]
    MissingShippingMonth,
}

impl ExclusionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequiredFields => "Missing required fields",
            Self::UnparseableDates => "Unparseable or missing dates",
            Self::StatusMismatch => "Status mismatch",
            Self::ExcludedCountry => "Excluded country",
            Self::FilteredByMethod => "Filtered out by method",
            Self::FilteredByProduct => "Filtered out by product",
            Self::FilteredByMonth => "Filtered out by month",
            Self::MissingShippingMonth => "Missing shipping month",
        }
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&ExclusionReason::ExcludedCountry).unwrap();
        assert_eq!(json, "\"Excluded country\"");
        let round: ExclusionReason = serde_json::from_str(&json).unwrap();
        assert_eq!(round, ExclusionReason::ExcludedCountry);
    }
}
