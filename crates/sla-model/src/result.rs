//! Aggregated calculation output: monthly metrics and the quality report.

use serde::{Deserialize, Serialize};

use crate::reason::ExclusionReason;
use crate::row::{EnrichedRow, ExcludedRow};

/// Per-month shipment service-level metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// `"YYYY-MM"` bucket key.
    pub month: String,
    pub shipped: usize,
    pub on_time: usize,
    pub late: usize,
    /// `on_time / shipped`, 0 when the month is empty.
    pub on_time_rate: f64,
    /// Mean turnover in days rounded to one decimal; absent when no row in
    /// the month carries a turnover value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_turnover: Option<f64>,
}

/// One exclusion reason with its batch-wide count, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionCount {
    pub reason: ExclusionReason,
    pub count: usize,
}

/// Row-count accounting for a single run.
///
/// `valid_rows` applies only the structural checks (required fields and
/// parseable dates); `included_rows` additionally applies the business
/// rules and filters. Keeping both distinguishes unusable data from data
/// that was intentionally filtered out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub raw_rows: usize,
    pub valid_rows: usize,
    pub included_rows: usize,
    pub exclusions: Vec<ExclusionCount>,
}

/// Immutable snapshot of one full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Monthly summaries sorted ascending by month key.
    pub monthly: Vec<MonthlySummary>,
    /// The rows that made it into the metrics.
    pub rows: Vec<EnrichedRow>,
    pub quality: QualityMetrics,
    pub excluded_rows: Vec<ExcludedRow>,
}
