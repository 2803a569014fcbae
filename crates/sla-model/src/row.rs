//! Enriched row types: the typed view of a mapped spreadsheet row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reason::ExclusionReason;

/// A row after field mapping, date normalization, and derived-value
/// computation. Built once per run and never mutated afterwards.
///
/// `turnover_days`, `is_on_time`, and `month_key` are derived exactly once
/// here so every downstream consumer sees the same values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRow {
    pub order_date: Option<NaiveDate>,
    pub shipping_date: Option<NaiveDate>,
    pub required_arrival_date: Option<NaiveDate>,
    pub status: String,
    pub method: String,
    pub product: String,
    pub destination_country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Whole days from order to shipment, floored at zero. Absent unless
    /// both dates are present.
    pub turnover_days: Option<i64>,
    /// Tri-state: `Some(true)` on time, `Some(false)` late, `None` unknown.
    pub is_on_time: Option<bool>,
    /// `"YYYY-MM"` bucket derived solely from the shipping date.
    pub month_key: Option<String>,
}

/// An excluded row together with the single reason that removed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedRow {
    pub row: EnrichedRow,
    pub reason: ExclusionReason,
}
