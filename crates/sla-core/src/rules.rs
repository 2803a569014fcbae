//! Ordered rule evaluation.
//!
//! Classification is an explicit decision table: checks run in a fixed
//! priority order and the first failure supplies the row's single exclusion
//! reason. The order is load-bearing and covered by tests.

use regex::RegexBuilder;
use tracing::warn;

use sla_model::{EnrichedRow, ExclusionReason, FieldKey, FieldMapping, FiltersConfig, RulesConfig};

/// True when the status passes the configured matchers.
///
/// The matcher list is a case-insensitive substring check. A configured
/// regex is OR'd in when it compiles; a malformed pattern degrades silently
/// to the list alone.
pub fn match_status(status: &str, rules: &RulesConfig) -> bool {
    let lowered = status.to_lowercase();
    let list_match = rules
        .status_matchers
        .iter()
        .any(|matcher| lowered.contains(&matcher.to_lowercase()));
    let pattern = rules.status_regex.trim();
    if pattern.is_empty() {
        return list_match;
    }
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => regex.is_match(status) || list_match,
        Err(error) => {
            warn!(%error, "status regex did not compile, falling back to matcher list");
            list_match
        }
    }
}

/// Required fields carrying text. Date fields are deliberately not here:
/// an unmapped, blank, or unparseable date is a date problem and reports as
/// one, so the two reasons stay distinguishable in the quality table.
const REQUIRED_TEXT_FIELDS: [FieldKey; 4] = [
    FieldKey::Status,
    FieldKey::Method,
    FieldKey::Product,
    FieldKey::DestinationCountry,
];

fn field_is_blank(row: &EnrichedRow, key: FieldKey) -> bool {
    match key {
        FieldKey::OrderDate => row.order_date.is_none(),
        FieldKey::ShippingDate => row.shipping_date.is_none(),
        FieldKey::RequiredArrivalDate => row.required_arrival_date.is_none(),
        FieldKey::Status => row.status.is_empty(),
        FieldKey::Method => row.method.is_empty(),
        FieldKey::Product => row.product.is_empty(),
        FieldKey::DestinationCountry => row.destination_country.is_empty(),
        FieldKey::OrderId => row.order_id.is_none(),
        FieldKey::Customer => row.customer.is_none(),
    }
}

fn missing_required_field(row: &EnrichedRow, mapping: &FieldMapping) -> bool {
    REQUIRED_TEXT_FIELDS
        .iter()
        .any(|key| !mapping.is_set(*key) || field_is_blank(row, *key))
}

fn missing_dates(row: &EnrichedRow) -> bool {
    row.order_date.is_none()
        || row.shipping_date.is_none()
        || row.required_arrival_date.is_none()
}

/// The structural subset of the checks (required fields, parseable dates).
///
/// Rows passing these count as "valid" regardless of how rules and filters
/// later dispose of them.
pub fn passes_structural_checks(row: &EnrichedRow, mapping: &FieldMapping) -> bool {
    !missing_required_field(row, mapping) && !missing_dates(row)
}

fn month_out_of_range(row: &EnrichedRow, filters: &FiltersConfig) -> bool {
    let Some(month) = row.month_key.as_deref() else {
        // Rows without a month fall through to the terminal check.
        return false;
    };
    let below = filters
        .month_range
        .0
        .as_deref()
        .is_some_and(|lower| month < lower);
    let above = filters
        .month_range
        .1
        .as_deref()
        .is_some_and(|upper| month > upper);
    below || above
}

/// Runs the full decision table and returns the first failing check's
/// reason, or `None` when the row is included.
pub fn exclusion_for(
    row: &EnrichedRow,
    mapping: &FieldMapping,
    rules: &RulesConfig,
    filters: &FiltersConfig,
) -> Option<ExclusionReason> {
    if missing_required_field(row, mapping) {
        return Some(ExclusionReason::MissingRequiredFields);
    }
    if missing_dates(row) {
        return Some(ExclusionReason::UnparseableDates);
    }
    if !match_status(&row.status, rules) {
        return Some(ExclusionReason::StatusMismatch);
    }
    if rules.exclude_china && row.destination_country.to_lowercase().contains("china") {
        return Some(ExclusionReason::ExcludedCountry);
    }
    if !filters.methods.is_empty() && !filters.methods.contains(&row.method) {
        return Some(ExclusionReason::FilteredByMethod);
    }
    if !filters.products.is_empty() && !filters.products.contains(&row.product) {
        return Some(ExclusionReason::FilteredByProduct);
    }
    if month_out_of_range(row, filters) {
        return Some(ExclusionReason::FilteredByMonth);
    }
    if row.month_key.is_none() {
        // Unreachable once the date check has passed; kept as a terminal
        // guard so the invariant holds even if enrichment changes.
        return Some(ExclusionReason::MissingShippingMonth);
    }
    None
}
