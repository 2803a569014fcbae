//! Field-mapping-driven row enrichment.
//!
//! Turns a positionally parsed row into its semantic, typed view. All
//! derived values (`turnover_days`, `is_on_time`, `month_key`) are computed
//! here exactly once; consumers read them, never recompute them.

use chrono::NaiveDate;

use sla_ingest::ParsedRow;
use sla_model::{CellValue, EnrichedRow, FieldKey, FieldMapping};

use crate::dates::{format_month_key, normalize_date_value};

/// Raw cell a field maps to, if the field is mapped and the column exists.
///
/// A mapping entry naming a column absent from the row behaves exactly like
/// an unset entry.
fn mapped_cell<'a>(row: &'a ParsedRow, mapping: &FieldMapping, key: FieldKey) -> Option<&'a CellValue> {
    mapping.column_for(key).and_then(|column| row.raw.get(column))
}

fn mapped_date(row: &ParsedRow, mapping: &FieldMapping, key: FieldKey) -> Option<NaiveDate> {
    mapped_cell(row, mapping, key).and_then(normalize_date_value)
}

fn mapped_text(row: &ParsedRow, mapping: &FieldMapping, key: FieldKey) -> String {
    mapped_cell(row, mapping, key)
        .map(|cell| cell.to_text().trim().to_string())
        .unwrap_or_default()
}

fn nonempty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Builds the typed view of one parsed row.
pub fn enrich_row(row: &ParsedRow, mapping: &FieldMapping) -> EnrichedRow {
    let order_date = mapped_date(row, mapping, FieldKey::OrderDate);
    let shipping_date = mapped_date(row, mapping, FieldKey::ShippingDate);
    let required_arrival_date = mapped_date(row, mapping, FieldKey::RequiredArrivalDate);

    let turnover_days = match (order_date, shipping_date) {
        (Some(order), Some(ship)) => Some((ship - order).num_days().max(0)),
        _ => None,
    };
    let is_on_time = match (shipping_date, required_arrival_date) {
        (Some(ship), Some(required)) => Some(ship <= required),
        _ => None,
    };

    EnrichedRow {
        order_date,
        shipping_date,
        required_arrival_date,
        status: mapped_text(row, mapping, FieldKey::Status),
        method: mapped_text(row, mapping, FieldKey::Method),
        product: mapped_text(row, mapping, FieldKey::Product),
        destination_country: mapped_text(row, mapping, FieldKey::DestinationCountry),
        order_id: nonempty(mapped_text(row, mapping, FieldKey::OrderId)),
        customer: nonempty(mapped_text(row, mapping, FieldKey::Customer)),
        turnover_days,
        is_on_time,
        month_key: format_month_key(shipping_date),
    }
}

/// Enriches every parsed row in order.
pub fn enrich_rows(rows: &[ParsedRow], mapping: &FieldMapping) -> Vec<EnrichedRow> {
    rows.iter().map(|row| enrich_row(row, mapping)).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn parsed(entries: &[(&str, CellValue)]) -> ParsedRow {
        let raw: BTreeMap<String, CellValue> = entries
            .iter()
            .map(|(column, cell)| ((*column).to_string(), cell.clone()))
            .collect();
        ParsedRow {
            raw,
            normalized: BTreeMap::new(),
        }
    }

    fn mapping() -> FieldMapping {
        let mut mapping = FieldMapping::new();
        mapping.set(FieldKey::OrderDate, "Order Date");
        mapping.set(FieldKey::ShippingDate, "Ship Date");
        mapping.set(FieldKey::RequiredArrivalDate, "Due Date");
        mapping.set(FieldKey::Status, "Status");
        mapping
    }

    #[test]
    fn derived_values_come_from_the_mapped_dates() {
        let row = parsed(&[
            ("Order Date", CellValue::from("2024-01-01")),
            ("Ship Date", CellValue::from("2024-01-05")),
            ("Due Date", CellValue::from("2024-01-10")),
            ("Status", CellValue::from("Shipped")),
        ]);
        let enriched = enrich_row(&row, &mapping());
        assert_eq!(enriched.turnover_days, Some(4));
        assert_eq!(enriched.is_on_time, Some(true));
        assert_eq!(enriched.month_key, Some("2024-01".to_string()));
        assert_eq!(enriched.status, "Shipped");
    }

    #[test]
    fn turnover_floors_at_zero_when_shipment_predates_the_order() {
        let row = parsed(&[
            ("Order Date", CellValue::from("2024-01-10")),
            ("Ship Date", CellValue::from("2024-01-05")),
        ]);
        let enriched = enrich_row(&row, &mapping());
        assert_eq!(enriched.turnover_days, Some(0));
    }

    #[test]
    fn partial_dates_leave_derived_values_unknown() {
        let row = parsed(&[("Ship Date", CellValue::from("2024-01-05"))]);
        let enriched = enrich_row(&row, &mapping());
        assert_eq!(enriched.turnover_days, None);
        assert_eq!(enriched.is_on_time, None);
        assert_eq!(enriched.month_key, Some("2024-01".to_string()));
    }

    #[test]
    fn mapping_to_a_missing_column_acts_unset() {
        let row = parsed(&[("Ship Date", CellValue::from("2024-01-05"))]);
        let mut mapping = mapping();
        mapping.set(FieldKey::Status, "No Such Column");
        let enriched = enrich_row(&row, &mapping);
        assert_eq!(enriched.status, "");
        assert_eq!(enriched.order_date, None);
    }
}
