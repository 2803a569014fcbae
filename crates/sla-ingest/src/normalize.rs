//! Header and cell normalization plus synonym-driven mapping suggestion.

use std::collections::BTreeMap;

use sla_model::FieldKey;

/// Canonical form of a header name: lowercase, runs of non-alphanumerics
/// collapsed to a single `_`, leading/trailing `_` stripped.
pub fn normalize_header(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !normalized.is_empty() {
                normalized.push('_');
            }
            pending_separator = false;
            normalized.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    normalized
}

/// Canonical form of a cell for lookup purposes: spreadsheet line-break
/// artifacts and repeated whitespace collapse to single spaces; trimmed.
pub fn normalize_cell(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized header -> original header. First occurrence wins so duplicate
/// columns resolve deterministically.
pub fn build_normalized_header_map(headers: &[String]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for header in headers {
        let normalized = normalize_header(header);
        if !normalized.is_empty() {
            map.entry(normalized).or_insert_with(|| header.clone());
        }
    }
    map
}

/// Known spellings for each semantic field, matched after normalization.
fn synonyms_for(key: FieldKey) -> &'static [&'static str] {
    match key {
        FieldKey::OrderDate => &[
            "order date",
            "order_date",
            "orderdate",
            "order_dt",
            "order created",
        ],
        FieldKey::ShippingDate => &[
            "ship date",
            "shipping date",
            "shipping_date",
            "shipped date",
            "ship_dt",
        ],
        FieldKey::RequiredArrivalDate => &[
            "required arrival date",
            "required_arrival_date",
            "sla date",
            "sla target date",
            "delivery deadline",
        ],
        FieldKey::Status => &["status", "shipment status", "order status"],
        FieldKey::Method => &[
            "method",
            "shipping method",
            "ship method",
            "service level",
        ],
        FieldKey::Product => &["product", "product group", "sku", "item", "product_line"],
        FieldKey::DestinationCountry => &[
            "destination country",
            "country",
            "ship country",
            "destination",
        ],
        FieldKey::OrderId => &["order id", "order_id", "order number", "order no", "order"],
        FieldKey::Customer => &["customer", "customer name", "client"],
    }
}

/// Suggests a partial mapping from the synonym table.
///
/// Pure: takes headers, returns field -> original column name for every
/// field with a recognized synonym. The caller decides how to merge the
/// result (see `FieldMapping::merge_suggestions`, which never overwrites a
/// live explicit choice).
pub fn suggest_mapping(headers: &[String]) -> BTreeMap<FieldKey, String> {
    let normalized_map = build_normalized_header_map(headers);
    let mut suggestions = BTreeMap::new();
    for key in FieldKey::ALL {
        let matched = synonyms_for(key)
            .iter()
            .map(|synonym| normalize_header(synonym))
            .find_map(|synonym| normalized_map.get(&synonym));
        if let Some(column) = matched {
            suggestions.insert(key, column.clone());
        }
    }
    suggestions
}
