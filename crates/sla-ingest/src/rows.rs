//! Positional row extraction beneath a chosen header row.

use std::collections::BTreeMap;

use tracing::debug;

use sla_model::CellValue;

use crate::grid::SheetGrid;
use crate::normalize::{build_normalized_header_map, normalize_cell, normalize_header};

/// One data row keyed two ways: by original column name with the raw cell,
/// and by normalized column name with the normalized string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRow {
    pub raw: BTreeMap<String, CellValue>,
    pub normalized: BTreeMap<String, String>,
}

/// Output of slicing a grid at a header row.
#[derive(Debug, Clone, Default)]
pub struct MappedRows {
    /// Ordered column names as they appear in the sheet. Blanks and
    /// duplicates are allowed; the zip against data rows is positional.
    pub headers: Vec<String>,
    /// Normalized header -> original header, first occurrence wins.
    pub normalized_map: BTreeMap<String, String>,
    pub rows: Vec<ParsedRow>,
}

/// Stringified, trimmed column names at `header_row_index`.
pub fn extract_headers(grid: &SheetGrid, header_row_index: usize) -> Vec<String> {
    grid.row(header_row_index)
        .unwrap_or(&[])
        .iter()
        .map(|cell| cell.to_text().trim().to_string())
        .collect()
}

/// Zips every row beneath the header against the header names.
///
/// Rows whose every cell normalizes to empty are dropped entirely; partially
/// blank rows survive and are classified downstream. When a header name
/// repeats, the later column wins the keyed lookup.
pub fn map_rows(grid: &SheetGrid, header_row_index: usize) -> MappedRows {
    let headers = extract_headers(grid, header_row_index);
    let normalized_map = build_normalized_header_map(&headers);

    let mut rows = Vec::new();
    for data_row in grid.rows().iter().skip(header_row_index + 1) {
        let mut raw = BTreeMap::new();
        let mut normalized = BTreeMap::new();
        let mut any_content = false;
        for (index, header) in headers.iter().enumerate() {
            let cell = data_row.get(index).cloned().unwrap_or_default();
            let text = normalize_cell(&cell.to_text());
            if !text.is_empty() {
                any_content = true;
            }
            normalized.insert(normalize_header(header), text);
            raw.insert(header.clone(), cell);
        }
        if any_content {
            rows.push(ParsedRow { raw, normalized });
        }
    }
    debug!(
        headers = headers.len(),
        rows = rows.len(),
        header_row_index,
        "mapped grid rows"
    );
    MappedRows {
        headers,
        normalized_map,
        rows,
    }
}
