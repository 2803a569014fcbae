//! Heuristic header-row detection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::SheetGrid;
use crate::normalize::normalize_header;

/// Default number of leading rows scanned for a header.
pub const DEFAULT_MAX_SCAN: usize = 20;

/// Best-guess header row with its detection score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCandidate {
    pub row_index: usize,
    /// Distinct nonempty normalized names over row width, in `[0, 1]`.
    pub confidence: f64,
}

/// Scores the first `max_scan` rows and returns the most header-like one.
///
/// Only string-typed cells count as candidate names; rows yielding zero
/// distinct names are skipped. Highest confidence wins, first occurrence
/// wins ties. Deterministic, no side effects.
pub fn detect_header_row(grid: &SheetGrid, max_scan: usize) -> HeaderCandidate {
    let mut best = HeaderCandidate {
        row_index: 0,
        confidence: 0.0,
    };
    for (index, row) in grid.rows().iter().take(max_scan).enumerate() {
        let distinct: BTreeSet<String> = row
            .iter()
            .filter_map(|cell| cell.as_str())
            .map(normalize_header)
            .filter(|name| !name.is_empty())
            .collect();
        if distinct.is_empty() {
            continue;
        }
        let score = distinct.len() as f64 / row.len().max(1) as f64;
        if score > best.confidence {
            best = HeaderCandidate {
                row_index: index,
                confidence: (score * 100.0).round() / 100.0,
            };
        }
    }
    debug!(
        row_index = best.row_index,
        confidence = best.confidence,
        "detected header row"
    );
    best
}

#[cfg(test)]
mod tests {
    use sla_model::CellValue;

    use super::*;

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|cell| CellValue::from(*cell)).collect()
    }

    #[test]
    fn picks_the_densest_name_row() {
        let grid = SheetGrid::new(vec![
            text_row(&["Shipment report", "", ""]),
            text_row(&["Order Date", "Ship Date", "Status"]),
            vec![
                CellValue::Number(45000.0),
                CellValue::Number(45004.0),
                CellValue::from("Shipped"),
            ],
        ]);
        let candidate = detect_header_row(&grid, DEFAULT_MAX_SCAN);
        assert_eq!(candidate.row_index, 1);
        assert_eq!(candidate.confidence, 1.0);
    }

    #[test]
    fn numeric_rows_contribute_no_names() {
        let grid = SheetGrid::new(vec![
            vec![CellValue::Number(1.0), CellValue::Number(2.0)],
            text_row(&["A", "B"]),
        ]);
        assert_eq!(detect_header_row(&grid, DEFAULT_MAX_SCAN).row_index, 1);
    }

    #[test]
    fn first_row_wins_ties_and_empty_grid_defaults_to_zero() {
        let grid = SheetGrid::new(vec![text_row(&["A", "B"]), text_row(&["C", "D"])]);
        assert_eq!(detect_header_row(&grid, DEFAULT_MAX_SCAN).row_index, 0);

        let empty = SheetGrid::default();
        let candidate = detect_header_row(&empty, DEFAULT_MAX_SCAN);
        assert_eq!(candidate.row_index, 0);
        assert_eq!(candidate.confidence, 0.0);
    }

    #[test]
    fn honors_the_scan_window() {
        let mut rows = vec![vec![CellValue::Empty, CellValue::Empty]; 3];
        rows.push(text_row(&["A", "B"]));
        let grid = SheetGrid::new(rows);
        // The header lies outside a 2-row scan window.
        assert_eq!(detect_header_row(&grid, 2).confidence, 0.0);
        assert_eq!(detect_header_row(&grid, 4).row_index, 3);
    }

    #[test]
    fn duplicate_names_lower_confidence() {
        let grid = SheetGrid::new(vec![text_row(&["Status", "status", "Method", ""])]);
        let candidate = detect_header_row(&grid, DEFAULT_MAX_SCAN);
        assert_eq!(candidate.row_index, 0);
        assert_eq!(candidate.confidence, 0.5);
    }
}
