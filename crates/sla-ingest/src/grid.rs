//! Raw grid acquisition.
//!
//! The pipeline itself never touches the filesystem; `read_csv_grid` is the
//! collaborator that turns a CSV file into the in-memory grid the rest of
//! the workspace consumes.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use sha2::Digest;
use tracing::debug;

use sla_model::CellValue;

/// An immutable two-dimensional grid of untyped scalar cells.
///
/// Row indices are preserved exactly as read so header detection and
/// user-facing row numbers line up with the source sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Hex SHA-256 over the stringified cell content.
    ///
    /// Serves as the sheet-identity component of a run signature: two grids
    /// with identical content share a digest regardless of where they came
    /// from.
    pub fn digest(&self) -> String {
        let mut hasher = sha2::Sha256::new();
        for row in &self.rows {
            for cell in row {
                hasher.update(cell.to_text().as_bytes());
                hasher.update([0u8]);
            }
            hasher.update([b'\n']);
        }
        hex::encode(hasher.finalize())
    }
}

/// Coerces one CSV field into a typed cell.
///
/// CSV carries no type information, so numeric and boolean text is promoted
/// the way a spreadsheet reader would. Date-looking strings stay text: the
/// date normalizer downstream owns that interpretation.
fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    if let Ok(number) = trimmed.parse::<f64>() {
        if number.is_finite() {
            return CellValue::Number(number);
        }
    }
    CellValue::Text(trimmed.to_string())
}

/// Reads a CSV file into a grid, preserving row order and ragged widths.
pub fn read_csv_grid(path: &Path) -> Result<SheetGrid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        rows.push(record.iter().map(parse_cell).collect());
    }
    debug!(rows = rows.len(), path = %path.display(), "loaded csv grid");
    Ok(SheetGrid::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_coercion_promotes_numbers_and_booleans() {
        assert_eq!(parse_cell("45000"), CellValue::Number(45000.0));
        assert_eq!(parse_cell("TRUE"), CellValue::Bool(true));
        assert_eq!(parse_cell(""), CellValue::Empty);
        assert_eq!(parse_cell(" Air "), CellValue::Text("Air".to_string()));
        // Dates stay text for the normalizer to interpret.
        assert_eq!(
            parse_cell("2024-03-05"),
            CellValue::Text("2024-03-05".to_string())
        );
    }

    #[test]
    fn digest_is_content_addressed() {
        let a = SheetGrid::new(vec![vec![CellValue::from("x"), CellValue::Number(1.0)]]);
        let b = SheetGrid::new(vec![vec![CellValue::from("x"), CellValue::Number(1.0)]]);
        let c = SheetGrid::new(vec![vec![CellValue::from("y"), CellValue::Number(1.0)]]);
        assert_eq!(a.digest(), b.digest());
        assert_ne!(a.digest(), c.digest());
    }
}
