//! Integration tests for CSV -> grid -> mapped rows.

use std::io::Write;

use sla_ingest::{detect_header_row, map_rows, read_csv_grid, suggest_mapping};
use sla_model::{CellValue, FieldKey};

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(content.as_bytes()).expect("write csv");
    file
}

#[test]
fn loads_a_sheet_with_a_preamble_row() {
    let file = write_csv(
        "Shipment export,,\n\
         Order Date,Ship Date,Status\n\
         2024-01-01,2024-01-05,Shipped\n\
         ,,\n\
         2024-01-02,2024-01-06,Cancelled\n",
    );
    let grid = read_csv_grid(file.path()).expect("read grid");
    assert_eq!(grid.len(), 5);

    let candidate = detect_header_row(&grid, 20);
    assert_eq!(candidate.row_index, 1);

    let mapped = map_rows(&grid, candidate.row_index);
    assert_eq!(mapped.headers, vec!["Order Date", "Ship Date", "Status"]);
    assert_eq!(mapped.rows.len(), 2);
    assert_eq!(
        mapped.rows[1].normalized.get("status"),
        Some(&"Cancelled".to_string())
    );

    let suggestions = suggest_mapping(&mapped.headers);
    assert_eq!(
        suggestions.get(&FieldKey::OrderDate),
        Some(&"Order Date".to_string())
    );
    assert_eq!(
        suggestions.get(&FieldKey::ShippingDate),
        Some(&"Ship Date".to_string())
    );
    assert_eq!(
        suggestions.get(&FieldKey::Status),
        Some(&"Status".to_string())
    );
}

#[test]
fn numeric_cells_come_back_typed() {
    let file = write_csv("Order Id,Serial\nORD-1,45000\n");
    let grid = read_csv_grid(file.path()).expect("read grid");
    assert_eq!(grid.row(1).unwrap()[1], CellValue::Number(45000.0));
    assert_eq!(grid.row(1).unwrap()[0], CellValue::Text("ORD-1".to_string()));
}

#[test]
fn missing_file_reports_context() {
    let error = read_csv_grid(std::path::Path::new("/nonexistent/sheet.csv"))
        .expect_err("missing file must fail");
    assert!(error.to_string().contains("read csv"));
}
