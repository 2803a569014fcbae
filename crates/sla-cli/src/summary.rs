use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sla_ingest::HeaderCandidate;
use sla_model::{CalculationResult, FieldKey};

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn print_report(result: &CalculationResult, candidate: &HeaderCandidate, header_row: usize) {
    println!(
        "Header row: {header_row} (detected {} at confidence {:.2})",
        candidate.row_index, candidate.confidence
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Month"),
        header_cell("Shipped"),
        header_cell("On Time"),
        header_cell("Late"),
        header_cell("On-Time Rate"),
        header_cell("Avg Turnover"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_shipped = 0usize;
    let mut total_on_time = 0usize;
    let mut total_late = 0usize;
    for month in &result.monthly {
        total_shipped += month.shipped;
        total_on_time += month.on_time;
        total_late += month.late;
        table.add_row(vec![
            Cell::new(&month.month),
            Cell::new(month.shipped),
            Cell::new(month.on_time),
            Cell::new(month.late),
            Cell::new(format!("{:.1}%", month.on_time_rate * 100.0)),
            Cell::new(
                month
                    .average_turnover
                    .map(|value| format!("{value:.1} d"))
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
    }
    let total_rate = if total_shipped > 0 {
        total_on_time as f64 / total_shipped as f64
    } else {
        0.0
    };
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_shipped).add_attribute(Attribute::Bold),
        Cell::new(total_on_time).add_attribute(Attribute::Bold),
        Cell::new(total_late).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}%", total_rate * 100.0)).add_attribute(Attribute::Bold),
        Cell::new("-").add_attribute(Attribute::Dim),
    ]);
    println!("{table}");

    let quality = &result.quality;
    println!(
        "Rows: {} raw, {} valid, {} included",
        quality.raw_rows, quality.valid_rows, quality.included_rows
    );
    if !quality.exclusions.is_empty() {
        let mut exclusions = Table::new();
        exclusions.set_header(vec![header_cell("Exclusion reason"), header_cell("Rows")]);
        apply_table_style(&mut exclusions);
        align_column(&mut exclusions, 1, CellAlignment::Right);
        for entry in &quality.exclusions {
            exclusions.add_row(vec![
                Cell::new(entry.reason.as_str()),
                Cell::new(entry.count).fg(Color::Yellow),
            ]);
        }
        println!("{exclusions}");
    }
}

pub fn print_inspection(
    candidate: &HeaderCandidate,
    headers: &[String],
    suggestions: &BTreeMap<FieldKey, String>,
) {
    println!(
        "Detected header row {} (confidence {:.2})",
        candidate.row_index, candidate.confidence
    );
    println!("Columns: {}", headers.join(", "));

    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Suggested column")]);
    apply_table_style(&mut table);
    for key in FieldKey::ALL {
        let suggested = suggestions
            .get(&key)
            .map(String::as_str)
            .unwrap_or("-");
        table.add_row(vec![Cell::new(key.as_str()), Cell::new(suggested)]);
    }
    println!("{table}");
}
