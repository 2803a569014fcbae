pub mod grid;
pub mod header;
pub mod normalize;
pub mod rows;

pub use grid::{SheetGrid, read_csv_grid};
pub use header::{HeaderCandidate, detect_header_row};
pub use normalize::{
    build_normalized_header_map, normalize_cell, normalize_header, suggest_mapping,
};
pub use rows::{MappedRows, ParsedRow, extract_headers, map_rows};
