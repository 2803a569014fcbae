pub mod dates;
pub mod enrich;
pub mod metrics;
pub mod pipeline;
pub mod quality;
pub mod rules;

pub use dates::{format_month_key, normalize_date_value, parse_date_text, serial_to_date};
pub use enrich::{enrich_row, enrich_rows};
pub use metrics::build_monthly_summary;
pub use pipeline::{Calculator, RunSignature, calculate_metrics};
pub use quality::QualityTracker;
pub use rules::{exclusion_for, match_status, passes_structural_checks};
