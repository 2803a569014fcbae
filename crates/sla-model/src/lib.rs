pub mod cell;
pub mod config;
pub mod error;
pub mod fields;
pub mod mapping;
pub mod reason;
pub mod result;
pub mod row;

pub use cell::CellValue;
pub use config::{FiltersConfig, RulesConfig};
pub use error::{ModelError, Result};
pub use fields::FieldKey;
pub use mapping::FieldMapping;
pub use reason::ExclusionReason;
pub use result::{CalculationResult, ExclusionCount, MonthlySummary, QualityMetrics};
pub use row::{EnrichedRow, ExcludedRow};
