//! The full calculation pass plus signature-keyed memoization.

use std::sync::Arc;

use sha2::Digest;
use tracing::{debug, info};

use sla_ingest::{ParsedRow, SheetGrid, map_rows};
use sla_model::{
    CalculationResult, EnrichedRow, ExcludedRow, FieldMapping, FiltersConfig, RulesConfig,
};

use crate::enrich::enrich_row;
use crate::metrics::build_monthly_summary;
use crate::quality::QualityTracker;
use crate::rules::{exclusion_for, passes_structural_checks};

/// Runs the classification and aggregation pass over parsed rows.
///
/// Pure and single-pass: every row is enriched once, classified once, and
/// lands in exactly one of the included or excluded sets. No row failure
/// aborts the batch.
pub fn calculate_metrics(
    rows: &[ParsedRow],
    mapping: &FieldMapping,
    rules: &RulesConfig,
    filters: &FiltersConfig,
) -> CalculationResult {
    let mut tracker = QualityTracker::new();
    let mut included: Vec<EnrichedRow> = Vec::new();
    let mut excluded: Vec<ExcludedRow> = Vec::new();

    for row in rows {
        tracker.record_raw();
        let enriched = enrich_row(row, mapping);
        if passes_structural_checks(&enriched, mapping) {
            tracker.record_valid();
        }
        match exclusion_for(&enriched, mapping, rules, filters) {
            Some(reason) => {
                tracker.record_exclusion(reason);
                excluded.push(ExcludedRow {
                    row: enriched,
                    reason,
                });
            }
            None => {
                tracker.record_included();
                included.push(enriched);
            }
        }
    }

    let monthly = build_monthly_summary(&included);
    info!(
        raw = rows.len(),
        included = included.len(),
        excluded = excluded.len(),
        months = monthly.len(),
        "calculated shipment metrics"
    );

    CalculationResult {
        monthly,
        rows: included,
        quality: tracker.into_metrics(),
        excluded_rows: excluded,
    }
}

/// Structural signature of one run's inputs.
///
/// Two runs share a signature exactly when sheet content, header-row
/// choice, mapping, rules, and filters all agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSignature(String);

impl RunSignature {
    pub fn compute(
        sheet_digest: &str,
        header_row_index: usize,
        mapping: &FieldMapping,
        rules: &RulesConfig,
        filters: &FiltersConfig,
    ) -> Self {
        let mut hasher = sha2::Sha256::new();
        hasher.update(sheet_digest.as_bytes());
        hasher.update(header_row_index.to_le_bytes());
        hasher.update(serde_json::to_vec(mapping).unwrap_or_default());
        hasher.update(serde_json::to_vec(rules).unwrap_or_default());
        hasher.update(serde_json::to_vec(filters).unwrap_or_default());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Memoizing front door for the pipeline.
///
/// Caches the last result behind an `Arc`, keyed by `RunSignature`; a
/// repeated trigger with unchanged inputs returns the cached snapshot
/// without recomputing. Any input change invalidates the whole cache; there
/// is no partial recomputation.
#[derive(Debug, Default)]
pub struct Calculator {
    last: Option<(RunSignature, Arc<CalculationResult>)>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(
        &mut self,
        grid: &SheetGrid,
        header_row_index: usize,
        mapping: &FieldMapping,
        rules: &RulesConfig,
        filters: &FiltersConfig,
    ) -> Arc<CalculationResult> {
        let signature =
            RunSignature::compute(&grid.digest(), header_row_index, mapping, rules, filters);
        if let Some((cached_signature, cached)) = &self.last {
            if *cached_signature == signature {
                debug!(signature = signature.as_str(), "run signature unchanged, reusing result");
                return Arc::clone(cached);
            }
        }
        debug!(signature = signature.as_str(), "run signature changed, recomputing");
        let mapped = map_rows(grid, header_row_index);
        let result = Arc::new(calculate_metrics(&mapped.rows, mapping, rules, filters));
        self.last = Some((signature, Arc::clone(&result)));
        result
    }
}
