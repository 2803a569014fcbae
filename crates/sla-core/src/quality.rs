//! Row-count and exclusion-reason accounting, accumulated during the
//! classification pass.

use sla_model::{ExclusionCount, ExclusionReason, QualityMetrics};

/// Tallies raw/valid/included counts and per-reason exclusion frequencies.
///
/// Reasons are reported in first-seen order, matching the order rows fell
/// out of the batch.
#[derive(Debug, Default)]
pub struct QualityTracker {
    raw_rows: usize,
    valid_rows: usize,
    included_rows: usize,
    exclusions: Vec<ExclusionCount>,
}

impl QualityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_raw(&mut self) {
        self.raw_rows += 1;
    }

    pub fn record_valid(&mut self) {
        self.valid_rows += 1;
    }

    pub fn record_included(&mut self) {
        self.included_rows += 1;
    }

    pub fn record_exclusion(&mut self, reason: ExclusionReason) {
        match self
            .exclusions
            .iter_mut()
            .find(|entry| entry.reason == reason)
        {
            Some(entry) => entry.count += 1,
            None => self.exclusions.push(ExclusionCount { reason, count: 1 }),
        }
    }

    pub fn into_metrics(self) -> QualityMetrics {
        QualityMetrics {
            raw_rows: self.raw_rows,
            valid_rows: self.valid_rows,
            included_rows: self.included_rows,
            exclusions: self.exclusions,
        }
    }
}
