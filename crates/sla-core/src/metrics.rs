//! Monthly aggregation of included rows.

use std::collections::BTreeMap;

use sla_model::{EnrichedRow, MonthlySummary};

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Groups rows by month key and computes per-month service-level counts.
///
/// Rows with an unknown on-time status count toward `shipped` but neither
/// `on_time` nor `late`. Months come back sorted ascending by key, which is
/// chronological for `"YYYY-MM"`.
pub fn build_monthly_summary(rows: &[EnrichedRow]) -> Vec<MonthlySummary> {
    let mut grouped: BTreeMap<&str, Vec<&EnrichedRow>> = BTreeMap::new();
    for row in rows {
        if let Some(month) = row.month_key.as_deref() {
            grouped.entry(month).or_default().push(row);
        }
    }

    grouped
        .into_iter()
        .map(|(month, month_rows)| {
            let shipped = month_rows.len();
            let on_time = month_rows
                .iter()
                .filter(|row| row.is_on_time == Some(true))
                .count();
            let late = month_rows
                .iter()
                .filter(|row| row.is_on_time == Some(false))
                .count();
            let turnovers: Vec<i64> = month_rows
                .iter()
                .filter_map(|row| row.turnover_days)
                .collect();
            let average_turnover = if turnovers.is_empty() {
                None
            } else {
                let mean = turnovers.iter().sum::<i64>() as f64 / turnovers.len() as f64;
                Some(round_one_decimal(mean))
            };
            MonthlySummary {
                month: month.to_string(),
                shipped,
                on_time,
                late,
                on_time_rate: if shipped > 0 {
                    on_time as f64 / shipped as f64
                } else {
                    0.0
                },
                average_turnover,
            }
        })
        .collect()
}
