//! CSV export of the monthly summary table.

use std::path::Path;

use anyhow::{Context, Result};

use sla_model::MonthlySummary;

pub fn write_monthly_csv(path: &Path, monthly: &[MonthlySummary]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create export: {}", path.display()))?;
    writer
        .write_record([
            "Month",
            "Shipped",
            "On Time",
            "Late",
            "On-Time Rate",
            "Avg Turnover (days)",
        ])
        .context("write export header")?;
    for month in monthly {
        writer
            .write_record([
                month.month.clone(),
                month.shipped.to_string(),
                month.on_time.to_string(),
                month.late.to_string(),
                format!("{:.3}", month.on_time_rate),
                month
                    .average_turnover
                    .map(|value| format!("{value:.1}"))
                    .unwrap_or_default(),
            ])
            .with_context(|| format!("write export row: {}", month.month))?;
    }
    writer.flush().context("flush export")?;
    Ok(())
}
