use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::info;

use sla_cli::config::{RunConfig, load_run_config};
use sla_cli::presets::{Preset, find_preset, load_presets, save_preset};
use sla_core::calculate_metrics;
use sla_ingest::{detect_header_row, map_rows, read_csv_grid, suggest_mapping};

use crate::cli::{InspectArgs, ReportArgs};
use crate::export::write_monthly_csv;
use crate::summary::{print_inspection, print_report};

fn presets_path(args: &ReportArgs) -> PathBuf {
    args.presets_file.clone().unwrap_or_else(|| {
        args.sheet
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("presets.json")
    })
}

fn effective_config(args: &ReportArgs) -> Result<RunConfig> {
    if let Some(path) = &args.config {
        return load_run_config(path);
    }
    if let Some(name) = &args.preset {
        let path = presets_path(args);
        let presets = load_presets(&path)?;
        let Some(preset) = find_preset(&presets, name) else {
            bail!("preset '{name}' not found in {}", path.display());
        };
        return Ok(preset.config.clone());
    }
    Ok(RunConfig::default())
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let grid = read_csv_grid(&args.sheet)?;
    let candidate = detect_header_row(&grid, args.max_scan);
    let header_row = args.header_row.unwrap_or(candidate.row_index);
    let mapped = map_rows(&grid, header_row);

    let mut config = effective_config(args)?;
    let suggestions = suggest_mapping(&mapped.headers);
    config
        .mapping
        .merge_suggestions(&suggestions, &mapped.headers);

    info!(
        sheet = %args.sheet.display(),
        header_row,
        rows = mapped.rows.len(),
        "running report"
    );
    let result = calculate_metrics(&mapped.rows, &config.mapping, &config.rules, &config.filters);

    if let Some(name) = &args.save_preset {
        let path = presets_path(args);
        save_preset(&path, Preset::new(name.clone(), config.clone()))?;
        info!(preset = name.as_str(), path = %path.display(), "saved preset");
    }

    if let Some(path) = &args.export_monthly {
        write_monthly_csv(path, &result.monthly)?;
    }

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&result).context("serialize calculation result")?;
        println!("{rendered}");
    } else {
        print_report(&result, &candidate, header_row);
    }
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let grid = read_csv_grid(&args.sheet)?;
    let candidate = detect_header_row(&grid, args.max_scan);
    let mapped = map_rows(&grid, candidate.row_index);
    let suggestions = suggest_mapping(&mapped.headers);
    print_inspection(&candidate, &mapped.headers, &suggestions);
    Ok(())
}
