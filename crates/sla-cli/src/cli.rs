//! CLI argument definitions for the SLA reporter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sla-report",
    version,
    about = "Shipment SLA metrics from spreadsheet exports",
    long_about = "Ingest a raw CSV export, detect its header row, map columns onto\n\
                  shipment fields, classify every row against rules and filters,\n\
                  and aggregate the included rows into per-month service-level\n\
                  metrics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline and print the monthly report.
    Report(ReportArgs),

    /// Show the detected header row and suggested field mapping.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the CSV sheet to ingest.
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,

    /// Zero-based header row, overriding auto-detection.
    #[arg(long = "header-row", value_name = "N")]
    pub header_row: Option<usize>,

    /// Number of leading rows scanned during header detection.
    #[arg(long = "max-scan", value_name = "N", default_value_t = 20)]
    pub max_scan: usize,

    /// JSON run config `{mapping, rules, filters}`; every part optional.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use a named preset from the presets file.
    #[arg(long = "preset", value_name = "NAME", conflicts_with = "config")]
    pub preset: Option<String>,

    /// Presets file (default: presets.json next to the sheet).
    #[arg(long = "presets-file", value_name = "FILE")]
    pub presets_file: Option<PathBuf>,

    /// Save the effective configuration under this preset name.
    #[arg(long = "save-preset", value_name = "NAME")]
    pub save_preset: Option<String>,

    /// Emit the full calculation result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Write the monthly summary as CSV to this path.
    #[arg(long = "export-monthly", value_name = "FILE")]
    pub export_monthly: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the CSV sheet to inspect.
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,

    /// Number of leading rows scanned during header detection.
    #[arg(long = "max-scan", value_name = "N", default_value_t = 20)]
    pub max_scan: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
