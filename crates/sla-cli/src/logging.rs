//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Levels in use across the workspace:
//!
//! - `error`/`warn`: degraded behavior (for example a status regex that did
//!   not compile)
//! - `info`: run summaries and row counts
//! - `debug`: per-stage detail, signature cache hits and misses

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level emitted when no env filter applies.
    pub level_filter: LevelFilter,
    /// Honor `RUST_LOG` when set; the level filter is the fallback.
    pub use_env_filter: bool,
    pub format: LogFormat,
    /// When set, logs go to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            format: LogFormat::default(),
            log_file: None,
            with_ansi: true,
        }
    }
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    if config.use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level_filter.to_string()))
    } else {
        EnvFilter::new(config.level_filter.to_string())
    }
}

/// Installs the global subscriber. Call once, before any tracing output.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = build_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file: {}", path.display()))?;
            let writer = Mutex::new(file);
            match config.format {
                LogFormat::Pretty => registry
                    .with(
                        fmt::layer()
                            .with_writer(writer)
                            .with_ansi(false)
                            .with_target(false),
                    )
                    .try_init()?,
                LogFormat::Compact => registry
                    .with(
                        fmt::layer()
                            .compact()
                            .with_writer(writer)
                            .with_ansi(false)
                            .with_target(false),
                    )
                    .try_init()?,
                LogFormat::Json => registry
                    .with(fmt::layer().json().with_writer(writer))
                    .try_init()?,
            }
        }
        None => match config.format {
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_ansi(config.with_ansi)
                        .with_target(false),
                )
                .try_init()?,
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_writer(io::stderr)
                        .with_ansi(config.with_ansi)
                        .with_target(false),
                )
                .try_init()?,
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(io::stderr))
                .try_init()?,
        },
    }
    Ok(())
}
