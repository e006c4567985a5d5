//! Logging initialisation via tracing-subscriber.
//!
//! The TUI owns the terminal, so log output goes to a file in the platform
//! data directory. `JOBSCOUT_LOG` controls the filter (default `info`).

use std::fs;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::app_dirs;

const LOG_ENV: &str = "JOBSCOUT_LOG";
const LOG_FILE: &str = "jobscout.log";

/// Initialise the global tracing subscriber. Call once at startup, after
/// settings are resolved.
pub(crate) fn initialize() -> Result<()> {
    let dir = app_dirs::data_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(BoxMakeWriter::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to set tracing subscriber: {err}"))?;

    Ok(())
}
