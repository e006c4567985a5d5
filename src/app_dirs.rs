//! Platform directories for configuration and logs.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "JOBSCOUT_CONFIG_DIR";
const DATA_DIR_ENV: &str = "JOBSCOUT_DATA_DIR";

/// Configuration directory consulted for `config.toml`. The
/// `JOBSCOUT_CONFIG_DIR` environment variable overrides the platform default.
pub(crate) fn config_dir() -> Result<PathBuf> {
    resolve(CONFIG_DIR_ENV, |dirs| dirs.config_local_dir().to_path_buf())
}

/// Data directory holding the log file. Overridable via `JOBSCOUT_DATA_DIR`.
pub(crate) fn data_dir() -> Result<PathBuf> {
    resolve(DATA_DIR_ENV, |dirs| dirs.data_local_dir().to_path_buf())
}

fn resolve(env_name: &str, select: fn(&ProjectDirs) -> PathBuf) -> Result<PathBuf> {
    // An empty value is treated the same as unset so that shell defaults like
    // ${JOBSCOUT_CONFIG_DIR:-} stay harmless.
    if let Some(value) = env::var_os(env_name)
        && !value.is_empty()
    {
        return Ok(PathBuf::from(value));
    }

    ProjectDirs::from("io", "jobscout", "jobscout")
        .map(|dirs| select(&dirs))
        .ok_or_else(|| anyhow!("unable to determine project directories for jobscout"))
}
