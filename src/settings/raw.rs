use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use serde::Deserialize;
use url::Url;

use crate::backend::BackendSettings;
use crate::cli::CliArgs;
use crate::theme::{self, Theme};

use super::resolved::ResolvedConfig;

const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    backend: BackendSection,
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BackendSection {
    origin: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    title: Option<String>,
    theme: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(origin) = &cli.backend {
            self.backend.origin = Some(origin.clone());
        }
        if let Some(timeout) = cli.timeout {
            self.backend.timeout_secs = Some(timeout);
        }
        if let Some(title) = &cli.title {
            self.ui.title = Some(title.clone());
        }
        if let Some(theme) = &cli.theme {
            self.ui.theme = Some(theme.clone());
        }
    }

    /// Validate the raw values and fill defaults where required.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let origin_raw = self
            .backend
            .origin
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let origin = Url::parse(&origin_raw)
            .map_err(|err| anyhow!("invalid backend origin '{origin_raw}': {err}"))?;
        ensure!(
            matches!(origin.scheme(), "http" | "https"),
            "backend origin must use http or https"
        );

        let timeout_secs = self.backend.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        ensure!(timeout_secs > 0, "timeout must be greater than zero");

        let theme = match &self.ui.theme {
            Some(name) => {
                theme::by_name(name).ok_or_else(|| anyhow!("unknown theme: {name}"))?
            }
            None => Theme::default(),
        };

        Ok(ResolvedConfig {
            backend: BackendSettings {
                origin,
                timeout: Duration::from_secs(timeout_secs),
            },
            initial_title: self.ui.title,
            theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn empty_raw_config_resolves_to_defaults() {
        let resolved = RawConfig::default().resolve().expect("resolves");
        assert_eq!(resolved.backend.origin.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(resolved.backend.timeout, Duration::from_secs(30));
        assert!(resolved.initial_title.is_none());
    }

    #[test]
    fn cli_overrides_replace_file_values() {
        let mut raw = RawConfig {
            backend: BackendSection {
                origin: Some("http://config-host:1234".into()),
                timeout_secs: Some(5),
            },
            ui: UiSection::default(),
        };
        let cli = CliArgs::try_parse_from([
            "jobscout",
            "--backend",
            "https://cli-host:9999",
            "--timeout",
            "10",
            "-t",
            "Software Engineer",
        ])
        .expect("parses");

        raw.apply_cli_overrides(&cli);
        let resolved = raw.resolve().expect("resolves");
        assert_eq!(resolved.backend.origin.as_str(), "https://cli-host:9999/");
        assert_eq!(resolved.backend.timeout, Duration::from_secs(10));
        assert_eq!(resolved.initial_title.as_deref(), Some("Software Engineer"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let raw = RawConfig {
            backend: BackendSection {
                origin: None,
                timeout_secs: Some(0),
            },
            ui: UiSection::default(),
        };
        assert!(raw.resolve().is_err());
    }

    #[test]
    fn non_http_origin_is_rejected() {
        let raw = RawConfig {
            backend: BackendSection {
                origin: Some("ftp://example.com".into()),
                timeout_secs: None,
            },
            ui: UiSection::default(),
        };
        assert!(raw.resolve().is_err());
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let raw = RawConfig {
            backend: BackendSection::default(),
            ui: UiSection {
                title: None,
                theme: Some("neon".into()),
            },
        };
        assert!(raw.resolve().is_err());
    }
}
