use crate::backend::BackendSettings;
use crate::theme::Theme;

/// Validated configuration the rest of the application runs on.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) backend: BackendSettings,
    pub(crate) initial_title: Option<String>,
    pub(crate) theme: Theme,
}
