use crate::domain::reload::{ReloadSchedule, DEFAULT_RELOAD_INTERVAL_MS};
use crate::domain::switcher::MissingTabPolicy;
use crate::shared::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BoardConfig {
    pub panels: PanelsConfig,
    pub reload: ReloadConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PanelsConfig {
    /// CSS selector matching every panel node.
    pub selector: String,
    /// CSS class that marks the visible panel.
    pub active_class: String,
    pub missing_tab: MissingTabPolicy,
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self {
            selector: ".tab-content".to_string(),
            active_class: "active".to_string(),
            missing_tab: MissingTabPolicy::Clear,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReloadConfig {
    pub enabled: bool,
    pub interval_ms: u32,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: DEFAULT_RELOAD_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Render the Leptos tab bar.
    pub tab_bar: bool,
    /// Element id the tab bar mounts into; falls back to `<body>`.
    pub mount_id: String,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tab_bar: true,
            mount_id: "tab-bar".to_string(),
            log_level: "debug".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[panels]
selector = ".tab-content"
active_class = "active"
missing_tab = "clear"

[reload]
enabled = true
interval_ms = 60000

[ui]
tab_bar = true
mount_id = "tab-bar"
log_level = "debug"
"#;

/// Overrides read from the page URL, e.g. `?reload_ms=5000&missing_tab=keep`.
/// Unknown parameters are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct QueryOverrides {
    pub reload_ms: Option<u32>,
    pub reload: Option<bool>,
    pub missing_tab: Option<MissingTabPolicy>,
}

impl BoardConfig {
    /// Parses and validates a TOML document. Missing keys take their defaults.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies URL query overrides on top of the current values.
    /// On error `self` is left unchanged.
    pub fn apply_query(&mut self, query: &str) -> Result<(), ConfigError> {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Ok(());
        }
        let overrides: QueryOverrides = serde_qs::from_str(query)?;
        let mut next = self.clone();
        if let Some(ms) = overrides.reload_ms {
            next.reload.interval_ms = ms;
        }
        if let Some(enabled) = overrides.reload {
            next.reload.enabled = enabled;
        }
        if let Some(policy) = overrides.missing_tab {
            next.panels.missing_tab = policy;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reload.interval_ms == 0 {
            return Err(ConfigError::ZeroReloadInterval);
        }
        if self.panels.selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector);
        }
        let class = &self.panels.active_class;
        if class.is_empty() || class.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidActiveClass(class.clone()));
        }
        self.log_level()?;
        Ok(())
    }

    pub fn reload_schedule(&self) -> Result<ReloadSchedule, ConfigError> {
        ReloadSchedule::new(self.reload.interval_ms)
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.ui.log_level)
            .map_err(|_| ConfigError::UnknownLogLevel(self.ui.log_level.clone()))
    }
}
