use thiserror::Error;

/// Ошибки переключения вкладок
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("tab not found: `{tab_id}`")]
    NotFound { tab_id: String },

    #[error("duplicate panel key: `{key}`")]
    DuplicateKey { key: String },
}

impl TabError {
    pub fn not_found(tab_id: impl Into<String>) -> Self {
        TabError::NotFound {
            tab_id: tab_id.into(),
        }
    }
}

/// Ошибки загрузки и проверки конфигурации
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid query overrides: {0}")]
    Query(#[from] serde_qs::Error),

    #[error("reload interval must be greater than zero")]
    ZeroReloadInterval,

    #[error("panel selector must not be empty")]
    EmptySelector,

    #[error("active class must be a single non-empty CSS class, got `{0}`")]
    InvalidActiveClass(String),

    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
}

/// Ошибки жизненного цикла периодической перезагрузки
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReloadError {
    #[error("periodic reloader is already running")]
    AlreadyRunning,
}
