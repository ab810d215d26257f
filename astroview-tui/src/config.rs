//! Configuration loading for the AstroView TUI.
//!
//! The config file is optional; every field has a default. The access
//! credential is never read from the file, only from `NASA_API_KEY`.

use crate::theme::SynthBruteTheme;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "ASTROVIEW_CONFIG";
pub const API_KEY_ENV: &str = "NASA_API_KEY";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    pub api_base_url: String,
    pub rover: String,
    /// Per-request timeout. Unset means requests may wait indefinitely.
    pub request_timeout_ms: Option<u64>,
    pub tick_rate_ms: u64,
    pub log_path: PathBuf,
    pub theme: ThemeConfig,
    #[serde(skip)]
    pub credentials: ApiCredentials,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.nasa.gov".to_string(),
            rover: "curiosity".to_string(),
            request_timeout_ms: None,
            tick_rate_ms: 250,
            log_path: PathBuf::from("astroview.log"),
            theme: ThemeConfig::default(),
            credentials: ApiCredentials::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "synthbrute".to_string(),
        }
    }
}

/// Access credential for the upstream API. `Debug` never prints the key.
#[derive(Clone, Default)]
pub struct ApiCredentials {
    pub api_key: String,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| ConfigError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing API key (set NASA_API_KEY)")]
    MissingApiKey,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    /// Load from `--config <path>` or `ASTROVIEW_CONFIG` when given, falling
    /// back to defaults, then attach the credential from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let mut config = match path {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.credentials = ApiCredentials::from_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credentials.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        if self.rover.trim().is_empty() || !self.rover.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidValue {
                field: "rover",
                reason: "must be a non-empty alphanumeric rover name".to_string(),
            });
        }
        if self.request_timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0 when set".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if SynthBruteTheme::by_name(&self.theme.name).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'synthbrute' is supported".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
