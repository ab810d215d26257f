//! Error types for the TUI.

use crate::api_client::FetchError;
use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] FetchError),
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}
