//! File-backed tracing setup.
//!
//! The terminal is owned by the UI, so log lines go to `log_path` instead of
//! stdout. `RUST_LOG` overrides the default filter.

use crate::error::TuiError;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "astroview_tui=info,astroview_core=info";

pub fn init_logging(log_path: &Path) -> Result<(), TuiError> {
    let file = open_log_file(log_path)?;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))?;

    tracing::info!(log_path = %log_path.display(), "Logging initialized");
    Ok(())
}

/// Open `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File, TuiError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
