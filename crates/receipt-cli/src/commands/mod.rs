//! CLI subcommands.

pub mod config;
pub mod extract;
pub mod output;
pub mod scan;
pub mod serve;

use std::path::{Path, PathBuf};

use receipt_core::ReceiptConfig;
use tracing::debug;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("receipt")
        .join("config.json")
}

/// Resolve the config file: the `--config` flag wins over the default path.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration, falling back to defaults when no file exists.
///
/// A file named explicitly with `--config` must exist.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<ReceiptConfig> {
    let path = config_path(explicit);

    if explicit.is_some() && !path.exists() {
        anyhow::bail!("Config file not found: {}", path.display());
    }

    load_or_default(&path)
}

fn load_or_default(path: &Path) -> anyhow::Result<ReceiptConfig> {
    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(ReceiptConfig::from_file(path)?)
    } else {
        Ok(ReceiptConfig::default())
    }
}
