//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod parse;

use std::path::Path;

use akun_core::AkunConfig;
use tracing::debug;

/// Load configuration from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<AkunConfig> {
    if let Some(path) = config_path {
        return Ok(AkunConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Loading configuration from {}", default_path.display());
        Ok(AkunConfig::from_file(&default_path)?)
    } else {
        Ok(AkunConfig::default())
    }
}
