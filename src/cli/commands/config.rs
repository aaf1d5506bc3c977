//! Config Command
//!
//! Inspect docweave configuration.
//!
//! Usage:
//!   docweave config show [-f toml|json]
//!   docweave config path
//!   docweave config init [--force]

use crate::cli::Output;
use crate::config::ConfigLoader;
use crate::types::{DocError, Result};

/// Show the merged effective configuration
pub fn show(format: &str) -> Result<()> {
    match format {
        "json" => ConfigLoader::show_config(true),
        "toml" => ConfigLoader::show_config(false),
        other => Err(DocError::Config(format!(
            "Unknown format '{}'. Valid values: toml, json",
            other
        ))),
    }
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Write the default global configuration file
pub fn init_global(force: bool) -> Result<()> {
    let config_path = ConfigLoader::init_global(force)?;
    Output::new().success("Initialized global configuration");
    println!("  Config: {}", config_path.display());
    Ok(())
}
