//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/docweave/config.toml)
//! 3. Project config (./.docweave.toml)
//! 4. Environment variables (DOCWEAVE_* prefix, `__` between levels)
//!
//! `.env.local` and `.env` are read into the process environment first, so
//! keys and overrides can live next to the project without being exported.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::constants::llm::API_KEY_ENV_VARS;
use crate::types::{DocError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// dotenv files → defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        Self::load_dotenv();

        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        Self::load_layers(
            global.as_deref(),
            Some(project.as_path()).filter(|p| p.exists()),
        )
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| DocError::Config(format!("Configuration error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn load_layers(global: Option<&Path>, project: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = global {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = project {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(project_path));
        }

        // e.g. DOCWEAVE_LLM__MODEL -> llm.model
        figment = figment.merge(Env::prefixed("DOCWEAVE_").split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| DocError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Read `.env.local` then `.env` from the working directory.
    pub fn load_dotenv() {
        Self::load_dotenv_in(Path::new("."));
    }

    /// Read `.env.local` then `.env` from `dir`.
    ///
    /// Neither overrides variables that are already set, so `.env.local`
    /// wins over `.env` and the real environment wins over both.
    pub fn load_dotenv_in(dir: &Path) {
        for file in [".env.local", ".env"] {
            match dotenvy::from_path(dir.join(file)) {
                Ok(()) => debug!("Loaded environment from {}", dir.join(file).display()),
                Err(e) if e.not_found() => {}
                Err(e) => debug!("Ignoring {}: {}", file, e),
            }
        }
    }

    /// API key from, in order: explicit override, config, then the
    /// `DOCWEAVE_API_KEY`, `NVIDIA_API_KEY` and `OPENAI_API_KEY`
    /// environment variables
    pub fn resolve_api_key(config: &Config, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(String::from)
            .or_else(|| config.llm.api_key.clone())
            .or_else(|| {
                API_KEY_ENV_VARS
                    .iter()
                    .find_map(|var| env::var(var).ok())
            })
            .filter(|key| !key.trim().is_empty())
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/docweave/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("docweave"))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".docweave.toml")
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Show current effective configuration
    pub fn show_config(as_json: bool) -> Result<()> {
        let config = Self::load()?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config).map_err(|e| DocError::Config(e.to_string()))?
            );
        }

        Ok(())
    }

    /// Write a commented default config to the global location
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let global_dir = Self::global_dir().ok_or_else(|| {
            DocError::Config("Cannot determine global config directory".to_string())
        })?;
        fs::create_dir_all(&global_dir)?;

        let config_path = global_dir.join("config.toml");
        if !config_path.exists() || force {
            fs::write(&config_path, Self::default_global_config())?;
            info!("Created global config: {}", config_path.display());
        } else {
            info!("Global config exists: {}", config_path.display());
        }

        Ok(config_path)
    }

    fn default_global_config() -> String {
        r#"# docweave Global Configuration
# Project settings in ./.docweave.toml override these.

version = "1.0"

[analysis]
max_depth = 3
readme_max_chars = 2000

# Summarizer endpoint (OpenAI-compatible chat completions).
# Keep the key in DOCWEAVE_API_KEY / NVIDIA_API_KEY / OPENAI_API_KEY or a .env file.
[llm]
base_url = "https://integrate.api.nvidia.com/v1"
model = "openai/gpt-oss-120b"
temperature = 0.7
top_p = 1.0
max_tokens = 40960
timeout_secs = 300
"#
        .to_string()
    }
}
