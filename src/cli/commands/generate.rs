//! Generate Command
//!
//! Clone a repository, analyze it, and write generated documentation.
//!
//! Usage:
//!   docweave generate <GIT_URL> [-o FILE] [--api-key KEY] [--base-url URL] [--model M]

use std::path::PathBuf;

use crate::ai::{SummarizerConfig, create_summarizer};
use crate::cli::Output;
use crate::config::{Config, ConfigLoader};
use crate::constants::llm::API_KEY_ENV_VARS;
use crate::constants::output::PREVIEW_CHARS;
use crate::generator::DocGenerator;
use crate::types::{DocError, Result};

/// Options for a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub url: String,
    pub output: Option<PathBuf>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub verbose: bool,
}

pub async fn run(options: GenerateOptions) -> Result<PathBuf> {
    let out = Output::new();
    let config = apply_overrides(ConfigLoader::load()?, &options)?;

    let api_key = ConfigLoader::resolve_api_key(&config, options.api_key.as_deref())
        .ok_or_else(|| {
            DocError::Config(format!(
                "API key is required. Set {} in .env or the environment, or pass --api-key",
                API_KEY_ENV_VARS.join(" or ")
            ))
        })?;

    let summarizer = create_summarizer(SummarizerConfig::from_llm_config(&config.llm, api_key))?;
    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| DocGenerator::default_output_path(&options.url));

    out.info(&format!("Analyzing repository: {}", options.url));

    let generator = DocGenerator::new(summarizer, config.analysis);
    let document = generator
        .generate_from_git(&options.url, Some(&output_path))
        .await?;

    out.success(&format!(
        "Documentation generated: {}",
        output_path.display()
    ));

    if options.verbose {
        out.section(&format!("Preview (first {} chars)", PREVIEW_CHARS));
        out.preview(&document, PREVIEW_CHARS);
    }

    Ok(output_path)
}

/// Fold command-line endpoint overrides into the loaded configuration
fn apply_overrides(mut config: Config, options: &GenerateOptions) -> Result<Config> {
    if let Some(base_url) = &options.base_url {
        config.llm.base_url = base_url.clone();
    }
    if let Some(model) = &options.model {
        config.llm.model = model.clone();
    }
    config.validate()?;
    Ok(config)
}
