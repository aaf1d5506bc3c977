//! Documentation Generator
//!
//! End-to-end pipeline: optional clone, repository analysis, prompt
//! construction, summarization, and writing the resulting document.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::ai::{SharedSummarizer, documentation_prompt};
use crate::analyzer::ContextAssembler;
use crate::config::AnalysisConfig;
use crate::constants::output::DEFAULT_OUTPUT_SUFFIX;
use crate::repo::{clone_to_temp, repo_name_from_url};
use crate::types::{DocError, Result};

pub struct DocGenerator {
    summarizer: SharedSummarizer,
    analysis: AnalysisConfig,
}

impl DocGenerator {
    pub fn new(summarizer: SharedSummarizer, analysis: AnalysisConfig) -> Self {
        Self {
            summarizer,
            analysis,
        }
    }

    /// Analyze a local checkout and return the generated document
    pub async fn generate_from_path(&self, repo_path: &Path) -> Result<String> {
        let context = ContextAssembler::new(repo_path)
            .with_config(self.analysis.clone())
            .assemble()?;

        let prompt = documentation_prompt(context.as_str());
        info!(
            summarizer = self.summarizer.name(),
            model = self.summarizer.model(),
            context_chars = context.as_str().chars().count(),
            "Requesting documentation"
        );

        self.summarizer.summarize(&prompt).await
    }

    /// Clone `url`, generate its documentation, and optionally write it out.
    ///
    /// The checkout is removed before returning, on success or failure.
    pub async fn generate_from_git(&self, url: &str, output: Option<&Path>) -> Result<String> {
        let checkout = clone_to_temp(url).await?;
        let document = self.generate_from_path(checkout.path()).await?;
        drop(checkout);

        if let Some(path) = output {
            write_document(path, &document)?;
            info!("Documentation saved to {}", path.display());
        }

        Ok(document)
    }

    /// `<repo_name>_docs.md` in the working directory
    pub fn default_output_path(url: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", repo_name_from_url(url), DEFAULT_OUTPUT_SUFFIX))
    }
}

/// Write `document` to `path`, creating parent directories
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    let to_output_error = |source| DocError::Output {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_output_error)?;
    }
    fs::write(path, document).map_err(to_output_error)
}
