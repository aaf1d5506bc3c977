//! Analyze Command
//!
//! Runs the repository analysis offline and prints what would be sent to
//! the summarizer. Needs no API key.

use std::path::PathBuf;

use crate::analyzer::{ContextAssembler, render_context};
use crate::config::{AnalysisConfig, ConfigLoader};
use crate::types::{DocError, Result};

/// Output format for `docweave analyze`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeFormat {
    /// Assembled prompt context
    Text,
    /// Full analysis record
    Json,
}

impl std::str::FromStr for AnalyzeFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format '{}'. Valid values: text, json", s)),
        }
    }
}

pub fn run(path: Option<PathBuf>, format: AnalyzeFormat, max_depth: Option<usize>) -> Result<()> {
    let root = path.unwrap_or_else(|| PathBuf::from("."));
    let mut analysis = ConfigLoader::load()?.analysis;
    if let Some(depth) = max_depth {
        analysis.max_depth = depth;
    }

    println!("{}", render(root, format, analysis)?);
    Ok(())
}

fn render(root: PathBuf, format: AnalyzeFormat, analysis: AnalysisConfig) -> Result<String> {
    let readme_max_chars = analysis.readme_max_chars;
    let record = ContextAssembler::new(&root).with_config(analysis).analyze()?;

    match format {
        AnalyzeFormat::Text => Ok(render_context(&record, readme_max_chars).into_inner()),
        AnalyzeFormat::Json => serde_json::to_string_pretty(&record).map_err(DocError::from),
    }
}
