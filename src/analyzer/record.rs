//! Analysis Record
//!
//! Aggregate result of one analysis run. Every section renders to text;
//! sections that found nothing render as their placeholder marker (or empty
//! text for the code profile and README) rather than disappearing.

use serde::Serialize;

use super::profiler::CodeProfile;
use super::scanner::config_scanner::{ConfigFinding, render_findings};
use super::spec_finder::{SpecBlock, render_specs};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    /// Depth-bounded tree rendering
    pub structure: String,
    /// Full README content; truncation is the assembler's job
    pub readme: Option<String>,
    #[serde(flatten)]
    pub profile: CodeProfile,
    #[serde(serialize_with = "serialize_specs")]
    pub api_specs: Vec<SpecBlock>,
    #[serde(serialize_with = "serialize_config")]
    pub config_files: Vec<ConfigFinding>,
}

impl AnalysisRecord {
    /// API specification report, or the placeholder
    pub fn api_specs_text(&self) -> String {
        render_specs(&self.api_specs)
    }

    /// Code analysis insight lines; empty when nothing was detected
    pub fn code_analysis_text(&self) -> String {
        self.profile.render()
    }

    /// Configuration report lines, or the placeholder line
    pub fn config_lines(&self) -> Vec<String> {
        render_findings(&self.config_files)
    }

    pub fn config_text(&self) -> String {
        self.config_lines().join("\n")
    }

    /// Comma-separated dependency summary
    pub fn dependency_summary(&self) -> String {
        self.profile.dependencies.join(", ")
    }
}

fn serialize_specs<S: serde::Serializer>(
    blocks: &[SpecBlock],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(blocks.iter().map(SpecBlock::render))
}

fn serialize_config<S: serde::Serializer>(
    findings: &[ConfigFinding],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(render_findings(findings))
}
