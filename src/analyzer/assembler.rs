//! Context Assembler
//!
//! Runs every analyzer over a checkout and serializes the result into the
//! single text block handed to the summarizer. Sections appear in a fixed
//! order (structure, README, API specs, code analysis, configuration) and are
//! left out when they found nothing.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::frameworks::FrameworkMatcher;
use super::profiler::CodeProfiler;
use super::record::AnalysisRecord;
use super::scanner::{ConfigScanner, FileWalker};
use super::spec_finder::SpecFinder;
use crate::config::AnalysisConfig;
use crate::constants::analysis::README_ELLIPSIS;
use crate::types::{DocError, Result, truncate_chars};

/// Prompt-ready analysis text. Built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledContext(String);

impl AssembledContext {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AssembledContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct ContextAssembler {
    root: PathBuf,
    config: AnalysisConfig,
    matcher: Option<Box<dyn FrameworkMatcher>>,
}

impl ContextAssembler {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config: AnalysisConfig::default(),
            matcher: None,
        }
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different framework matching rule than substring containment
    pub fn with_matcher(mut self, matcher: Box<dyn FrameworkMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Run every analyzer and collect the results.
    ///
    /// Fails only if the root is not a directory.
    pub fn analyze(self) -> Result<AnalysisRecord> {
        if !self.root.is_dir() {
            return Err(DocError::NotADirectory(self.root.display().to_string()));
        }

        info!("Analyzing repository at {}", self.root.display());

        let walker = FileWalker::new(&self.root).with_max_depth(self.config.max_depth);
        let structure = walker.render_structure();
        let readme = walker.find_readme();

        let mut profiler = CodeProfiler::new(&self.root);
        if let Some(matcher) = self.matcher {
            profiler = profiler.with_matcher(matcher);
        }
        let profile = profiler.profile();

        let api_specs = SpecFinder::new(&self.root).find();
        let config_files = ConfigScanner::new(&self.root).findings();

        debug!(
            languages = profile.languages.len(),
            frameworks = profile.frameworks.len(),
            specs = api_specs.len(),
            config_files = config_files.len(),
            "Analysis finished"
        );

        Ok(AnalysisRecord {
            structure,
            readme,
            profile,
            api_specs,
            config_files,
        })
    }

    /// Analyze and serialize in one step
    pub fn assemble(self) -> Result<AssembledContext> {
        let readme_max_chars = self.config.readme_max_chars;
        let record = self.analyze()?;
        Ok(render_context(&record, readme_max_chars))
    }
}

/// Serialize a record into labelled sections joined by blank lines.
///
/// The README is cut to `readme_max_chars` characters and always gets the
/// ellipsis suffix. Sections holding only a placeholder are left out.
pub fn render_context(record: &AnalysisRecord, readme_max_chars: usize) -> AssembledContext {
    let mut parts = Vec::new();

    if !record.structure.is_empty() {
        parts.push(format!("**Project Structure:**\n{}", record.structure));
    }

    if let Some(readme) = record.readme.as_deref().filter(|r| !r.is_empty()) {
        parts.push(format!(
            "**Existing README:**\n{}{}",
            truncate_chars(readme, readme_max_chars),
            README_ELLIPSIS
        ));
    }

    if !record.api_specs.is_empty() {
        parts.push(format!("**API Specifications:**\n{}", record.api_specs_text()));
    }

    let code_analysis = record.code_analysis_text();
    if !code_analysis.is_empty() {
        parts.push(format!("**Code Analysis:**\n{}", code_analysis));
    }

    if !record.config_files.is_empty() {
        parts.push(format!("**Configuration:**\n{}", record.config_text()));
    }

    AssembledContext(parts.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::analysis::README_MAX_CHARS;
    use crate::constants::placeholder::{NO_API_SPECS, NO_CONFIG_FILES};
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn readme_section(context: &str) -> &str {
        let start = context.find("**Existing README:**\n").unwrap() + "**Existing README:**\n".len();
        let rest = &context[start..];
        rest.split("\n\n**").next().unwrap()
    }

    #[test]
    fn test_readme_truncated_to_limit_plus_ellipsis() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "README.md", &"a".repeat(5000));

        let context = ContextAssembler::new(temp.path()).assemble().unwrap();
        let readme = readme_section(context.as_str());

        assert_eq!(readme.chars().count(), README_MAX_CHARS + 3);
        assert!(readme.ends_with("a..."));
    }

    #[test]
    fn test_short_readme_still_gets_ellipsis() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "README", "Short intro");

        let context = ContextAssembler::new(temp.path()).assemble().unwrap();
        assert_eq!(readme_section(context.as_str()), "Short intro...");
    }

    #[test]
    fn test_section_order_and_separators() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "README.md", "# Service");
        write(temp.path(), "openapi.yaml", "info:\n  title: Svc\n  version: '2'\n");
        write(temp.path(), "main.py", "print('hi')");
        write(temp.path(), "requirements.txt", "flask==2.0\n");

        let context = ContextAssembler::new(temp.path()).assemble().unwrap();
        let text = context.as_str();

        let labels = [
            "**Project Structure:**",
            "**Existing README:**",
            "**API Specifications:**",
            "**Code Analysis:**",
            "**Configuration:**",
        ];
        let positions: Vec<usize> = labels.iter().map(|l| text.find(l).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(text.contains("\n\n**Existing README:**\n# Service..."));
        assert!(text.contains("OpenAPI Spec: openapi.yaml\n  Title: Svc, Version: 2"));
        assert!(text.contains("Programming Languages: Python"));
        assert!(text.contains("Frameworks: Flask"));
        assert!(text.contains("Entry Points: main.py"));
        assert!(text.contains("Key Dependencies: flask"));
        assert!(text.ends_with("- requirements.txt\n  Dependencies: 1 packages"));
    }

    #[test]
    fn test_placeholder_sections_left_out() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "notes.txt", "nothing to see");

        let context = ContextAssembler::new(temp.path()).assemble().unwrap();
        let text = context.as_str();

        assert!(text.starts_with("**Project Structure:**\n"));
        assert!(text.ends_with("└── notes.txt"));
        assert!(!text.contains("**Existing README:**"));
        assert!(!text.contains("**API Specifications:**"));
        assert!(!text.contains("**Code Analysis:**"));
        assert!(!text.contains("**Configuration:**"));
        assert!(!text.contains(NO_API_SPECS));
        assert!(!text.contains(NO_CONFIG_FILES));
    }

    #[test]
    fn test_express_scenario_context() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "package.json",
            r#"{"dependencies":{"express":"^4"},"scripts":{"start":"node index.js"},"engines":{"node":">=18"}}"#,
        );
        write(temp.path(), "index.js", "");

        let record = ContextAssembler::new(temp.path()).analyze().unwrap();
        assert_eq!(record.profile.frameworks, vec!["Express"]);
        assert_eq!(record.profile.entry_points, vec!["index.js"]);
        assert_eq!(
            record.config_lines(),
            vec!["- package.json", "  Scripts: start | Node: >=18"]
        );
        assert_eq!(record.dependency_summary(), "express");
    }

    #[test]
    fn test_custom_max_depth() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a/b/c.txt", "");

        let config = AnalysisConfig {
            max_depth: 0,
            ..AnalysisConfig::default()
        };
        let record = ContextAssembler::new(temp.path())
            .with_config(config)
            .analyze()
            .unwrap();
        assert_eq!(record.structure.lines().count(), 2);
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let err = ContextAssembler::new(&missing).assemble().unwrap_err();
        assert!(matches!(err, DocError::NotADirectory(_)));
    }
}
