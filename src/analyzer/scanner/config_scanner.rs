//! Configuration File Scanner
//!
//! Probes a fixed list of root-level configuration and manifest filenames.
//! Output follows the probe list, so it is identical on every platform
//! regardless of directory iteration order.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::file_walker::read_text;
use crate::constants::manifest::{
    CONFIG_FILES, MAX_SCRIPTS, PACKAGE_JSON, REQUIREMENTS_TXT, SETUP_PY, SETUP_PY_MARKER,
};
use crate::constants::placeholder::NO_CONFIG_FILES;
use crate::types::{json_display, json_keys};

/// One configuration file found at the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFinding {
    pub name: &'static str,
    /// Shallow metadata extracted from the file, if any
    pub info: Option<String>,
}

pub struct ConfigScanner {
    root: PathBuf,
}

impl ConfigScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Known configuration files present at the root, in probe-list order
    pub fn findings(&self) -> Vec<ConfigFinding> {
        CONFIG_FILES
            .iter()
            .filter(|name| self.root.join(name).exists())
            .map(|&name| ConfigFinding {
                name,
                info: self.extract_info(name),
            })
            .collect()
    }

    /// Report lines: `- name` per file, with an indented info line beneath
    /// when metadata was extracted. A single placeholder line when nothing
    /// was found.
    pub fn scan(&self) -> Vec<String> {
        render_findings(&self.findings())
    }

    fn extract_info(&self, name: &str) -> Option<String> {
        let path = self.root.join(name);
        match name {
            PACKAGE_JSON => extract_package_json_info(&read_text(&path)?),
            REQUIREMENTS_TXT => Some(extract_requirements_info(&read_text(&path)?)),
            SETUP_PY => extract_setup_py_info(&read_text(&path)?),
            _ => None,
        }
    }
}

/// Render findings as report lines, substituting the placeholder when empty
pub fn render_findings(findings: &[ConfigFinding]) -> Vec<String> {
    if findings.is_empty() {
        return vec![NO_CONFIG_FILES.to_string()];
    }

    let mut lines = Vec::new();
    for finding in findings {
        lines.push(format!("- {}", finding.name));
        if let Some(info) = &finding.info {
            lines.push(format!("  {}", info));
        }
    }
    lines
}

/// Script names and the Node engine constraint from a package.json.
///
/// Malformed JSON, or a `scripts`/`engines` entry of the wrong shape, yields
/// no info at all.
pub fn extract_package_json_info(content: &str) -> Option<String> {
    let data: serde_json::Value = match serde_json::from_str(content) {
        Ok(data) => data,
        Err(e) => {
            debug!("Unparseable {}: {}", PACKAGE_JSON, e);
            return None;
        }
    };
    let data = data.as_object()?;

    let mut parts = Vec::new();

    if let Some(scripts) = data.get("scripts") {
        let names = json_keys(scripts)?;
        let shown: Vec<&str> = names.iter().take(MAX_SCRIPTS).map(String::as_str).collect();
        parts.push(format!("Scripts: {}", shown.join(", ")));
    }

    if let Some(engines) = data.get("engines") {
        let engines = engines.as_object()?;
        if let Some(node) = engines.get("node") {
            parts.push(format!("Node: {}", json_display(node)));
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}

/// Package count of a requirements file: non-blank, non-comment lines
pub fn extract_requirements_info(content: &str) -> String {
    let count = requirement_lines(content).count();
    format!("Dependencies: {} packages", count)
}

/// Fixed note for a setup.py that declares a Python version requirement
pub fn extract_setup_py_info(content: &str) -> Option<String> {
    content
        .contains(SETUP_PY_MARKER)
        .then(|| "Python package with setup.py".to_string())
}

/// Trimmed requirement lines, skipping blanks and `#` comments
pub(crate) fn requirement_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
