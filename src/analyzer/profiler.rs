//! Code Profiler
//!
//! Superficial profile of a checkout: languages by file extension, frameworks
//! by manifest text, entry points by filename, and the leading dependencies of
//! the Python and Node manifests. Nothing here parses source code.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::frameworks::{FrameworkMatcher, SubstringMatcher, detect_frameworks};
use super::scanner::config_scanner::requirement_lines;
use super::scanner::{read_text, walk_all};
use crate::constants::manifest::{
    DEPS_PER_MANIFEST, ENTRY_POINTS, MAX_DEPENDENCIES, PACKAGE_JSON, REQUIREMENTS_TXT,
};
use crate::types::json_keys;

/// File extension (without the dot) to language name
pub const LANGUAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("py", "Python"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("java", "Java"),
    ("go", "Go"),
    ("rs", "Rust"),
    ("cpp", "C++"),
    ("c", "C"),
    ("cs", "C#"),
    ("php", "PHP"),
    ("rb", "Ruby"),
];

/// Version specifiers stripped from requirement lines, applied in order
const VERSION_SEPARATORS: &[&str] = &["==", ">=", "~="];

/// Language for a file extension, if it is in the closed table
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    LANGUAGE_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, lang)| *lang)
}

/// Result of profiling a checkout
#[derive(Debug, Clone, Default, Serialize)]
pub struct CodeProfile {
    pub languages: BTreeSet<&'static str>,
    pub frameworks: Vec<String>,
    pub entry_points: Vec<&'static str>,
    pub dependencies: Vec<String>,
}

impl CodeProfile {
    /// Insight lines for the code analysis section; empty parts are omitted
    pub fn render(&self) -> String {
        let mut insights = Vec::new();

        if !self.languages.is_empty() {
            let languages: Vec<&str> = self.languages.iter().copied().collect();
            insights.push(format!("Programming Languages: {}", languages.join(", ")));
        }
        if !self.frameworks.is_empty() {
            insights.push(format!("Frameworks: {}", self.frameworks.join(", ")));
        }
        if !self.entry_points.is_empty() {
            insights.push(format!("Entry Points: {}", self.entry_points.join(", ")));
        }
        if !self.dependencies.is_empty() {
            insights.push(format!("Key Dependencies: {}", self.dependencies.join(", ")));
        }

        insights.join("\n")
    }
}

pub struct CodeProfiler {
    root: PathBuf,
    matcher: Box<dyn FrameworkMatcher>,
}

impl CodeProfiler {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            matcher: Box::new(SubstringMatcher),
        }
    }

    /// Replace the framework matching rule
    pub fn with_matcher(mut self, matcher: Box<dyn FrameworkMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn profile(&self) -> CodeProfile {
        CodeProfile {
            languages: self.detect_languages(),
            frameworks: self.detect_frameworks(),
            entry_points: self.find_entry_points(),
            dependencies: self.dependencies(),
        }
    }

    /// Languages present anywhere in the tree.
    ///
    /// Walks every file, hidden and vendored ones included, with no depth
    /// limit. Unknown extensions contribute nothing.
    pub fn detect_languages(&self) -> BTreeSet<&'static str> {
        walk_all(&self.root)
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter_map(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|e| e.to_str())
                    .and_then(language_for_extension)
            })
            .collect()
    }

    pub fn detect_frameworks(&self) -> Vec<String> {
        detect_frameworks(&self.root, self.matcher.as_ref())
    }

    /// Known entry point filenames present at the root, in table order
    pub fn find_entry_points(&self) -> Vec<&'static str> {
        ENTRY_POINTS
            .iter()
            .copied()
            .filter(|name| self.root.join(name).exists())
            .collect()
    }

    /// Up to five requirement names then up to five package.json
    /// dependencies, at most ten in total
    pub fn dependencies(&self) -> Vec<String> {
        let mut deps = Vec::new();

        let requirements = self.root.join(REQUIREMENTS_TXT);
        if requirements.exists()
            && let Some(content) = read_text(&requirements)
        {
            deps.extend(python_dependencies(&content));
        }

        let package = self.root.join(PACKAGE_JSON);
        if package.exists()
            && let Some(content) = read_text(&package)
        {
            deps.extend(node_dependencies(&content));
        }

        deps.truncate(MAX_DEPENDENCIES);
        deps
    }

    /// Dependency names joined with `", "`; empty when there are none
    pub fn summarize_dependencies(&self) -> String {
        self.dependencies().join(", ")
    }
}

/// First five package names from a requirements file, version pins removed
pub fn python_dependencies(content: &str) -> Vec<String> {
    requirement_lines(content)
        .map(strip_version)
        .take(DEPS_PER_MANIFEST)
        .collect()
}

/// First five keys of package.json `dependencies`; nothing when malformed
pub fn node_dependencies(content: &str) -> Vec<String> {
    let data: serde_json::Value = match serde_json::from_str(content) {
        Ok(data) => data,
        Err(e) => {
            debug!("Skipping dependencies of unparseable {}: {}", PACKAGE_JSON, e);
            return Vec::new();
        }
    };

    let Some(deps) = data.get("dependencies") else {
        return Vec::new();
    };

    json_keys(deps)
        .unwrap_or_default()
        .into_iter()
        .take(DEPS_PER_MANIFEST)
        .collect()
}

fn strip_version(line: &str) -> String {
    VERSION_SEPARATORS
        .iter()
        .fold(line, |name, sep| name.split(sep).next().unwrap_or(name))
        .trim()
        .to_string()
}
