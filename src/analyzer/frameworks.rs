//! Framework Detection
//!
//! Frameworks are inferred from the text of root-level manifest files.
//! The matching rule sits behind [`FrameworkMatcher`] so a stricter rule
//! (for example, looking tokens up as manifest keys) can replace the default
//! substring test without touching the rest of the pipeline.

use std::path::Path;

use crate::analyzer::scanner::read_text;
use crate::types::title_case;

/// Manifest files and the framework tokens looked for inside each, in scan order
pub const FRAMEWORK_INDICATORS: &[(&str, &[&str])] = &[
    (
        "package.json",
        &["react", "vue", "angular", "express", "fastify", "next"],
    ),
    ("requirements.txt", &["django", "flask", "fastapi", "tornado"]),
    ("pom.xml", &["spring", "hibernate"]),
    ("go.mod", &["gin", "echo", "fiber"]),
    ("Cargo.toml", &["actix", "rocket", "warp"]),
];

/// Decides which candidate tokens a manifest mentions
pub trait FrameworkMatcher: Send + Sync {
    /// Candidates found in `content`, in candidate order
    fn matches<'a>(&self, manifest: &str, content: &str, candidates: &[&'a str]) -> Vec<&'a str>;
}

/// Case-insensitive substring containment.
///
/// Blunt: `"next"` also matches `"nextjs-helper"` or a description that says
/// "next steps".
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl FrameworkMatcher for SubstringMatcher {
    fn matches<'a>(&self, _manifest: &str, content: &str, candidates: &[&'a str]) -> Vec<&'a str> {
        let lower = content.to_lowercase();
        candidates
            .iter()
            .copied()
            .filter(|token| lower.contains(token))
            .collect()
    }
}

/// Title-cased framework names mentioned by the root manifests.
///
/// Manifests are visited in [`FRAMEWORK_INDICATORS`] order. A framework named
/// by two manifests is reported twice.
pub fn detect_frameworks(root: &Path, matcher: &dyn FrameworkMatcher) -> Vec<String> {
    let mut frameworks = Vec::new();

    for (manifest, candidates) in FRAMEWORK_INDICATORS {
        let path = root.join(manifest);
        if !path.exists() {
            continue;
        }
        let Some(content) = read_text(&path) else {
            continue;
        };
        frameworks.extend(
            matcher
                .matches(manifest, &content, candidates)
                .into_iter()
                .map(title_case),
        );
    }

    frameworks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_substring_matcher_is_case_insensitive() {
        let found = SubstringMatcher.matches("package.json", "\"React\": \"18\"", &["react", "vue"]);
        assert_eq!(found, vec!["react"]);
    }

    #[test]
    fn test_detect_frameworks_in_manifest_then_candidate_order() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"dependencies":{"next":"14","react":"18"}}"#,
        )
        .unwrap();
        fs::write(temp.path().join("requirements.txt"), "Django==4.2\n").unwrap();

        let frameworks = detect_frameworks(temp.path(), &SubstringMatcher);
        assert_eq!(frameworks, vec!["React", "Next", "Django"]);
    }

    #[test]
    fn test_detect_frameworks_go_and_rust_manifests() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("go.mod"), "require github.com/gin-gonic/gin v1").unwrap();
        fs::write(temp.path().join("Cargo.toml"), "[dependencies]\nwarp = \"0.3\"\n# gin").unwrap();

        let frameworks = detect_frameworks(temp.path(), &SubstringMatcher);
        assert_eq!(frameworks, vec!["Gin", "Warp"]);
    }

    #[test]
    fn test_detect_frameworks_without_manifests() {
        let temp = TempDir::new().unwrap();
        assert!(detect_frameworks(temp.path(), &SubstringMatcher).is_empty());
    }

    struct NothingMatcher;

    impl FrameworkMatcher for NothingMatcher {
        fn matches<'a>(&self, _: &str, _: &str, _: &[&'a str]) -> Vec<&'a str> {
            Vec::new()
        }
    }

    #[test]
    fn test_detect_frameworks_uses_supplied_matcher() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "flask\n").unwrap();
        assert!(detect_frameworks(temp.path(), &NothingMatcher).is_empty());
    }
}
