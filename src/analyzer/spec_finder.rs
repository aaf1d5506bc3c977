//! API Specification Finder
//!
//! Three independent passes over the whole tree:
//! 1. OpenAPI/Swagger documents (by name keyword and extension), with a
//!    shallow read of `info` and `paths`
//! 2. GraphQL schema files (by extension)
//! 3. API documentation directories (by name keyword) holding Markdown
//!
//! A document that fails to parse still gets its header line.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::scanner::{read_text, walk_all};
use crate::constants::placeholder::NO_API_SPECS;
use crate::constants::specs::{
    DOC_DIR_KEYWORDS, GRAPHQL_EXTENSIONS, OPENAPI_EXTENSIONS, OPENAPI_KEYWORDS, SAMPLE_ENDPOINTS,
};
use crate::types::{json_display, yaml_display};

/// Kind of specification artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SpecKind {
    OpenApi,
    GraphQl,
    ApiDocs,
}

/// One discovered artifact: a header line plus extracted detail lines
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SpecBlock {
    pub kind: SpecKind,
    pub name: String,
    pub details: Vec<String>,
}

impl SpecBlock {
    pub fn header(&self) -> String {
        match self.kind {
            SpecKind::OpenApi => format!("OpenAPI Spec: {}", self.name),
            SpecKind::GraphQl => format!("GraphQL Schema: {}", self.name),
            SpecKind::ApiDocs => format!("API Documentation: {}/", self.name),
        }
    }

    pub fn render(&self) -> String {
        std::iter::once(self.header())
            .chain(self.details.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render blocks as the API specification report, or the placeholder
pub fn render_specs(blocks: &[SpecBlock]) -> String {
    if blocks.is_empty() {
        return NO_API_SPECS.to_string();
    }
    blocks
        .iter()
        .map(SpecBlock::render)
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct SpecFinder {
    root: PathBuf,
}

impl SpecFinder {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// All artifacts: OpenAPI documents, then GraphQL schemas, then doc folders
    pub fn find(&self) -> Vec<SpecBlock> {
        let mut blocks = self.find_openapi();
        blocks.extend(self.find_graphql());
        blocks.extend(self.find_doc_dirs());
        blocks
    }

    /// Report text for every artifact found, or the placeholder
    pub fn find_api_specs(&self) -> String {
        render_specs(&self.find())
    }

    fn find_openapi(&self) -> Vec<SpecBlock> {
        walk_all(&self.root)
            .filter(|entry| {
                let name = entry.file_name().to_string_lossy().to_lowercase();
                OPENAPI_KEYWORDS.iter().any(|k| name.contains(k))
                    && has_extension(entry.path(), OPENAPI_EXTENSIONS)
            })
            .map(|entry| SpecBlock {
                kind: SpecKind::OpenApi,
                name: entry.file_name().to_string_lossy().into_owned(),
                details: extract_openapi_info(entry.path()).unwrap_or_default(),
            })
            .collect()
    }

    fn find_graphql(&self) -> Vec<SpecBlock> {
        walk_all(&self.root)
            .filter(|entry| has_extension(entry.path(), GRAPHQL_EXTENSIONS))
            .map(|entry| SpecBlock {
                kind: SpecKind::GraphQl,
                name: entry.file_name().to_string_lossy().into_owned(),
                details: Vec::new(),
            })
            .collect()
    }

    fn find_doc_dirs(&self) -> Vec<SpecBlock> {
        walk_all(&self.root)
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_dir()))
            .filter(|entry| {
                let name = entry.file_name().to_string_lossy();
                DOC_DIR_KEYWORDS.iter().any(|k| name.contains(k))
            })
            .filter(|entry| contains_markdown(entry.path()))
            .map(|entry| SpecBlock {
                kind: SpecKind::ApiDocs,
                name: entry.file_name().to_string_lossy().into_owned(),
                details: Vec::new(),
            })
            .collect()
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}

fn contains_markdown(dir: &Path) -> bool {
    walk_all(dir).any(|entry| has_extension(entry.path(), &["md"]))
}

// =============================================================================
// OpenAPI Extraction
// =============================================================================

/// A parsed specification document, JSON or YAML by file extension
enum SpecDocument {
    Json(serde_json::Value),
    Yaml(serde_yaml::Value),
}

/// Shallow facts read from an OpenAPI document
#[derive(Debug, Default)]
struct OpenApiSummary {
    title_version: Option<(String, String)>,
    path_keys: Option<Vec<String>>,
}

impl SpecDocument {
    fn parse(path: &Path, content: &str) -> Option<Self> {
        let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
        let parsed = if is_json {
            serde_json::from_str(content).map(SpecDocument::Json).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(content).map(SpecDocument::Yaml).map_err(|e| e.to_string())
        };
        match parsed {
            Ok(doc) => Some(doc),
            Err(e) => {
                debug!("Unparseable spec {}: {}", path.display(), e);
                None
            }
        }
    }

    /// `None` when the document or its `info`/`paths` sections have the
    /// wrong shape
    fn summarize(&self) -> Option<OpenApiSummary> {
        match self {
            SpecDocument::Json(value) => {
                let root = value.as_object()?;
                let mut summary = OpenApiSummary::default();
                if let Some(info) = root.get("info") {
                    let info = info.as_object()?;
                    let field = |key: &str| {
                        info.get(key)
                            .map(json_display)
                            .unwrap_or_else(|| "Unknown".to_string())
                    };
                    summary.title_version = Some((field("title"), field("version")));
                }
                if let Some(paths) = root.get("paths") {
                    summary.path_keys = Some(paths.as_object()?.keys().cloned().collect());
                }
                Some(summary)
            }
            SpecDocument::Yaml(value) => {
                let root = value.as_mapping()?;
                let mut summary = OpenApiSummary::default();
                if let Some(info) = root.get("info") {
                    let info = info.as_mapping()?;
                    let field = |key: &str| {
                        info.get(key)
                            .map(yaml_display)
                            .unwrap_or_else(|| "Unknown".to_string())
                    };
                    summary.title_version = Some((field("title"), field("version")));
                }
                if let Some(paths) = root.get("paths") {
                    summary.path_keys = Some(
                        paths
                            .as_mapping()?
                            .keys()
                            .map(yaml_display)
                            .collect(),
                    );
                }
                Some(summary)
            }
        }
    }
}

/// Detail lines for an OpenAPI document, `None` when it cannot be read
fn extract_openapi_info(path: &Path) -> Option<Vec<String>> {
    let content = read_text(path)?;
    let summary = SpecDocument::parse(path, &content)?.summarize()?;

    let mut lines = Vec::new();
    if let Some((title, version)) = summary.title_version {
        lines.push(format!("  Title: {}, Version: {}", title, version));
    }
    if let Some(keys) = summary.path_keys {
        lines.push(format!("  Endpoints: {}", keys.len()));
        if !keys.is_empty() {
            let sample: Vec<&str> = keys.iter().take(SAMPLE_ENDPOINTS).map(String::as_str).collect();
            lines.push(format!("  Sample endpoints: {}", sample.join(", ")));
        }
    }
    Some(lines)
}
