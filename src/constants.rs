//! Global Constants
//!
//! Centralized constants for the analyzers and the summarizer.
//! The filename tables are closed vocabularies: output order follows the
//! order declared here, not filesystem iteration order.

/// Repository analysis constants
pub mod analysis {
    /// Default depth of the rendered directory tree
    pub const DEFAULT_MAX_DEPTH: usize = 3;

    /// README characters kept in the assembled context
    pub const README_MAX_CHARS: usize = 2000;

    /// Suffix appended to the README excerpt
    pub const README_ELLIPSIS: &str = "...";

    /// README variants probed at the repository root, first match wins
    pub const README_CANDIDATES: &[&str] = &["README.md", "README.rst", "README.txt", "README"];

    /// Directory names excluded from the structure tree
    pub const STRUCTURE_SKIP_DIRS: &[&str] = &["node_modules", "__pycache__", "venv", "env"];
}

/// Manifest and configuration filenames
pub mod manifest {
    pub const PACKAGE_JSON: &str = "package.json";
    pub const REQUIREMENTS_TXT: &str = "requirements.txt";
    pub const SETUP_PY: &str = "setup.py";

    /// Root-level configuration files, in report order
    pub const CONFIG_FILES: &[&str] = &[
        "config.json",
        "config.yaml",
        "config.yml",
        ".env.example",
        ".env.template",
        "docker-compose.yml",
        "docker-compose.yaml",
        "Dockerfile",
        "Makefile",
        PACKAGE_JSON,
        REQUIREMENTS_TXT,
        SETUP_PY,
        "pom.xml",
        "build.gradle",
        "go.mod",
        "Cargo.toml",
    ];

    /// Root-level entry point filenames, in report order
    pub const ENTRY_POINTS: &[&str] = &[
        "main.py",
        "app.py",
        "server.py",
        "index.js",
        "main.js",
        "app.js",
        "server.js",
        "main.go",
        "main.java",
        "Program.cs",
    ];

    /// Number of script names reported from package.json
    pub const MAX_SCRIPTS: usize = 3;

    /// Marker that identifies a packaged setup.py
    pub const SETUP_PY_MARKER: &str = "python_requires";

    /// Dependencies taken from each manifest
    pub const DEPS_PER_MANIFEST: usize = 5;

    /// Dependencies reported in total
    pub const MAX_DEPENDENCIES: usize = 10;
}

/// API specification discovery constants
pub mod specs {
    /// Name keywords marking an OpenAPI document (matched case-insensitively)
    pub const OPENAPI_KEYWORDS: &[&str] = &["openapi", "swagger"];

    /// Extensions an OpenAPI document may have
    pub const OPENAPI_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

    /// GraphQL schema extensions
    pub const GRAPHQL_EXTENSIONS: &[&str] = &["graphql", "gql"];

    /// Directory name keywords marking API documentation
    pub const DOC_DIR_KEYWORDS: &[&str] = &["api", "docs"];

    /// Sample endpoint paths listed per OpenAPI document
    pub const SAMPLE_ENDPOINTS: usize = 3;
}

/// Placeholder markers for sections that found nothing
pub mod placeholder {
    pub const NO_CONFIG_FILES: &str = "No configuration files found";
    pub const NO_API_SPECS: &str = "No API specifications found";
}

/// Summarizer constants
pub mod llm {
    pub const DEFAULT_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";
    pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_TOP_P: f32 = 1.0;
    pub const DEFAULT_MAX_TOKENS: u32 = 40960;

    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

    /// Environment variables consulted for the API key, in order
    pub const API_KEY_ENV_VARS: &[&str] = &["DOCWEAVE_API_KEY", "NVIDIA_API_KEY", "OPENAI_API_KEY"];
}

/// CLI output constants
pub mod output {
    /// Characters of the generated document shown by `--verbose`
    pub const PREVIEW_CHARS: usize = 300;

    /// Suffix of the default output filename
    pub const DEFAULT_OUTPUT_SUFFIX: &str = "_docs.md";
}
