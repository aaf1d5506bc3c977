//! docweave - Service Documentation Generator
//!
//! Clones a Git repository, inspects it with lightweight filename and
//! manifest heuristics, and asks an OpenAI-compatible model to write
//! service documentation from the assembled findings.
//!
//! ## Pipeline
//!
//! 1. **FileWalker**: depth-bounded tree rendering and README lookup
//! 2. **ConfigScanner**: known configuration/manifest files with short summaries
//! 3. **CodeProfiler**: languages, frameworks, entry points, dependencies
//! 4. **SpecFinder**: OpenAPI documents, GraphQL schemas, API doc folders
//! 5. **ContextAssembler**: everything above as one prompt-ready text block
//!
//! ## Quick Start
//!
//! ```ignore
//! use docweave::{ContextAssembler, DocGenerator};
//! use docweave::ai::{SummarizerConfig, create_summarizer};
//!
//! let context = ContextAssembler::new("path/to/repo").assemble()?;
//! println!("{}", context);
//!
//! let summarizer = create_summarizer(SummarizerConfig::from_llm_config(&config.llm, key))?;
//! let generator = DocGenerator::new(summarizer, config.analysis);
//! let docs = generator.generate_from_git("https://github.com/acme/api.git", None).await?;
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: repository inspection and context assembly
//! - [`ai`]: prompt construction and the summarizer client
//! - [`repo`]: shallow clones into temporary directories
//! - [`config`]: layered TOML/environment configuration
//! - [`generator`]: end-to-end documentation pipeline

pub mod ai;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod repo;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{AnalysisConfig, Config, ConfigLoader, LlmConfig};

// Error Types
pub use types::error::{DocError, ErrorCategory, LlmError, Result};

// =============================================================================
// Analyzer Re-exports
// =============================================================================

pub use analyzer::{
    AnalysisRecord, AssembledContext, CodeProfile, CodeProfiler, ConfigFinding, ConfigScanner,
    ContextAssembler, FileWalker, SpecBlock, SpecFinder, SpecKind,
};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use ai::{OpenAiCompatibleSummarizer, Summarizer, SummarizerConfig};
pub use generator::DocGenerator;
