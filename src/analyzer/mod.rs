//! Repository Analyzer Module
//!
//! Heuristic, read-only inspection of a repository checkout:
//! - Directory tree rendering and README lookup
//! - Configuration and manifest file detection
//! - Language, framework, entry point and dependency profiling
//! - API specification discovery
//! - Assembly of everything into one prompt-ready context

pub mod assembler;
pub mod frameworks;
pub mod profiler;
pub mod record;
pub mod scanner;
pub mod spec_finder;

pub use assembler::{AssembledContext, ContextAssembler, render_context};
pub use frameworks::{FrameworkMatcher, SubstringMatcher};
pub use profiler::{CodeProfile, CodeProfiler};
pub use record::AnalysisRecord;
pub use scanner::{ConfigFinding, ConfigScanner, FileWalker};
pub use spec_finder::{SpecBlock, SpecFinder, SpecKind};
