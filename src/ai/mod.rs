//! AI Integration Layer
//!
//! Prompt construction and the summarizer that turns an assembled
//! repository context into a documentation draft.

pub mod prompt;
pub mod provider;

pub use prompt::{PromptBuilder, PromptSection, documentation_prompt};
pub use provider::{
    ErrorCategory, ErrorClassifier, LlmError, OpenAiCompatibleSummarizer, SharedSummarizer,
    Summarizer, SummarizerConfig, create_summarizer,
};
