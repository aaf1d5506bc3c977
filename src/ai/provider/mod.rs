//! Summarizer Abstraction
//!
//! Defines the `Summarizer` trait: prompt text in, generated document out.
//! The generator only depends on this trait, so the HTTP client can be
//! swapped for a test double.

mod openai;

pub use openai::OpenAiCompatibleSummarizer;

// Re-export error types from centralized location
pub use crate::types::{ErrorCategory, ErrorClassifier, LlmError};

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::LlmConfig;
use crate::types::Result;

/// Shared summarizer handle
pub type SharedSummarizer = Arc<dyn Summarizer>;

// =============================================================================
// Summarizer Configuration
// =============================================================================

/// Everything a summarizer needs, passed in explicitly.
///
/// The API key is redacted in debug output and converted to a
/// `SecretString` by the client.
#[derive(Clone)]
pub struct SummarizerConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    pub api_key: String,
}

impl SummarizerConfig {
    /// Build from the endpoint settings and an already-resolved key
    pub fn from_llm_config(llm: &LlmConfig, api_key: impl Into<String>) -> Self {
        Self {
            base_url: llm.base_url.clone(),
            model: llm.model.clone(),
            temperature: llm.temperature,
            top_p: llm.top_p,
            max_tokens: llm.max_tokens,
            timeout_secs: llm.timeout_secs,
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Summarizer Trait
// =============================================================================

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Send one prompt and return the generated text
    async fn summarize(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;
}

/// Create the default HTTP summarizer from configuration
pub fn create_summarizer(config: SummarizerConfig) -> Result<SharedSummarizer> {
    Ok(Arc::new(OpenAiCompatibleSummarizer::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_llm_settings() {
        let llm = LlmConfig::default();
        let config = SummarizerConfig::from_llm_config(&llm, "nvapi-123");

        assert_eq!(config.base_url, llm.base_url);
        assert_eq!(config.model, "openai/gpt-oss-120b");
        assert_eq!(config.max_tokens, 40960);
        assert_eq!(config.api_key, "nvapi-123");
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = SummarizerConfig::from_llm_config(&LlmConfig::default(), "nvapi-123");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("nvapi-123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
