//! OpenAI-Compatible Summarizer
//!
//! Calls a Chat Completions endpoint (`{base_url}/chat/completions`) with a
//! single user message and returns the first choice's content. Works with
//! any OpenAI-compatible host; the default is NVIDIA's integrate API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::{ErrorCategory, ErrorClassifier, LlmError, Summarizer, SummarizerConfig};
use crate::types::Result;

const PROVIDER: &str = "openai-compatible";

/// Chat Completions client with secure API key handling
pub struct OpenAiCompatibleSummarizer {
    /// API key stored securely - never exposed in logs or debug output
    api_key: SecretString,
    base_url: String,
    model: String,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiCompatibleSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatibleSummarizer")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl OpenAiCompatibleSummarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::with_provider(
                ErrorCategory::Auth,
                "API key is empty",
                PROVIDER,
            )
            .into());
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                LlmError::with_provider(
                    ErrorCategory::Unknown,
                    format!("Failed to create HTTP client: {}", e),
                    PROVIDER,
                )
            })?;

        Ok(Self {
            api_key: SecretString::from(config.api_key),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            temperature: config.temperature,
            top_p: config.top_p,
            max_tokens: config.max_tokens,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
            stream: false,
        }
    }
}

/// First non-empty choice content, or an error
fn extract_content(body: ChatCompletionResponse) -> Result<String> {
    body.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| {
            LlmError::with_provider(
                ErrorCategory::Unknown,
                "No content in completion response",
                PROVIDER,
            )
            .into()
        })
}

#[async_trait]
impl Summarizer for OpenAiCompatibleSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        info!(
            "Generating with {} (model: {}, temperature: {})",
            self.base_url, self.model, self.temperature
        );

        let start_time = Instant::now();
        let request = self.build_request(prompt);

        debug!(prompt_chars = prompt.chars().count(), "Sending completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ErrorClassifier::classify(&format!("Request failed: {}", e), PROVIDER))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ErrorClassifier::classify_status(status, &body, PROVIDER).into());
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            LlmError::with_provider(
                ErrorCategory::Unknown,
                format!("Failed to parse completion response: {}", e),
                PROVIDER,
            )
        })?;

        if let Some(usage) = &body.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Token usage"
            );
        }

        let content = extract_content(body)?;
        info!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            chars = content.chars().count(),
            "Documentation generated"
        );

        Ok(content)
    }

    fn name(&self) -> &str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<UsageInfo>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageInfo {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;
    use crate::types::DocError;

    fn summarizer() -> OpenAiCompatibleSummarizer {
        let mut config = SummarizerConfig::from_llm_config(&LlmConfig::default(), "nvapi-test");
        config.base_url = "https://example.invalid/v1/".to_string();
        OpenAiCompatibleSummarizer::new(config).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let request = summarizer().build_request("Describe this repo");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "openai/gpt-oss-120b");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Describe this repo");
        assert_eq!(json["top_p"], 1.0);
        assert_eq!(json["max_tokens"], 40960);
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        assert_eq!(
            summarizer().endpoint(),
            "https://example.invalid/v1/chat/completions"
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        let config = SummarizerConfig::from_llm_config(&LlmConfig::default(), "  ");
        let err = OpenAiCompatibleSummarizer::new(config).unwrap_err();
        match err {
            DocError::Llm(e) => assert_eq!(e.category, ErrorCategory::Auth),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", summarizer());
        assert!(!debug.contains("nvapi-test"));
    }

    #[test]
    fn test_extract_content() {
        let body: ChatCompletionResponse = serde_json::from_str(
            r##"{"choices":[{"message":{"role":"assistant","content":"# Docs"}}],"usage":{"prompt_tokens":10,"completion_tokens":2}}"##,
        )
        .unwrap();
        assert_eq!(extract_content(body).unwrap(), "# Docs");

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(extract_content(empty).is_err());

        let null: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(extract_content(null).is_err());
    }
}
