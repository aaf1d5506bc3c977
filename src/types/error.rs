//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Categories
//!
//! Failures of the summarizer endpoint are classified so the CLI can tell an
//! authentication problem apart from a transient one:
//!
//! - **RateLimit**: API rate limiting (wait and retry)
//! - **Auth**: Authentication failures (fail fast)
//! - **Network**: Connectivity issues (retry with backoff)
//! - **Unavailable**: Endpoint unavailable
//! - **BadRequest**: The request itself was rejected
//!
//! The repository analyzers never produce errors: unreadable or malformed
//! files are skipped where they are found. Only the collaborators around them
//! (clone, summarizer, configuration, output writing) return `DocError`.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// Error categories for summarizer failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rate limited - wait then retry
    RateLimit,
    /// Authentication failed - fail fast, don't retry
    Auth,
    /// Network/connectivity issues - retry with backoff
    Network,
    /// Endpoint unavailable or model missing
    Unavailable,
    /// Invalid request - don't retry, fix request
    BadRequest,
    /// Temporary server issues
    Transient,
    /// Unknown error
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RateLimit => write!(f, "RATE_LIMIT"),
            Self::Auth => write!(f, "AUTH"),
            Self::Network => write!(f, "NETWORK"),
            Self::Unavailable => write!(f, "UNAVAILABLE"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::Transient => write!(f, "TRANSIENT"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl ErrorCategory {
    /// Short hint shown to the user alongside the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Auth => Some(
                "check the API key (--api-key, DOCWEAVE_API_KEY, NVIDIA_API_KEY or OPENAI_API_KEY)",
            ),
            Self::RateLimit => Some("the endpoint is rate limiting requests, try again later"),
            Self::Network => Some("check network connectivity and --base-url"),
            Self::Unavailable => Some("the endpoint or model is unavailable, check --model"),
            _ => None,
        }
    }
}

// =============================================================================
// LLM Error
// =============================================================================

/// Summarizer error with category and provider context
#[derive(Debug, Clone)]
pub struct LlmError {
    /// Error category for routing decisions
    pub category: ErrorCategory,
    /// Detailed error message
    pub message: String,
    /// Provider that produced the error
    pub provider: Option<String>,
}

impl std::fmt::Display for LlmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(provider) = &self.provider {
            write!(f, "[{}:{}] {}", provider, self.category, self.message)
        } else {
            write!(f, "[{}] {}", self.category, self.message)
        }
    }
}

impl std::error::Error for LlmError {}

impl LlmError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            provider: None,
        }
    }

    pub fn with_provider(
        category: ErrorCategory,
        message: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            provider: Some(provider.into()),
        }
    }
}

// =============================================================================
// Error Classifier
// =============================================================================

/// Maps HTTP status codes and error text onto an `ErrorCategory`
pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Classify a failed HTTP response
    pub fn classify_status(status: u16, body: &str, provider: &str) -> LlmError {
        let category = match status {
            401 | 403 => ErrorCategory::Auth,
            429 => ErrorCategory::RateLimit,
            400 | 413 | 422 => ErrorCategory::BadRequest,
            404 | 502 | 503 => ErrorCategory::Unavailable,
            500 | 504 => ErrorCategory::Transient,
            _ => return Self::classify(&format!("HTTP {}: {}", status, body), provider),
        };
        LlmError::with_provider(category, format!("HTTP {}: {}", status, body), provider)
    }

    /// Classify an error message with no status code attached
    pub fn classify(message: &str, provider: &str) -> LlmError {
        let lower = message.to_lowercase();

        let category = if lower.contains("rate limit") || lower.contains("too many requests") {
            ErrorCategory::RateLimit
        } else if lower.contains("unauthorized")
            || lower.contains("api key")
            || lower.contains("permission denied")
        {
            ErrorCategory::Auth
        } else if lower.contains("connection")
            || lower.contains("dns")
            || lower.contains("timed out")
            || lower.contains("timeout")
        {
            ErrorCategory::Network
        } else if lower.contains("service unavailable") || lower.contains("not found") {
            ErrorCategory::Unavailable
        } else if lower.contains("bad request") || lower.contains("invalid") {
            ErrorCategory::BadRequest
        } else if lower.contains("overloaded") || lower.contains("temporarily") {
            ErrorCategory::Transient
        } else {
            ErrorCategory::Unknown
        };

        LlmError::with_provider(category, message, provider)
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Error, Debug)]
pub enum DocError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Collaborator Errors
    // -------------------------------------------------------------------------
    #[error("Failed to clone repository {url}: {reason}")]
    Clone { url: String, reason: String },

    #[error("Failed to generate documentation: {0}")]
    Llm(LlmError),

    #[error("Failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),
}

impl From<LlmError> for DocError {
    fn from(err: LlmError) -> Self {
        DocError::Llm(err)
    }
}

impl DocError {
    /// Hint for the user, if the error has an actionable fix
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            DocError::Llm(err) => err.category.hint(),
            DocError::Clone { .. } => Some("check that git is installed and the URL is reachable"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::RateLimit.to_string(), "RATE_LIMIT");
        assert_eq!(ErrorCategory::Auth.to_string(), "AUTH");
        assert_eq!(ErrorCategory::BadRequest.to_string(), "BAD_REQUEST");
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(
            ErrorClassifier::classify_status(401, "nope", "openai").category,
            ErrorCategory::Auth
        );
        assert_eq!(
            ErrorClassifier::classify_status(429, "", "openai").category,
            ErrorCategory::RateLimit
        );
        assert_eq!(
            ErrorClassifier::classify_status(503, "", "openai").category,
            ErrorCategory::Unavailable
        );
    }

    #[test]
    fn test_classify_unknown_status_falls_back_to_message() {
        let err = ErrorClassifier::classify_status(418, "connection reset by peer", "openai");
        assert_eq!(err.category, ErrorCategory::Network);
        assert_eq!(err.provider.as_deref(), Some("openai"));
    }

    #[test]
    fn test_classify_message() {
        let err = ErrorClassifier::classify("Invalid API key provided", "openai");
        assert_eq!(err.category, ErrorCategory::Auth);

        let err = ErrorClassifier::classify("something odd", "openai");
        assert_eq!(err.category, ErrorCategory::Unknown);
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::with_provider(ErrorCategory::Auth, "denied", "openai");
        assert_eq!(err.to_string(), "[openai:AUTH] denied");

        let err = LlmError::new(ErrorCategory::Unknown, "odd");
        assert_eq!(err.to_string(), "[UNKNOWN] odd");
    }

    #[test]
    fn test_doc_error_hint() {
        let err = DocError::from(LlmError::new(ErrorCategory::Auth, "denied"));
        assert!(err.hint().is_some());
        assert!(DocError::Config("x".into()).hint().is_none());
    }
}
