//! Model-service access for Grammar Guru.
//!
//! Provides:
//! - the `AiClient` seam and its Gemini implementation
//! - `ChatSession`, the live conversational context with the service
//! - `SessionManager`, which owns at most one session and discards it on
//!   reset or failure
//! - failure classification into user-facing categories

pub mod classify;
pub mod gemini;
pub mod session;

#[cfg(any(test, feature = "test-support"))]
pub mod scripted;

use async_trait::async_trait;

pub use classify::{classify_failure, FailureKind};
pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{ChatSession, ClientFactory, SessionManager, SessionSettings};

#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[ChatMessage]) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API key not configured")]
    CredentialMissing,
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("rate limited")]
    RateLimited,
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("parse error: {0}")]
    ParseError(String),
    #[error("request timed out")]
    Timeout,
}

impl AiError {
    /// User-facing category of this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            AiError::CredentialMissing => FailureKind::CredentialMissing,
            AiError::Auth(_) => FailureKind::Auth,
            AiError::ApiError(signal) | AiError::NetworkError(signal) => classify_failure(signal),
            AiError::RateLimited | AiError::ParseError(_) | AiError::Timeout => {
                FailureKind::Transport
            }
        }
    }
}
