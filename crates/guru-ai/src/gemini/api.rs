//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, ChatMessage};

use super::client::GeminiClient;

#[async_trait]
impl AiClient for GeminiClient {
    async fn send_message(&self, messages: &[ChatMessage]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = messages.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = format!("HTTP {status}: {text}");
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AiError::Auth(detail),
                _ => AiError::ApiError(detail),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let reply = self.parse_response(json)?;
        debug!(
            model = %self.config.model,
            tokens = reply.usage.total_tokens(),
            "Gemini API response"
        );
        Ok(reply)
    }
}
