//! Gemini API client struct, request building, and response parsing.

use std::sync::Arc;
use std::time::Duration;

use guru_config::Credential;
use tracing::warn;

use crate::session::{ClientFactory, SessionSettings};
use crate::{AiClient, AiError, AiResponse, ChatMessage, Role, TokenUsage};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                warn!("HTTP client builder failed, using defaults: {e}");
                reqwest::Client::new()
            });
        Self { config, http }
    }

    /// Factory that builds one client per session from the session settings.
    pub fn factory(request_timeout: Duration) -> ClientFactory {
        Box::new(move |credential: &Credential, settings: &SessionSettings| {
            let config = GeminiConfig::new(credential.expose())
                .with_model(settings.model.clone())
                .with_temperature(settings.temperature)
                .with_max_tokens(settings.max_output_tokens)
                .with_request_timeout_secs(request_timeout.as_secs());
            Arc::new(GeminiClient::new(config)) as Arc<dyn AiClient>
        })
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, messages: &[ChatMessage]) -> serde_json::Value {
        let mut contents = Vec::new();

        for msg in messages {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "model",
                Role::System => continue, // handled via systemInstruction
            };
            contents.push(serde_json::json!({
                "role": role,
                "parts": [{ "text": msg.content }]
            }));
        }

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if let Some(system) = messages.iter().find(|m| m.role == Role::System) {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system.content }]
            });
        }

        body
    }

    /// Parse a Gemini response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let candidates = json["candidates"].as_array().ok_or_else(|| {
            let reason = json["promptFeedback"]["blockReason"]
                .as_str()
                .unwrap_or("no candidates in response");
            AiError::ParseError(reason.to_string())
        })?;

        let first = candidates
            .first()
            .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

        let content: String = first["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}
