//! Gemini client tests: request shape, response parsing, and error mapping
//! against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::{AiClient, AiError, ChatMessage, FailureKind, Role};

const MODEL_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(
        GeminiConfig::new("test-key")
            .with_model("gemini-2.5-flash")
            .with_base_url(format!("{}/v1beta/models", server.uri())),
    )
}

fn conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(Role::System, "You are a grammar coach."),
        ChatMessage::new(Role::User, "I go to school yesterday."),
    ]
}

fn reply_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }],
        "usageMetadata": { "promptTokenCount": 11, "candidatesTokenCount": 4 }
    })
}

#[test]
fn request_body_maps_roles_and_system_instruction() {
    let client = GeminiClient::new(GeminiConfig::new("k").with_temperature(0.7));
    let mut messages = conversation();
    messages.push(ChatMessage::new(Role::Assistant, "Fixed!"));

    let body = client.build_request_body(&messages);
    let contents = body["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 2);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(
        body["systemInstruction"]["parts"][0]["text"],
        "You are a grammar coach."
    );
    assert_eq!(body["generationConfig"]["temperature"], 0.7);
}

#[test]
fn request_body_without_system_has_no_instruction() {
    let client = GeminiClient::new(GeminiConfig::new("k"));
    let body = client.build_request_body(&[ChatMessage::new(Role::User, "hi")]);
    assert!(body.get("systemInstruction").is_none());
}

#[test]
fn parse_joins_text_parts() {
    let client = GeminiClient::new(GeminiConfig::new("k"));
    let reply = client
        .parse_response(json!({
            "candidates": [{ "content": { "parts": [{ "text": "a" }, { "text": "b" }] } }]
        }))
        .unwrap();
    assert_eq!(reply.content, "ab");
    assert_eq!(reply.usage.total_tokens(), 0);
}

#[test]
fn parse_blocked_prompt_reports_reason() {
    let client = GeminiClient::new(GeminiConfig::new("k"));
    let err = client
        .parse_response(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
        .unwrap_err();
    assert!(matches!(err, AiError::ParseError(ref r) if r == "SAFETY"));
}

#[test]
fn config_debug_redacts_key() {
    let printed = format!("{:?}", GeminiConfig::new("very-secret"));
    assert!(!printed.contains("very-secret"));
}

#[tokio::test]
async fn send_message_returns_reply_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "I go to school yesterday." }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("Fixed!")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .send_message(&conversation())
        .await
        .unwrap();
    assert_eq!(reply.content, "Fixed!");
    assert_eq!(reply.usage.input_tokens, 11);
    assert_eq!(reply.usage.output_tokens, 4);
}

#[tokio::test]
async fn forbidden_maps_to_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("PERMISSION_DENIED"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&conversation())
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::Auth(_)));
    assert_eq!(err.kind(), FailureKind::Auth);
}

#[tokio::test]
async fn invalid_key_bad_request_classifies_as_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&conversation())
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::ApiError(_)));
    assert_eq!(err.kind(), FailureKind::Auth);
}

#[tokio::test]
async fn server_error_is_transport() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&conversation())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&conversation())
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::RateLimited));
}

#[tokio::test]
async fn malformed_payload_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&conversation())
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::ParseError(_)));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let server = MockServer::start().await;
    let base = format!("{}/v1beta/models", server.uri());
    drop(server);

    let client = GeminiClient::new(GeminiConfig::new("k").with_base_url(base));
    let err = client.send_message(&conversation()).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transport);
}
