//! Canned-response client for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use guru_config::Credential;

use crate::session::{ClientFactory, SessionSettings};
use crate::{AiClient, AiError, AiResponse, ChatMessage};

/// Replays queued replies in order and records every request.
///
/// When the queue is empty, requests fail with an `ApiError`.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<AiResponse, AiError>>>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
    credentials: Mutex<Vec<String>>,
    sessions_opened: AtomicUsize,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_reply(&self, text: impl Into<String>) {
        self.lock_replies().push_back(Ok(AiResponse {
            content: text.into(),
            ..AiResponse::default()
        }));
    }

    pub fn push_error(&self, error: AiError) {
        self.lock_replies().push_back(Err(error));
    }

    /// Every message list sent so far.
    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Credentials handed to the factory, one per opened session.
    pub fn credentials(&self) -> Vec<String> {
        self.credentials
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn sessions_opened(&self) -> usize {
        self.sessions_opened.load(Ordering::SeqCst)
    }

    /// Factory that hands this client to every new session.
    pub fn factory(self: &Arc<Self>) -> ClientFactory {
        let client = Arc::clone(self);
        Box::new(move |credential: &Credential, _settings: &SessionSettings| {
            client.sessions_opened.fetch_add(1, Ordering::SeqCst);
            client
                .credentials
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(credential.expose().to_string());
            Arc::clone(&client) as Arc<dyn AiClient>
        })
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<AiResponse, AiError>>> {
        self.replies.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(&self, messages: &[ChatMessage]) -> Result<AiResponse, AiError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(messages.to_vec());
        self.lock_replies()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::ApiError("no scripted reply".into())))
    }
}
