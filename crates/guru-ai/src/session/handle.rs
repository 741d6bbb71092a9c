//! One live conversational context with the model service.

use std::sync::Arc;

use guru_common::SessionId;
use tracing::debug;

use crate::{AiClient, AiError, ChatMessage, Role};

/// A conversational context bound to one client.
///
/// The service API is stateless, so the session keeps the exchanged turns
/// and replays them with every request.
pub struct ChatSession {
    id: SessionId,
    client: Arc<dyn AiClient>,
    system_instruction: Option<String>,
    history: Vec<ChatMessage>,
    has_credential: bool,
}

impl ChatSession {
    pub fn new(client: Arc<dyn AiClient>, has_credential: bool) -> Self {
        Self {
            id: SessionId::new(),
            client,
            system_instruction: None,
            history: Vec::new(),
            has_credential,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        let instruction = instruction.into();
        self.system_instruction = (!instruction.trim().is_empty()).then_some(instruction);
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn has_credential(&self) -> bool {
        self.has_credential
    }

    /// Turns exchanged so far (user and model, in order).
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Send one user message and return the model's reply text.
    ///
    /// History only grows when the exchange succeeds. A session created
    /// without a credential fails here, before any request is made.
    pub async fn send(&mut self, text: &str) -> Result<String, AiError> {
        if !self.has_credential {
            return Err(AiError::CredentialMissing);
        }

        let user = ChatMessage::new(Role::User, text);
        let mut messages = Vec::with_capacity(self.history.len() + 2);
        if let Some(ref system) = self.system_instruction {
            messages.push(ChatMessage::new(Role::System, system.clone()));
        }
        messages.extend(self.history.iter().cloned());
        messages.push(user.clone());

        debug!(session = %self.id, turns = self.history.len(), "sending message");
        let response = self.client.send_message(&messages).await?;

        self.history.push(user);
        self.history
            .push(ChatMessage::new(Role::Assistant, response.content.clone()));
        Ok(response.content)
    }
}
