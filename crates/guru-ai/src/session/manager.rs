//! Owner of the single live session.

use std::fmt;

use guru_common::SessionId;
use guru_config::{Credential, CredentialResolver};
use tracing::{debug, warn};

use crate::AiError;

use super::handle::ChatSession;
use super::types::{ClientFactory, SessionSettings};

/// Keeps at most one [`ChatSession`] alive.
///
/// `NoSession -> get_session -> SessionReady -> (reset | failed send) -> NoSession`
pub struct SessionManager {
    settings: SessionSettings,
    resolver: CredentialResolver,
    factory: ClientFactory,
    empty_reply: String,
    current: Option<ChatSession>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("settings", &self.settings)
            .field("resolver", &self.resolver)
            .field("session", &self.current.as_ref().map(|s| s.id().clone()))
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(
        settings: SessionSettings,
        resolver: CredentialResolver,
        factory: ClientFactory,
    ) -> Self {
        Self {
            settings,
            resolver,
            factory,
            empty_reply: String::new(),
            current: None,
        }
    }

    /// Text returned in place of an empty model reply.
    pub fn with_empty_reply(mut self, text: impl Into<String>) -> Self {
        self.empty_reply = text.into();
        self
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn has_session(&self) -> bool {
        self.current.is_some()
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.current.as_ref().map(ChatSession::id)
    }

    pub fn credential_available(&self) -> bool {
        self.resolver.is_available()
    }

    /// The live session, created on first use.
    ///
    /// A missing credential does not prevent creation; the session then
    /// fails on its first send.
    pub fn get_session(&mut self) -> &mut ChatSession {
        let settings = &self.settings;
        let resolver = &self.resolver;
        let factory = &self.factory;
        self.current
            .get_or_insert_with(|| open_session(settings, resolver, factory))
    }

    /// Send `text` on the live session and return the reply.
    ///
    /// Any failure discards the session so the next send starts clean.
    pub async fn send(&mut self, text: &str) -> Result<String, AiError> {
        let result = self.get_session().send(text).await;
        match result {
            Ok(reply) if reply.trim().is_empty() => {
                debug!("model returned an empty reply");
                Ok(self.empty_reply.clone())
            }
            Ok(reply) => Ok(reply),
            Err(e) => {
                warn!(kind = ?e.kind(), "send failed, discarding session: {e}");
                self.reset();
                Err(e)
            }
        }
    }

    /// Discard the live session, if any.
    pub fn reset(&mut self) {
        if let Some(session) = self.current.take() {
            debug!(session = %session.id(), "session discarded");
        }
    }
}

fn open_session(
    settings: &SessionSettings,
    resolver: &CredentialResolver,
    factory: &ClientFactory,
) -> ChatSession {
    let credential = resolver.resolve();
    let has_credential = credential.is_some();
    if !has_credential {
        warn!(
            candidates = ?resolver.candidates(),
            "no API key found; messages will fail until one is set"
        );
    }
    let credential = credential.unwrap_or_else(|| Credential::new(""));
    let client = factory(&credential, settings);
    let session = ChatSession::new(client, has_credential)
        .with_system_instruction(settings.system_instruction.clone());
    debug!(session = %session.id(), model = %settings.model, "session opened");
    session
}
