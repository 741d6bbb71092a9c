use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use guru_ai::{FailureKind, SessionManager};
use guru_common::Message;
use guru_config::schema::ChatConfig;
use tracing::{debug, info};

use super::store::MessageStore;

/// Anything that can show the conversation. Called after every mutation.
pub trait ConversationView {
    fn render(&mut self, messages: &[Message], busy: bool);
}

/// What a single `submit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Input was blank after trimming.
    Ignored,
    /// A reply was already pending.
    Busy,
    Replied,
    Failed(FailureKind),
}

/// Bot-authored texts appended when a turn fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notices {
    pub credential_missing: String,
    pub auth: String,
    pub transport: String,
}

impl Notices {
    pub fn for_kind(&self, kind: FailureKind) -> &str {
        match kind {
            FailureKind::CredentialMissing => &self.credential_missing,
            FailureKind::Auth => &self.auth,
            FailureKind::Transport => &self.transport,
        }
    }
}

impl From<&ChatConfig> for Notices {
    fn from(chat: &ChatConfig) -> Self {
        Self {
            credential_missing: chat.credential_missing_notice.clone(),
            auth: chat.auth_error_notice.clone(),
            transport: chat.transport_error_notice.clone(),
        }
    }
}

/// Clears the busy flag when dropped.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Runs one user turn end to end: record the input, ask the model, record
/// the reply or a notice. At most one turn is in flight at a time.
pub struct TurnOrchestrator {
    sessions: SessionManager,
    store: MessageStore,
    notices: Notices,
    busy: Arc<AtomicBool>,
}

impl TurnOrchestrator {
    pub fn new(sessions: SessionManager, store: MessageStore, notices: Notices) -> Self {
        Self {
            sessions,
            store,
            notices,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    #[cfg(test)]
    pub(crate) fn busy_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.busy)
    }

    pub async fn submit(&mut self, text: &str, view: &mut dyn ConversationView) -> TurnOutcome {
        let text = text.trim();
        if text.is_empty() {
            return TurnOutcome::Ignored;
        }
        let Some(guard) = BusyGuard::acquire(&self.busy) else {
            debug!("Reply pending, ignoring submission");
            return TurnOutcome::Busy;
        };

        view.render(self.store.append(Message::user(text)), true);

        let outcome = match self.sessions.send(text).await {
            Ok(reply) => {
                self.store.append(Message::bot(reply));
                TurnOutcome::Replied
            }
            Err(e) => {
                let kind = e.kind();
                info!(?kind, "Turn failed: {e}");
                self.store
                    .append(Message::bot(self.notices.for_kind(kind)));
                TurnOutcome::Failed(kind)
            }
        };

        drop(guard);
        view.render(self.store.messages(), false);
        outcome
    }

    /// Forget the model-side context and the conversation, then show the greeting.
    pub fn reset_conversation(&mut self, view: &mut dyn ConversationView) {
        self.sessions.reset();
        view.render(self.store.clear(), false);
    }
}

impl std::fmt::Debug for TurnOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnOrchestrator")
            .field("sessions", &self.sessions)
            .field("store", &self.store)
            .field("busy", &self.is_busy())
            .finish()
    }
}
