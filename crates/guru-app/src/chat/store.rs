//! The conversation and its durable copy.
//!
//! The conversation is never empty once a store exists: it starts as the
//! greeting and every mutation writes the full list back to the slot.

use guru_common::Message;
use guru_platform::KeyValueStore;
use tracing::{debug, warn};

/// Owns the ordered message list and mirrors it into one storage slot.
pub struct MessageStore {
    storage: Box<dyn KeyValueStore>,
    key: String,
    greeting: String,
    messages: Vec<Message>,
    restored: bool,
}

impl MessageStore {
    /// A store holding only the greeting. Call [`initialize`](Self::initialize)
    /// to pick up a saved conversation.
    pub fn new(
        storage: Box<dyn KeyValueStore>,
        key: impl Into<String>,
        greeting: impl Into<String>,
    ) -> Self {
        let greeting = greeting.into();
        Self {
            storage,
            key: key.into(),
            messages: vec![Message::bot(greeting.clone())],
            greeting,
            restored: false,
        }
    }

    /// Load the saved conversation, falling back to a fresh greeting when the
    /// slot is absent, unreadable, malformed or holds an empty list.
    pub fn initialize(&mut self) -> &[Message] {
        match self.load() {
            Some(saved) => {
                debug!(count = saved.len(), "restored conversation");
                self.messages = saved;
                self.restored = true;
            }
            None => {
                self.messages = vec![Message::bot(self.greeting.clone())];
                self.restored = false;
            }
        }
        &self.messages
    }

    /// Whether the last `initialize` found a saved conversation.
    pub fn restored(&self) -> bool {
        self.restored
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn append(&mut self, message: Message) -> &[Message] {
        self.messages.push(message);
        self.persist();
        &self.messages
    }

    /// Drop the saved copy and start over from the greeting.
    pub fn clear(&mut self) -> &[Message] {
        if let Err(e) = self.storage.remove(&self.key) {
            warn!("Failed to remove saved conversation: {e}");
        }
        self.messages = vec![Message::bot(self.greeting.clone())];
        self.restored = false;
        &self.messages
    }

    fn load(&self) -> Option<Vec<Message>> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read saved conversation: {e}");
                return None;
            }
        };
        match serde_json::from_str::<Vec<Message>>(&raw) {
            Ok(saved) if !saved.is_empty() => Some(saved),
            Ok(_) => None,
            Err(e) => {
                debug!("Ignoring malformed saved conversation: {e}");
                None
            }
        }
    }

    fn persist(&self) {
        if self.messages.is_empty() {
            return;
        }
        let json = match serde_json::to_string(&self.messages) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize conversation: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &json) {
            warn!("Failed to save conversation: {e}");
        }
    }
}

impl std::fmt::Debug for MessageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageStore")
            .field("key", &self.key)
            .field("messages", &self.messages.len())
            .field("restored", &self.restored)
            .finish()
    }
}
