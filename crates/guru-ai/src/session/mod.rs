//! Remote chat session lifecycle.
//!
//! A `ChatSession` is one open conversational context with the model
//! service. The `SessionManager` keeps at most one of them alive, creates it
//! lazily, and drops it on reset or after any failed exchange so a stale
//! context is never reused.

mod handle;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use handle::ChatSession;
pub use manager::SessionManager;
pub use types::{ClientFactory, SessionSettings};
