//! Conversation state and the turn loop, independent of any terminal.

pub mod store;
pub mod turn;


pub use store::MessageStore;
pub use turn::{ConversationView, Notices, TurnOrchestrator, TurnOutcome};
