//! Conversation history records.
//!
//! Thin value types passed to and from the conversation store.

mod conversation;
mod message;

pub use conversation::Conversation;
pub use message::{Message, MessageRole};
