//! Conversation command and query handlers.

mod delete_conversation;
mod error;
mod get_conversation;
mod list_conversations;
mod list_messages;

pub use delete_conversation::{DeleteConversationCommand, DeleteConversationHandler};
pub use error::ConversationError;
pub use get_conversation::{GetConversationHandler, GetConversationQuery};
pub use list_conversations::{ListConversationsHandler, ListConversationsQuery};
pub use list_messages::{ListMessagesHandler, ListMessagesQuery};
