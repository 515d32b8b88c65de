//! Application handlers.
//!
//! Command and query handlers that coordinate calls to the ports.

pub mod auth_link;
pub mod conversation;

pub use auth_link::{AuthLinkError, CreateAuthLinkCommand, CreateAuthLinkHandler};
pub use conversation::{
    ConversationError, DeleteConversationCommand, DeleteConversationHandler,
    GetConversationHandler, GetConversationQuery, ListConversationsHandler,
    ListConversationsQuery, ListMessagesHandler, ListMessagesQuery,
};
