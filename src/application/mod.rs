//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer validates input and coordinates between ports.
//! Following CQRS, command handlers (write) are separate from query handlers (read).

pub mod handlers;

pub use handlers::{
    AuthLinkError, ConversationError, CreateAuthLinkCommand, CreateAuthLinkHandler,
    DeleteConversationCommand, DeleteConversationHandler, GetConversationHandler,
    GetConversationQuery, ListConversationsHandler, ListConversationsQuery, ListMessagesHandler,
    ListMessagesQuery,
};
