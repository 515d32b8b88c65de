//! HTTP adapter for conversation endpoints.
//!
//! Every route here requires a bearer token; the auth middleware is applied
//! in `conversation_routes`.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ConversationDto, ConversationListResponse, ConversationResponse, DeleteConversationResponse,
    MessageDto, MessageListResponse,
};
pub use handlers::ConversationHandlers;
pub use routes::conversation_routes;
