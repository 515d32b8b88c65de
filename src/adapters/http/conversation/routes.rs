//! HTTP routes for conversation endpoints.

use axum::{middleware, routing::get, Router};

use crate::adapters::http::middleware::{auth_middleware, AuthState};

use super::handlers::{
    delete_conversation, get_conversation, list_conversations, list_messages,
    ConversationHandlers,
};

/// Creates the conversation router with all endpoints behind bearer auth.
pub fn conversation_routes(handlers: ConversationHandlers, auth: AuthState) -> Router {
    Router::new()
        .route("/", get(list_conversations))
        .route("/:id", get(get_conversation).delete(delete_conversation))
        .route("/:id/messages", get(list_messages))
        .route_layer(middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(handlers)
}
