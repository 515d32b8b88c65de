//! Top-level API router.
//!
//! Assembles the per-resource routers under `/api` and adds the liveness
//! check. Cross-cutting tower layers (tracing, CORS) are added by the binary.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::application::handlers::{
    CreateAuthLinkHandler, DeleteConversationHandler, GetConversationHandler,
    ListConversationsHandler, ListMessagesHandler,
};
use crate::ports::{ConnectedAccounts, ConversationStore, SessionValidator};

use super::auth_link::{auth_link_routes, AuthLinkHandlers};
use super::conversation::{conversation_routes, ConversationHandlers};
use super::middleware::AuthState;

/// Everything the HTTP surface needs, wired from the three ports.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub auth_links: AuthLinkHandlers,
    pub conversations: ConversationHandlers,
}

impl AppState {
    /// Builds the application handlers on top of the given adapters.
    pub fn new(
        session_validator: Arc<dyn SessionValidator>,
        store: Arc<dyn ConversationStore>,
        connected_accounts: Arc<dyn ConnectedAccounts>,
        callback_url: impl Into<String>,
    ) -> Self {
        let auth_links = AuthLinkHandlers::new(Arc::new(CreateAuthLinkHandler::new(
            connected_accounts,
            callback_url,
        )));
        let conversations = ConversationHandlers::new(
            Arc::new(ListConversationsHandler::new(store.clone())),
            Arc::new(GetConversationHandler::new(store.clone())),
            Arc::new(DeleteConversationHandler::new(store.clone())),
            Arc::new(ListMessagesHandler::new(store)),
        );

        Self {
            auth: session_validator,
            auth_links,
            conversations,
        }
    }
}

/// Creates the full API router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/authLinks", auth_link_routes(state.auth_links))
        .nest(
            "/api/conversations",
            conversation_routes(state.conversations, state.auth),
        )
}

/// GET /health - Liveness check
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
