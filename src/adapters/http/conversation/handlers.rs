//! HTTP handlers for conversation endpoints.
//!
//! Store failures are logged here with the request's identifiers and
//! replaced by a fixed message before leaving the service.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::conversation::{
    ConversationError, DeleteConversationCommand, DeleteConversationHandler,
    GetConversationHandler, GetConversationQuery, ListConversationsHandler,
    ListConversationsQuery, ListMessagesHandler, ListMessagesQuery,
};
use crate::domain::foundation::ConversationId;

use super::dto::{
    ConversationListResponse, ConversationResponse, DeleteConversationResponse,
    MessageListResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ConversationHandlers {
    list_handler: Arc<ListConversationsHandler>,
    get_handler: Arc<GetConversationHandler>,
    delete_handler: Arc<DeleteConversationHandler>,
    messages_handler: Arc<ListMessagesHandler>,
}

impl ConversationHandlers {
    pub fn new(
        list_handler: Arc<ListConversationsHandler>,
        get_handler: Arc<GetConversationHandler>,
        delete_handler: Arc<DeleteConversationHandler>,
        messages_handler: Arc<ListMessagesHandler>,
    ) -> Self {
        Self {
            list_handler,
            get_handler,
            delete_handler,
            messages_handler,
        }
    }
}

fn parse_id(raw: String) -> Result<ConversationId, ApiError> {
    ConversationId::new(raw).map_err(|_| ApiError::validation("Invalid conversation id"))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/conversations - List the caller's conversations
pub async fn list_conversations(
    State(handlers): State<ConversationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListConversationsQuery {
        user_id: user.id.clone(),
    };

    match handlers.list_handler.handle(query).await {
        Ok(conversations) => Json(ConversationListResponse::from(conversations)).into_response(),
        Err(e) => {
            tracing::error!(user_id = %user.id, error = %e, "Failed to fetch conversations");
            ApiError::Internal("Failed to fetch conversations").into_response()
        }
    }
}

/// GET /api/conversations/:id - Fetch one owned conversation
pub async fn get_conversation(
    State(handlers): State<ConversationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let conversation_id = match parse_id(id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let query = GetConversationQuery {
        conversation_id: conversation_id.clone(),
        user_id: user.id.clone(),
    };

    match handlers.get_handler.handle(query).await {
        Ok(conversation) => Json(ConversationResponse {
            conversation: conversation.into(),
        })
        .into_response(),
        Err(ConversationError::NotFound(_)) => {
            ApiError::NotFound("Conversation not found".to_string()).into_response()
        }
        Err(e) => {
            tracing::error!(
                user_id = %user.id,
                conversation_id = %conversation_id,
                error = %e,
                "Failed to fetch conversation"
            );
            ApiError::Internal("Failed to fetch conversation").into_response()
        }
    }
}

/// DELETE /api/conversations/:id - Delete a conversation and its messages
pub async fn delete_conversation(
    State(handlers): State<ConversationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let conversation_id = match parse_id(id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let cmd = DeleteConversationCommand {
        conversation_id: conversation_id.clone(),
        user_id: user.id.clone(),
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => Json(DeleteConversationResponse { success: true }).into_response(),
        Err(e) => {
            tracing::error!(
                user_id = %user.id,
                conversation_id = %conversation_id,
                error = %e,
                "Failed to delete conversation"
            );
            ApiError::Internal("Failed to delete conversation").into_response()
        }
    }
}

/// GET /api/conversations/:id/messages - List messages in a conversation
pub async fn list_messages(
    State(handlers): State<ConversationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let conversation_id = match parse_id(id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let query = ListMessagesQuery {
        conversation_id: conversation_id.clone(),
        user_id: user.id.clone(),
    };

    match handlers.messages_handler.handle(query).await {
        Ok(messages) => Json(MessageListResponse::from(messages)).into_response(),
        Err(e) => {
            tracing::error!(
                user_id = %user.id,
                conversation_id = %conversation_id,
                error = %e,
                "Failed to fetch messages"
            );
            ApiError::Internal("Failed to fetch messages").into_response()
        }
    }
}
