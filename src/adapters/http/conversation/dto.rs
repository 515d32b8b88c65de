//! HTTP DTOs for conversation endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::Serialize;

use crate::domain::conversation::{Conversation, Message, MessageRole};

// ════════════════════════════════════════════════════════════════════════════
// Record DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Conversation as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDto {
    pub id: String,
    pub user_id: String,
    pub title: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Conversation> for ConversationDto {
    fn from(conversation: Conversation) -> Self {
        Self {
            id: conversation.id.to_string(),
            user_id: conversation.user_id.to_string(),
            title: conversation.title,
            created_at: conversation.created_at.to_rfc3339(),
            updated_at: conversation.updated_at.to_rfc3339(),
        }
    }
}

/// Message as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub conversation_id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: String,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            conversation_id: message.conversation_id.to_string(),
            role: message.role,
            content: message.content,
            created_at: message.created_at.to_rfc3339(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/conversations
#[derive(Debug, Clone, Serialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<ConversationDto>,
}

impl From<Vec<Conversation>> for ConversationListResponse {
    fn from(conversations: Vec<Conversation>) -> Self {
        Self {
            conversations: conversations.into_iter().map(Into::into).collect(),
        }
    }
}

/// GET /api/conversations/:id
#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub conversation: ConversationDto,
}

/// DELETE /api/conversations/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteConversationResponse {
    pub success: bool,
}

/// GET /api/conversations/:id/messages
#[derive(Debug, Clone, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageDto>,
}

impl From<Vec<Message>> for MessageListResponse {
    fn from(messages: Vec<Message>) -> Self {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }
}
