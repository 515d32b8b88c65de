//! Conversation store port.
//!
//! The store owns conversation and message persistence together with its
//! per-record permission model. Callers pass the authenticated user id where
//! the store needs it to scope results; the store decides what that user may
//! see or delete.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversation::{Conversation, Message};
use crate::domain::foundation::{ConversationId, UserId};

/// Errors reported by a conversation store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing database rejected or failed a query.
    #[error("Database error: {0}")]
    Database(String),

    /// The store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Persistence port for conversation history.
///
/// # Contract
///
/// - `list_conversations` returns only conversations owned by `user_id`.
/// - `get_conversation` returns `None` for unknown ids and for
///   conversations owned by someone else.
/// - `delete_conversation` verifies ownership first, then removes the
///   conversation and every message in it as one unit. It returns `false`
///   (and deletes nothing) when the conversation is missing or not owned
///   by `user_id`.
/// - `get_conversation_messages` is keyed by conversation; `caller` is the
///   identity the store checks access against. Messages of a conversation
///   the caller does not own (or that does not exist) come back empty.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn list_conversations(&self, user_id: &UserId)
        -> Result<Vec<Conversation>, StoreError>;

    async fn get_conversation(
        &self,
        conversation_id: &ConversationId,
        user_id: &UserId,
    ) -> Result<Option<Conversation>, StoreError>;

    async fn delete_conversation(
        &self,
        conversation_id: &ConversationId,
        user_id: &UserId,
    ) -> Result<bool, StoreError>;

    async fn get_conversation_messages(
        &self,
        conversation_id: &ConversationId,
        caller: &UserId,
    ) -> Result<Vec<Message>, StoreError>;
}
