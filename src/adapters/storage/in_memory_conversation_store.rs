//! In-Memory Conversation Store Adapter
//!
//! Holds conversations and messages in process memory behind a single lock,
//! so a delete removes a conversation and its messages in one step.
//! Used when no database is configured, and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::{Conversation, Message};
use crate::domain::foundation::{ConversationId, UserId};
use crate::ports::{ConversationStore, StoreError};

#[derive(Debug, Default)]
struct Tables {
    conversations: HashMap<ConversationId, Conversation>,
    messages: HashMap<ConversationId, Vec<Message>>,
}

/// In-memory implementation of `ConversationStore`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    tables: Arc<RwLock<Tables>>,
    force_error: Arc<RwLock<Option<StoreError>>>,
}

impl InMemoryConversationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a conversation.
    pub async fn insert_conversation(&self, conversation: Conversation) {
        let mut tables = self.tables.write().await;
        tables
            .messages
            .entry(conversation.id.clone())
            .or_default();
        tables
            .conversations
            .insert(conversation.id.clone(), conversation);
    }

    /// Append a message to its conversation's history.
    pub async fn append_message(&self, message: Message) {
        let mut tables = self.tables.write().await;
        tables
            .messages
            .entry(message.conversation_id.clone())
            .or_default()
            .push(message);
    }

    /// Make every subsequent call fail with `error`.
    pub async fn fail_with(&self, error: StoreError) {
        *self.force_error.write().await = Some(error);
    }

    /// Undo `fail_with`.
    pub async fn clear_error(&self) {
        *self.force_error.write().await = None;
    }

    /// Number of stored conversations
    pub async fn conversation_count(&self) -> usize {
        self.tables.read().await.conversations.len()
    }

    /// Number of stored messages across all conversations
    pub async fn message_count(&self) -> usize {
        self.tables
            .read()
            .await
            .messages
            .values()
            .map(Vec::len)
            .sum()
    }

    async fn check_error(&self) -> Result<(), StoreError> {
        match self.force_error.read().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn list_conversations(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Conversation>, StoreError> {
        self.check_error().await?;
        let tables = self.tables.read().await;
        let mut owned: Vec<Conversation> = tables
            .conversations
            .values()
            .filter(|c| c.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(owned)
    }

    async fn get_conversation(
        &self,
        conversation_id: &ConversationId,
        user_id: &UserId,
    ) -> Result<Option<Conversation>, StoreError> {
        self.check_error().await?;
        let tables = self.tables.read().await;
        Ok(tables
            .conversations
            .get(conversation_id)
            .filter(|c| c.is_owned_by(user_id))
            .cloned())
    }

    async fn delete_conversation(
        &self,
        conversation_id: &ConversationId,
        user_id: &UserId,
    ) -> Result<bool, StoreError> {
        self.check_error().await?;
        let mut tables = self.tables.write().await;
        let owned = tables
            .conversations
            .get(conversation_id)
            .is_some_and(|c| c.is_owned_by(user_id));
        if !owned {
            return Ok(false);
        }
        tables.messages.remove(conversation_id);
        tables.conversations.remove(conversation_id);
        Ok(true)
    }

    async fn get_conversation_messages(
        &self,
        conversation_id: &ConversationId,
        caller: &UserId,
    ) -> Result<Vec<Message>, StoreError> {
        self.check_error().await?;
        let tables = self.tables.read().await;
        let visible = tables
            .conversations
            .get(conversation_id)
            .is_some_and(|c| c.is_owned_by(caller));
        if !visible {
            return Ok(Vec::new());
        }
        let mut messages = tables
            .messages
            .get(conversation_id)
            .cloned()
            .unwrap_or_default();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(messages)
    }
}
