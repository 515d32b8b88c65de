//! ListMessagesHandler - Query handler for a conversation's messages.
//!
//! The caller's id travels with the query so the store can apply its own
//! access rules; no separate ownership lookup happens here.

use std::sync::Arc;

use crate::domain::conversation::Message;
use crate::domain::foundation::{ConversationId, UserId};
use crate::ports::ConversationStore;

use super::ConversationError;

/// Query to list messages in a conversation.
#[derive(Debug, Clone)]
pub struct ListMessagesQuery {
    pub conversation_id: ConversationId,
    pub user_id: UserId,
}

/// Handler for listing messages.
pub struct ListMessagesHandler {
    store: Arc<dyn ConversationStore>,
}

impl ListMessagesHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListMessagesQuery) -> Result<Vec<Message>, ConversationError> {
        let messages = self
            .store
            .get_conversation_messages(&query.conversation_id, &query.user_id)
            .await?;
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationStore;
    use crate::domain::conversation::{Conversation, MessageRole};
    use crate::ports::StoreError;

    fn query(conversation_id: &str, user_id: &str) -> ListMessagesQuery {
        ListMessagesQuery {
            conversation_id: ConversationId::new(conversation_id).unwrap(),
            user_id: UserId::new(user_id).unwrap(),
        }
    }

    async fn store_with_thread(owner: &str) -> InMemoryConversationStore {
        let store = InMemoryConversationStore::new();
        let id = ConversationId::new("c1").unwrap();
        store
            .insert_conversation(Conversation::new(id.clone(), UserId::new(owner).unwrap(), None))
            .await;
        store
            .append_message(Message::new("m1", id.clone(), MessageRole::User, "hi"))
            .await;
        store
            .append_message(Message::new("m2", id, MessageRole::Assistant, "hey"))
            .await;
        store
    }

    #[tokio::test]
    async fn returns_messages_for_owner() {
        let handler = ListMessagesHandler::new(Arc::new(store_with_thread("user-1").await));

        let messages = handler.handle(query("c1", "user-1")).await.unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content, "hey");
    }

    #[tokio::test]
    async fn other_user_gets_no_messages() {
        let handler = ListMessagesHandler::new(Arc::new(store_with_thread("user-1").await));

        let messages = handler.handle(query("c1", "user-2")).await.unwrap();

        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn unknown_conversation_has_no_messages() {
        let handler = ListMessagesHandler::new(Arc::new(InMemoryConversationStore::new()));

        let messages = handler.handle(query("missing", "user-1")).await.unwrap();

        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn propagates_store_failure() {
        let store = InMemoryConversationStore::new();
        store.fail_with(StoreError::database("boom")).await;
        let handler = ListMessagesHandler::new(Arc::new(store));

        let result = handler.handle(query("c1", "user-1")).await;

        assert!(matches!(result, Err(ConversationError::Store(_))));
    }
}
