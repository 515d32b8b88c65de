//! GetConversationHandler - Query handler for a single owned conversation.

use std::sync::Arc;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, UserId};
use crate::ports::ConversationStore;

use super::ConversationError;

/// Query to get a conversation.
#[derive(Debug, Clone)]
pub struct GetConversationQuery {
    pub conversation_id: ConversationId,
    pub user_id: UserId,
}

/// Handler for getting one conversation.
pub struct GetConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl GetConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetConversationQuery,
    ) -> Result<Conversation, ConversationError> {
        self.store
            .get_conversation(&query.conversation_id, &query.user_id)
            .await?
            .ok_or(ConversationError::NotFound(query.conversation_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationStore;

    async fn handler_with(owner: &str) -> GetConversationHandler {
        let store = InMemoryConversationStore::new();
        store
            .insert_conversation(Conversation::new(
                ConversationId::new("c1").unwrap(),
                UserId::new(owner).unwrap(),
                None,
            ))
            .await;
        GetConversationHandler::new(Arc::new(store))
    }

    #[tokio::test]
    async fn returns_owned_conversation() {
        let handler = handler_with("user-1").await;

        let conversation = handler
            .handle(GetConversationQuery {
                conversation_id: ConversationId::new("c1").unwrap(),
                user_id: UserId::new("user-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(conversation.id.as_str(), "c1");
    }

    #[tokio::test]
    async fn other_users_conversation_is_not_found() {
        let handler = handler_with("user-1").await;

        let result = handler
            .handle(GetConversationQuery {
                conversation_id: ConversationId::new("c1").unwrap(),
                user_id: UserId::new("user-2").unwrap(),
            })
            .await;

        assert_eq!(
            result,
            Err(ConversationError::NotFound(ConversationId::new("c1").unwrap()))
        );
    }
}
