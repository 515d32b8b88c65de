//! DeleteConversationHandler - Command handler for removing a conversation.
//!
//! Ownership is checked by the store as part of the delete; a `false` from
//! the store is a failure, never a silent success.

use std::sync::Arc;

use crate::domain::foundation::{ConversationId, UserId};
use crate::ports::ConversationStore;

use super::ConversationError;

/// Command to delete a conversation and its messages.
#[derive(Debug, Clone)]
pub struct DeleteConversationCommand {
    pub conversation_id: ConversationId,
    pub user_id: UserId,
}

/// Handler for deleting conversations.
pub struct DeleteConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl DeleteConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteConversationCommand) -> Result<(), ConversationError> {
        let deleted = self
            .store
            .delete_conversation(&cmd.conversation_id, &cmd.user_id)
            .await?;

        if !deleted {
            return Err(ConversationError::DeleteFailed(cmd.conversation_id));
        }

        tracing::info!(
            conversation_id = %cmd.conversation_id,
            user_id = %cmd.user_id,
            "Conversation deleted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationStore;
    use crate::domain::conversation::{Conversation, Message, MessageRole};
    use crate::ports::StoreError;

    async fn seeded_store() -> InMemoryConversationStore {
        let store = InMemoryConversationStore::new();
        let id = ConversationId::new("abc").unwrap();
        store
            .insert_conversation(Conversation::new(
                id.clone(),
                UserId::new("owner").unwrap(),
                None,
            ))
            .await;
        store
            .append_message(Message::new("m1", id, MessageRole::User, "hello"))
            .await;
        store
    }

    fn command(user: &str) -> DeleteConversationCommand {
        DeleteConversationCommand {
            conversation_id: ConversationId::new("abc").unwrap(),
            user_id: UserId::new(user).unwrap(),
        }
    }

    #[tokio::test]
    async fn owner_can_delete() {
        let store = seeded_store().await;
        let handler = DeleteConversationHandler::new(Arc::new(store.clone()));

        handler.handle(command("owner")).await.unwrap();

        assert_eq!(store.conversation_count().await, 0);
        assert_eq!(store.message_count().await, 0);
    }

    #[tokio::test]
    async fn store_refusal_is_delete_failed() {
        let store = seeded_store().await;
        let handler = DeleteConversationHandler::new(Arc::new(store.clone()));

        let result = handler.handle(command("intruder")).await;

        assert_eq!(
            result,
            Err(ConversationError::DeleteFailed(
                ConversationId::new("abc").unwrap()
            ))
        );
        assert_eq!(store.conversation_count().await, 1);
    }

    #[tokio::test]
    async fn store_error_propagates() {
        let store = seeded_store().await;
        store.fail_with(StoreError::unavailable("down")).await;
        let handler = DeleteConversationHandler::new(Arc::new(store));

        let result = handler.handle(command("owner")).await;

        assert!(matches!(result, Err(ConversationError::Store(_))));
    }
}
