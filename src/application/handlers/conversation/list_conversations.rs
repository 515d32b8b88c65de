//! ListConversationsHandler - Query handler for a user's conversations.

use std::sync::Arc;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::UserId;
use crate::ports::ConversationStore;

use super::ConversationError;

/// Query to list conversations owned by a user.
#[derive(Debug, Clone)]
pub struct ListConversationsQuery {
    pub user_id: UserId,
}

/// Handler for listing conversations.
pub struct ListConversationsHandler {
    store: Arc<dyn ConversationStore>,
}

impl ListConversationsHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListConversationsQuery,
    ) -> Result<Vec<Conversation>, ConversationError> {
        let conversations = self.store.list_conversations(&query.user_id).await?;
        Ok(conversations)
    }
}
