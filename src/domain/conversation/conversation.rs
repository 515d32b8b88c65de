//! Conversation record as held by the external store.

use chrono::{DateTime, Utc};

use crate::domain::foundation::{ConversationId, UserId};

/// A stored conversation, scoped to the user who owns it.
///
/// Creation and message appends happen in the store; this service only
/// reads and deletes these records.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub user_id: UserId,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Creates a conversation stamped with the current time.
    pub fn new(id: ConversationId, user_id: UserId, title: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            title,
            created_at: now,
            updated_at: now,
        }
    }

    /// True if `user_id` owns this conversation.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
