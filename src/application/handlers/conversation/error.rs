//! Errors raised by conversation query and command handlers.

use thiserror::Error;

use crate::domain::foundation::ConversationId;
use crate::ports::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    /// No conversation with this id is visible to the caller.
    #[error("Conversation not found: {0}")]
    NotFound(ConversationId),

    /// The store declined to delete (missing, not owned, or refused).
    #[error("Conversation could not be deleted: {0}")]
    DeleteFailed(ConversationId),

    #[error(transparent)]
    Store(#[from] StoreError),
}
