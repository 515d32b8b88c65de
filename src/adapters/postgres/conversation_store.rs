//! PostgreSQL implementation of ConversationStore.
//!
//! Reads conversation history from the `conversations` and `messages`
//! tables and deletes a conversation together with its messages inside one
//! transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Executor, PgPool, Row};

use crate::domain::conversation::{Conversation, Message, MessageRole};
use crate::domain::foundation::{ConversationId, UserId};
use crate::ports::{ConversationStore, StoreError};

/// Tables this adapter expects. Applied by `ensure_schema`.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS conversations (
    id          TEXT PRIMARY KEY,
    user_id     TEXT NOT NULL,
    title       TEXT,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS conversations_user_id_idx ON conversations (user_id, updated_at DESC);
CREATE TABLE IF NOT EXISTS messages (
    id               TEXT PRIMARY KEY,
    conversation_id  TEXT NOT NULL REFERENCES conversations (id),
    role             TEXT NOT NULL,
    content          TEXT NOT NULL,
    created_at       TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS messages_conversation_id_idx ON messages (conversation_id, created_at);
"#;

/// PostgreSQL implementation of ConversationStore.
#[derive(Clone)]
pub struct PostgresConversationStore {
    pool: PgPool,
}

impl PostgresConversationStore {
    /// Creates a new PostgresConversationStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the tables and indexes if they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.pool
            .execute(SCHEMA)
            .await
            .map_err(|e| db_error("Failed to apply schema", e))?;
        Ok(())
    }
}

#[async_trait]
impl ConversationStore for PostgresConversationStore {
    async fn list_conversations(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Conversation>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, created_at, updated_at
            FROM conversations
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list conversations", e))?;

        rows.iter().map(row_to_conversation).collect()
    }

    async fn get_conversation(
        &self,
        conversation_id: &ConversationId,
        user_id: &UserId,
    ) -> Result<Option<Conversation>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, title, created_at, updated_at
            FROM conversations
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(conversation_id.as_str())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch conversation", e))?;

        row.as_ref().map(row_to_conversation).transpose()
    }

    async fn delete_conversation(
        &self,
        conversation_id: &ConversationId,
        user_id: &UserId,
    ) -> Result<bool, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to start transaction", e))?;

        // Lock the row so a concurrent delete sees it gone.
        let owned = sqlx::query(
            "SELECT 1 FROM conversations WHERE id = $1 AND user_id = $2 FOR UPDATE",
        )
        .bind(conversation_id.as_str())
        .bind(user_id.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to check conversation owner", e))?
        .is_some();

        if !owned {
            return Ok(false);
        }

        sqlx::query("DELETE FROM messages WHERE conversation_id = $1")
            .bind(conversation_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete messages", e))?;

        sqlx::query("DELETE FROM conversations WHERE id = $1")
            .bind(conversation_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete conversation", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit transaction", e))?;

        Ok(true)
    }

    async fn get_conversation_messages(
        &self,
        conversation_id: &ConversationId,
        caller: &UserId,
    ) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT m.id, m.conversation_id, m.role, m.content, m.created_at
            FROM messages m
            JOIN conversations c ON c.id = m.conversation_id AND c.user_id = $2
            WHERE m.conversation_id = $1
            ORDER BY m.created_at ASC
            "#,
        )
        .bind(conversation_id.as_str())
        .bind(caller.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch messages", e))?;

        rows.iter().map(row_to_message).collect()
    }
}

fn db_error(context: &str, error: sqlx::Error) -> StoreError {
    match error {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::unavailable(format!("{}: {}", context, error))
        }
        other => StoreError::database(format!("{}: {}", context, other)),
    }
}

fn row_to_conversation(row: &PgRow) -> Result<Conversation, StoreError> {
    let id: String = row.try_get("id").map_err(|e| db_error("Bad conversation row", e))?;
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| db_error("Bad conversation row", e))?;
    let title: Option<String> = row
        .try_get("title")
        .map_err(|e| db_error("Bad conversation row", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| db_error("Bad conversation row", e))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| db_error("Bad conversation row", e))?;

    Ok(Conversation {
        id: ConversationId::new(id).map_err(|e| StoreError::database(e.to_string()))?,
        user_id: UserId::new(user_id).map_err(|e| StoreError::database(e.to_string()))?,
        title,
        created_at,
        updated_at,
    })
}

fn row_to_message(row: &PgRow) -> Result<Message, StoreError> {
    let id: String = row.try_get("id").map_err(|e| db_error("Bad message row", e))?;
    let conversation_id: String = row
        .try_get("conversation_id")
        .map_err(|e| db_error("Bad message row", e))?;
    let role: String = row.try_get("role").map_err(|e| db_error("Bad message row", e))?;
    let content: String = row
        .try_get("content")
        .map_err(|e| db_error("Bad message row", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| db_error("Bad message row", e))?;

    Ok(Message {
        id,
        conversation_id: ConversationId::new(conversation_id)
            .map_err(|e| StoreError::database(e.to_string()))?,
        role: str_to_role(&role)?,
        content,
        created_at,
    })
}

fn str_to_role(s: &str) -> Result<MessageRole, StoreError> {
    s.parse::<MessageRole>()
        .map_err(|e| StoreError::database(format!("Invalid message role in database: {}", e)))
}
