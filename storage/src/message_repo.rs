//! Message repository: append-only history per user, read newest first.

use chrono::Utc;
use tracing::debug;

use crate::error::StorageError;
use crate::models::{BotMessageRecord, NewBotMessage};
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    /// Appends one message stamped with the current time; returns the new row id.
    pub async fn append(&self, message: &NewBotMessage) -> Result<i64, StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO bot_messages (telegram_user_id, message_text, timestamp, is_from_user)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(message.telegram_user_id)
        .bind(&message.message_text)
        .bind(Utc::now())
        .bind(message.is_from_user)
        .execute(self.pool_manager.pool())
        .await?;

        let id = result.last_insert_rowid();
        debug!(
            id,
            telegram_user_id = message.telegram_user_id,
            is_from_user = message.is_from_user,
            "Saved bot message"
        );
        Ok(id)
    }

    /// History of one user, newest first.
    pub async fn list_for_user(
        &self,
        telegram_user_id: i64,
        limit: i64,
    ) -> Result<Vec<BotMessageRecord>, StorageError> {
        let messages = sqlx::query_as::<_, BotMessageRecord>(
            r#"
            SELECT * FROM bot_messages
            WHERE telegram_user_id = ?
            ORDER BY timestamp DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(telegram_user_id)
        .bind(limit)
        .fetch_all(self.pool_manager.pool())
        .await?;
        Ok(messages)
    }

    pub async fn count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bot_messages")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count)
    }
}
