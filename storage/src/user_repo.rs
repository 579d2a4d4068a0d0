//! User repository: first-contact registration and lookups by external id.

use chrono::Utc;
use tracing::info;

use crate::error::StorageError;
use crate::models::{BotUserRecord, NewBotUser};
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct UserRepository {
    pool_manager: SqlitePoolManager,
}

impl UserRepository {
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    /// Inserts the user unless a row with the same `telegram_id` exists. Returns true when a row
    /// was created. Existing rows are left untouched (no profile refresh).
    pub async fn insert_if_absent(&self, user: &NewBotUser) -> Result<bool, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO bot_users (telegram_id, username, first_name, last_name, joined_at, is_active)
            VALUES (?, ?, ?, ?, ?, 1)
            "#,
        )
        .bind(user.telegram_id)
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        let created = result.rows_affected() == 1;
        if created {
            info!(telegram_id = user.telegram_id, "Registered bot user");
        }
        Ok(created)
    }

    pub async fn find_by_telegram_id(
        &self,
        telegram_id: i64,
    ) -> Result<Option<BotUserRecord>, StorageError> {
        let user = sqlx::query_as::<_, BotUserRecord>(
            "SELECT * FROM bot_users WHERE telegram_id = ?",
        )
        .bind(telegram_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;
        Ok(user)
    }

    pub async fn count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bot_users")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count)
    }

    /// Most recently joined users first.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<BotUserRecord>, StorageError> {
        let users = sqlx::query_as::<_, BotUserRecord>(
            "SELECT * FROM bot_users ORDER BY joined_at DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool_manager.pool())
        .await?;
        Ok(users)
    }
}
