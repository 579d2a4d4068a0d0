//! Settings repository: key/value rows edited from the dashboard.

use crate::error::StorageError;
use crate::models::BotSettingRecord;
use crate::sqlite_pool::SqlitePoolManager;

/// Key of the bot token setting read at loop start.
pub const TELEGRAM_TOKEN_KEY: &str = "telegram_token";

#[derive(Clone)]
pub struct SettingRepository {
    pool_manager: SqlitePoolManager,
}

impl SettingRepository {
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    /// Value of `key`; `None` when the row is missing or its value is NULL.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT value FROM bot_settings WHERE key = ?")
                .bind(key)
                .fetch_optional(self.pool_manager.pool())
                .await?;
        Ok(row.and_then(|(value,)| value))
    }

    /// Inserts or replaces the value of `key`.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO bot_settings (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(self.pool_manager.pool())
        .await?;
        Ok(())
    }

    /// Inserts `key` only when absent; returns true if a row was written.
    pub async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("INSERT OR IGNORE INTO bot_settings (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(value)
            .execute(self.pool_manager.pool())
            .await?;
        Ok(result.rows_affected() == 1)
    }

    pub async fn all(&self) -> Result<Vec<BotSettingRecord>, StorageError> {
        let rows = sqlx::query_as::<_, BotSettingRecord>("SELECT * FROM bot_settings ORDER BY key")
            .fetch_all(self.pool_manager.pool())
            .await?;
        Ok(rows)
    }
}
