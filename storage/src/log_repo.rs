//! Log repository: append operational events, page through them newest first.

use chrono::Utc;

use crate::error::StorageError;
use crate::models::{BotLogRecord, LogLevel, LogPage};
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct LogRepository {
    pool_manager: SqlitePoolManager,
}

impl LogRepository {
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    pub async fn append(&self, level: LogLevel, message: &str) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO bot_logs (level, message, timestamp) VALUES (?, ?, ?)")
            .bind(level.as_str())
            .bind(message)
            .bind(Utc::now())
            .execute(self.pool_manager.pool())
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn recent(&self, limit: i64) -> Result<Vec<BotLogRecord>, StorageError> {
        let logs = sqlx::query_as::<_, BotLogRecord>(
            "SELECT * FROM bot_logs ORDER BY timestamp DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool_manager.pool())
        .await?;
        Ok(logs)
    }

    /// 1-based pagination; page 0 is treated as page 1.
    pub async fn page(&self, page: u32, per_page: u32) -> Result<LogPage, StorageError> {
        let page = page.max(1);
        let offset = i64::from(page - 1) * i64::from(per_page);

        let items = sqlx::query_as::<_, BotLogRecord>(
            "SELECT * FROM bot_logs ORDER BY timestamp DESC, id DESC LIMIT ? OFFSET ?",
        )
        .bind(i64::from(per_page))
        .bind(offset)
        .fetch_all(self.pool_manager.pool())
        .await?;

        Ok(LogPage {
            items,
            page,
            per_page,
            total: self.count().await?,
        })
    }

    pub async fn count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bot_logs")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count)
    }

    /// Count of rows with the given level whose message contains `needle`.
    pub async fn count_matching(&self, level: LogLevel, needle: &str) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM bot_logs WHERE level = ? AND instr(message, ?) > 0",
        )
        .bind(level.as_str())
        .bind(needle)
        .fetch_one(self.pool_manager.pool())
        .await?;
        Ok(count)
    }
}
