//! BotStore: one pool, schema initialized, repositories for all four record kinds.

use crate::error::StorageError;
use crate::event_log::EventLog;
use crate::log_repo::LogRepository;
use crate::message_repo::MessageRepository;
use crate::schema::init_schema;
use crate::setting_repo::SettingRepository;
use crate::sqlite_pool::SqlitePoolManager;
use crate::user_repo::UserRepository;

/// Shared handle to the conversation/log/settings store. Cheap to clone.
#[derive(Clone)]
pub struct BotStore {
    users: UserRepository,
    messages: MessageRepository,
    logs: LogRepository,
    settings: SettingRepository,
}

impl BotStore {
    /// Opens the database and creates missing tables.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        init_schema(pool_manager.pool()).await?;
        Ok(Self {
            users: UserRepository::new(pool_manager.clone()),
            messages: MessageRepository::new(pool_manager.clone()),
            logs: LogRepository::new(pool_manager.clone()),
            settings: SettingRepository::new(pool_manager),
        })
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    pub fn messages(&self) -> &MessageRepository {
        &self.messages
    }

    pub fn logs(&self) -> &LogRepository {
        &self.logs
    }

    pub fn settings(&self) -> &SettingRepository {
        &self.settings
    }

    /// Operational log writer backed by this store.
    pub fn event_log(&self) -> EventLog {
        EventLog::new(self.logs.clone())
    }
}
