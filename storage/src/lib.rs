//! Storage crate: persistence for bot users, message history, operational logs and settings.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – BotUserRecord, BotMessageRecord, BotLogRecord, BotSettingRecord
//! - [`user_repo`], [`message_repo`], [`log_repo`], [`setting_repo`] – SQLite repositories
//! - [`event_log`] – EventLog (operational log writer mirrored to tracing)
//! - [`store`] – BotStore bundling the repositories over one pool
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod event_log;
mod log_repo;
mod message_repo;
mod models;
mod schema;
mod setting_repo;
mod sqlite_pool;
mod store;
mod user_repo;

pub use error::StorageError;
pub use event_log::EventLog;
pub use log_repo::LogRepository;
pub use message_repo::MessageRepository;
pub use models::{
    BotLogRecord, BotMessageRecord, BotSettingRecord, BotUserRecord, LogLevel, LogPage,
    NewBotMessage, NewBotUser,
};
pub use setting_repo::{SettingRepository, TELEGRAM_TOKEN_KEY};
pub use sqlite_pool::SqlitePoolManager;
pub use store::BotStore;
pub use user_repo::UserRepository;
