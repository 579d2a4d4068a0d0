//! Record models for the bot tables.

mod bot_log;
mod bot_message;
mod bot_setting;
mod bot_user;

pub use bot_log::{BotLogRecord, LogLevel, LogPage};
pub use bot_message::{BotMessageRecord, NewBotMessage};
pub use bot_setting::BotSettingRecord;
pub use bot_user::{BotUserRecord, NewBotUser};
