//! BotMessage: one directed message in a user's history.
//!
//! `telegram_user_id` joins to `bot_users.telegram_id` by value only; there is no foreign key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of `bot_messages`. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BotMessageRecord {
    pub id: i64,
    pub telegram_user_id: i64,
    pub message_text: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub is_from_user: bool,
}

/// Message to append; the timestamp is set at persistence time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBotMessage {
    pub telegram_user_id: i64,
    pub message_text: String,
    pub is_from_user: bool,
}

impl NewBotMessage {
    /// Message written by the user.
    pub fn inbound(telegram_user_id: i64, text: impl Into<String>) -> Self {
        Self {
            telegram_user_id,
            message_text: text.into(),
            is_from_user: true,
        }
    }

    /// Message authored by the bot.
    pub fn outbound(telegram_user_id: i64, text: impl Into<String>) -> Self {
        Self {
            telegram_user_id,
            message_text: text.into(),
            is_from_user: false,
        }
    }
}
