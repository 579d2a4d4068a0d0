//! BotUser: external identity record, keyed by the platform's user id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of `bot_users`. `telegram_id` is unique and is the only identity used for lookup.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BotUserRecord {
    pub id: i64,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub joined_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Profile captured at first contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBotUser {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
