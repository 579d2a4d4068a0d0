//! BotSetting: key/value configuration row.

use serde::{Deserialize, Serialize};

/// Row of `bot_settings`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BotSettingRecord {
    pub id: i64,
    pub key: String,
    pub value: Option<String>,
}
