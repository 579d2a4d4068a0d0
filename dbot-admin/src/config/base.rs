//! Connection settings: bot token, Telegram API base URL, log file, database. Loaded from env.

use anyhow::Result;
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite:./bot.db";
const DEFAULT_LOG_FILE: &str = "logs/dbot.log";

#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// `--token`, else BOT_TOKEN or TELEGRAM_TOKEN. May be absent: the stored setting is used then.
    pub bot_token: Option<String>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    pub database_url: String,
}

fn first_set(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

impl BaseConfig {
    /// `token` wins over the environment when given.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            bot_token: token
                .filter(|t| !t.trim().is_empty())
                .or_else(|| first_set(&["BOT_TOKEN", "TELEGRAM_TOKEN"])),
            telegram_api_url: first_set(&["TELEGRAM_API_URL", "TELOXIDE_API_URL"]),
            log_file: first_set(&["LOG_FILE"]).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            database_url: first_set(&["DATABASE_URL"])
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        })
    }

    /// The API URL, when set, must parse.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.telegram_api_url {
            reqwest::Url::parse(url).map_err(|e| {
                anyhow::anyhow!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is not a valid URL '{}': {}",
                    url,
                    e
                )
            })?;
        }
        Ok(())
    }
}
