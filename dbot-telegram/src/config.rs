//! Minimal Telegram connectivity config: token and optional Bot API base URL.
//! Loaded from BOT_TOKEN (or TELEGRAM_TOKEN) and TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::Result;
use std::env;

/// Token plus optional API base URL; everything a [`crate::TelegramTransport`] needs.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from environment. The token is required; the API URL is optional and validated.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN")
            .or_else(|_| env::var("TELEGRAM_TOKEN"))
            .map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let config = Self {
            bot_token,
            telegram_api_url,
        };
        config.api_url()?;
        Ok(config)
    }

    /// Builds with the given token and the default API URL.
    pub fn with_token(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            telegram_api_url: None,
        }
    }

    /// Parsed API base URL override, if any.
    pub fn api_url(&self) -> Result<Option<reqwest::Url>> {
        self.telegram_api_url
            .as_deref()
            .map(|raw| {
                reqwest::Url::parse(raw)
                    .map_err(|e| anyhow::anyhow!("Invalid TELEGRAM_API_URL '{}': {}", raw, e))
            })
            .transpose()
    }
}
