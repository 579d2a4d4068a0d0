//! teloxide-backed [`Transport`]. The token is bound at construction; every call goes to
//! `<api_url>/bot<token>/<method>`.

use std::time::Duration;

use async_trait::async_trait;
use dbot_core::{
    mask_token, BotIdentity, DbotError, OutgoingMessage, Result, ToCoreUpdate, Transport, Update,
};
use teloxide::payloads::{GetUpdatesSetters, SendMessageSetters};
use teloxide::requests::Requester;
use teloxide::types::{ChatId, ParseMode};
use tracing::{debug, error, instrument};

use crate::adapters::{to_inline_keyboard, TelegramUpdateWrapper};
use crate::config::TelegramConfig;

/// Long-poll wait used by [`TelegramTransport::new`].
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(30);

/// Added on top of the long-poll wait so the HTTP client outlives a server that holds the
/// request for the full wait.
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

/// Thin wrapper around `teloxide::Bot` implementing dbot-core's [`Transport`].
pub struct TelegramTransport {
    bot: teloxide::Bot,
    masked_token: String,
    poll_timeout: Duration,
}

impl TelegramTransport {
    /// Creates a transport for `token`, optionally pointed at a non-default Bot API server.
    /// Long-polls of up to [`DEFAULT_POLL_TIMEOUT`] are supported.
    pub fn new(token: impl Into<String>, api_url: Option<reqwest::Url>) -> Result<Self> {
        Self::with_poll_timeout(token, api_url, DEFAULT_POLL_TIMEOUT)
    }

    /// Like [`TelegramTransport::new`], with the HTTP client sized for `poll_timeout`.
    ///
    /// teloxide's default client gives up after 17s, shorter than a typical `getUpdates` wait.
    pub fn with_poll_timeout(
        token: impl Into<String>,
        api_url: Option<reqwest::Url>,
        poll_timeout: Duration,
    ) -> Result<Self> {
        let token = token.into();
        let masked_token = mask_token(&token);
        let client = teloxide::net::default_reqwest_settings()
            .timeout(poll_timeout.saturating_add(REQUEST_TIMEOUT_MARGIN))
            .build()
            .map_err(|e| DbotError::Config(format!("failed to build HTTP client: {}", e)))?;
        let bot = teloxide::Bot::with_client(token, client);
        let bot = match api_url {
            Some(url) => bot.set_api_url(url),
            None => bot,
        };
        Ok(Self {
            bot,
            masked_token,
            poll_timeout,
        })
    }

    /// Creates a transport from [`TelegramConfig`]; fails on an invalid API URL.
    pub fn from_config(config: &TelegramConfig) -> Result<Self> {
        let api_url = config
            .api_url()
            .map_err(|e| DbotError::Config(e.to_string()))?;
        Self::new(config.bot_token.clone(), api_url)
    }

    /// Longest `getUpdates` wait this transport's HTTP client can hold.
    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
    async fn send_message(&self, message: &OutgoingMessage) -> Result<()> {
        let mut request = self
            .bot
            .send_message(ChatId(message.chat_id), message.text.clone())
            .parse_mode(ParseMode::Html);
        if let Some(markup) = &message.reply_markup {
            let keyboard = to_inline_keyboard(markup).inspect_err(|e| {
                error!(error = %e, "Failed to build reply markup");
            })?;
            request = request.reply_markup(keyboard);
        }

        match request.await {
            Ok(sent) => {
                debug!(message_id = sent.id.0, "Message sent");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, token = %self.masked_token, "sendMessage failed");
                Err(DbotError::Transport(format!("sendMessage failed: {}", e)))
            }
        }
    }

    #[instrument(skip(self))]
    async fn fetch_updates(&self, offset: Option<i64>, timeout: Duration) -> Result<Vec<Update>> {
        let wait = u32::try_from(timeout.as_secs()).map_err(|_| {
            DbotError::Config(format!("long-poll timeout {:?} out of range", timeout))
        })?;
        if timeout > self.poll_timeout {
            return Err(DbotError::Config(format!(
                "long-poll timeout {:?} exceeds the client limit {:?}",
                timeout, self.poll_timeout
            )));
        }
        let mut request = self.bot.get_updates().timeout(wait);
        if let Some(offset) = offset {
            let offset = i32::try_from(offset).map_err(|_| {
                DbotError::Transport(format!("update offset {} out of range", offset))
            })?;
            request = request.offset(offset);
        }

        let updates = request.await.map_err(|e| {
            error!(error = %e, token = %self.masked_token, "getUpdates failed");
            DbotError::Transport(format!("getUpdates failed: {}", e))
        })?;

        debug!(count = updates.len(), "Fetched updates");
        Ok(updates
            .iter()
            .map(|u| TelegramUpdateWrapper(u).to_core())
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_me(&self) -> Result<BotIdentity> {
        let me = self.bot.get_me().await.map_err(|e| {
            error!(error = %e, token = %self.masked_token, "getMe failed");
            DbotError::Transport(format!("getMe failed: {}", e))
        })?;
        Ok(BotIdentity {
            id: me.user.id.0 as i64,
            username: me.user.username.clone(),
        })
    }
}
