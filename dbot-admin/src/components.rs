//! Shared components for the controller: store, reply texts, mini-app resolver, loop timing.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use dbot_core::{DbotError, Transport};
use dbot_telegram::TelegramTransport;
use handlers::{BotReplies, CandidateUrlResolver, MiniAppUrlResolver};
use storage::{BotStore, EventLog, TELEGRAM_TOKEN_KEY};
use tracing::{error, info};

use crate::config::{BotConfig, PollingConfig};
use crate::lifecycle::TransportFactory;
use crate::router::UpdateRouter;

/// Everything a polling run needs besides the transport.
#[derive(Clone)]
pub struct BotComponents {
    pub store: BotStore,
    pub replies: BotReplies,
    pub resolver: Arc<dyn MiniAppUrlResolver>,
    pub polling: PollingConfig,
    pub seed_demo_data: bool,
}

impl BotComponents {
    /// Default replies, no mini-app candidates, no demo seeding.
    pub fn new(store: BotStore, polling: PollingConfig) -> Self {
        Self {
            store,
            replies: BotReplies::default(),
            resolver: Arc::new(CandidateUrlResolver::default()),
            polling,
            seed_demo_data: false,
        }
    }

    pub fn with_replies(mut self, replies: BotReplies) -> Self {
        self.replies = replies;
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn MiniAppUrlResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_demo_seed(mut self, enabled: bool) -> Self {
        self.seed_demo_data = enabled;
        self
    }

    pub fn events(&self) -> EventLog {
        self.store.event_log()
    }

    /// Router whose replies go out through `transport`.
    pub fn router(&self, transport: Arc<dyn Transport>) -> UpdateRouter {
        UpdateRouter::build(
            &self.store,
            transport,
            self.replies.clone(),
            self.resolver.clone(),
        )
    }
}

/// Opens the store and builds components from config. A token from the environment is saved as
/// the `telegram_token` setting when none is stored yet.
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let store = BotStore::connect(config.database_url())
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.database_url(),
                "Failed to initialize storage"
            );
            anyhow::anyhow!("Failed to initialize storage: {}", e)
        })?;

    if let Some(token) = config.bot_token() {
        if store.settings().set_if_absent(TELEGRAM_TOKEN_KEY, token).await? {
            info!("Stored bot token from environment as initial setting");
        }
    }

    let resolver = config.miniapp.resolver()?;
    if resolver.candidates().is_empty() {
        info!("No mini-app URL configured; /start will be sent without a button");
    }

    Ok(BotComponents::new(store, config.polling.clone())
        .with_replies(BotReplies::default().with_echo_template(config.echo_template.clone()))
        .with_resolver(Arc::new(resolver))
        .with_demo_seed(config.seed_demo_data))
}

/// Production factory: one teloxide transport per start, pointed at `api_url` when set. The HTTP
/// client is sized to hold a `poll_timeout` long-poll.
pub fn telegram_transport_factory(
    api_url: Option<&str>,
    poll_timeout: Duration,
) -> Result<TransportFactory> {
    let api_url = api_url
        .map(reqwest::Url::parse)
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid TELEGRAM_API_URL: {}", e))?;
    Ok(Arc::new(move |token: &str| {
        if token.trim().is_empty() {
            return Err(DbotError::Config("empty bot token".to_string()));
        }
        let transport: Arc<dyn Transport> = Arc::new(TelegramTransport::with_poll_timeout(
            token,
            api_url.clone(),
            poll_timeout,
        )?);
        Ok(transport)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: The production factory builds a transport for a 45s long-poll and rejects an
    /// empty token or a bad API URL.**
    #[test]
    fn test_telegram_factory() {
        let factory = telegram_transport_factory(None, Duration::from_secs(45)).unwrap();
        assert!(factory("123:abc").is_ok());
        assert!(matches!(factory("  "), Err(DbotError::Config(_))));

        assert!(telegram_transport_factory(Some("::bad::"), Duration::from_secs(30)).is_err());
    }
}
