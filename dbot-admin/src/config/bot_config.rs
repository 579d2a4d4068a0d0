//! BotConfig: BaseConfig + PollingConfig + MiniAppConfig + reply/seed options. Use load() for
//! env-based loading, then validate() to fail fast before init.

use anyhow::Result;
use handlers::DEFAULT_ECHO_TEMPLATE;
use std::env;

use super::{BaseConfig, MiniAppConfig, PollingConfig};

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub polling: PollingConfig,
    pub miniapp: MiniAppConfig,
    /// ECHO_TEMPLATE: `{text}` is replaced by the inbound text
    pub echo_template: String,
    /// SEED_DEMO_DATA: insert demo users/messages into an empty store at loop start
    pub seed_demo_data: bool,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let polling = PollingConfig::from_env()?;
        let miniapp = MiniAppConfig::from_env()?;
        let echo_template = env::var("ECHO_TEMPLATE")
            .ok()
            .filter(|s| s.contains("{text}"))
            .unwrap_or_else(|| DEFAULT_ECHO_TEMPLATE.to_string());
        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(Self {
            base,
            polling,
            miniapp,
            echo_template,
            seed_demo_data,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.polling.validate()?;
        self.miniapp.validate()
    }

    pub fn bot_token(&self) -> Option<&str> {
        self.base.bot_token.as_deref()
    }
    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
