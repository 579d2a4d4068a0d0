//! Bot configuration: BaseConfig (token + Telegram API + log + DB), PollingConfig (loop timing),
//! MiniAppConfig (mini-app URL candidates), combined in BotConfig.

mod base;
mod bot_config;
mod miniapp;
mod polling;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use miniapp::MiniAppConfig;
pub use polling::PollingConfig;
