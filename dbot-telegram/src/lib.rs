//! # dbot-telegram
//!
//! Telegram side of the bot: [`TelegramTransport`] implements [`dbot_core::Transport`] over teloxide,
//! adapters turn teloxide updates into core [`dbot_core::Update`]s, and [`TelegramConfig`] carries the
//! token and optional API base URL. No persistence and no routing logic live here.

mod adapters;
mod config;
mod transport;

pub use adapters::{to_inline_keyboard, TelegramUpdateWrapper, TelegramUserWrapper};
pub use config::TelegramConfig;
pub use transport::{TelegramTransport, DEFAULT_POLL_TIMEOUT};
