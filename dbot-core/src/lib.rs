//! # dbot-core
//!
//! Core types and traits for the managed Telegram bot: [`Transport`], [`Handler`], update, message
//! and user types, error types, and tracing initialization. Transport-agnostic; used by
//! dbot-telegram, handler-chain, handlers and dbot-admin.

pub mod error;
pub mod logger;
pub mod mask;
pub mod transport;
pub mod types;

pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use mask::mask_token;
pub use transport::Transport;
pub use types::{
    BotIdentity, Chat, Handler, HandlerResponse, Message, MessageDirection, OutgoingMessage,
    ReplyMarkup, ToCoreUpdate, ToCoreUser, Update, UpdatePayload, User,
};
