//! Core types: user, chat, message, update, outgoing message, handler response, and Handler trait.
//!
//! Types are split into one file per main type for easier navigation.

mod chat;
mod handler;
mod message;
mod outgoing;
mod response;
mod update;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreUpdate, ToCoreUser};
pub use message::{Message, MessageDirection};
pub use outgoing::{OutgoingMessage, ReplyMarkup};
pub use response::HandlerResponse;
pub use update::{BotIdentity, Update, UpdatePayload};
pub use user::User;
