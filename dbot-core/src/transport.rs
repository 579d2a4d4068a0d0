//! Message transport abstraction: outbound send, inbound long-poll fetch, identity lookup.
//!
//! [`Transport`] is transport-agnostic; dbot-telegram implements it via teloxide and tests substitute
//! a recording double.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{BotIdentity, OutgoingMessage, Update};

/// Request/response access to the remote messaging API. Implementations are stateless apart
/// from the bound token and hold no persistence.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one message (HTML parse mode, optional inline keyboard). `Err` means "not delivered";
    /// implementations log the cause before returning it.
    async fn send_message(&self, message: &OutgoingMessage) -> Result<()>;

    /// Long-polls for updates. `offset` is the next expected update id and is omitted on the first
    /// call; `timeout` bounds the server-side wait. A failed call yields `Err`, never partial data.
    async fn fetch_updates(&self, offset: Option<i64>, timeout: Duration) -> Result<Vec<Update>>;

    /// Returns the bot's own identity; used once at loop start to confirm the token.
    async fn get_me(&self) -> Result<BotIdentity>;
}
