//! Inbound update and bot identity types.

use serde::{Deserialize, Serialize};

use super::message::Message;

/// What an inbound update carries, as classified by the transport adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UpdatePayload {
    /// A text message with a known sender.
    Message(Message),
    /// Anything without a text payload (stickers, edits, member changes, ...).
    NonText,
    /// Structurally invalid update; the reason is kept for the operational log.
    Malformed(String),
}

/// One inbound event, identified by a monotonically increasing id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub id: i64,
    pub payload: UpdatePayload,
}

impl Update {
    /// Builds a text-message update.
    pub fn message(id: i64, message: Message) -> Self {
        Self {
            id,
            payload: UpdatePayload::Message(message),
        }
    }

    /// Returns the text message, if this update carries one.
    pub fn as_message(&self) -> Option<&Message> {
        match &self.payload {
            UpdatePayload::Message(m) => Some(m),
            _ => None,
        }
    }
}

/// The bot's own account, as reported by the messaging API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    pub id: i64,
    pub username: Option<String>,
}
