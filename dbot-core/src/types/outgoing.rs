//! Outbound message and interactive control types.

use serde::{Deserialize, Serialize};

/// Interactive control attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyMarkup {
    /// Single-row, single-button keyboard whose button opens an embedded web view at `url`.
    WebAppButton { text: String, url: String },
}

/// A message the bot intends to send. Text is HTML (parse mode is fixed by the transport).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub chat_id: i64,
    pub text: String,
    pub reply_markup: Option<ReplyMarkup>,
}

impl OutgoingMessage {
    /// Plain text message without a keyboard.
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            reply_markup: None,
        }
    }

    /// Attaches an interactive control.
    pub fn with_markup(mut self, markup: ReplyMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }
}
