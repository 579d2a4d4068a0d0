//! Unit test module
//!
//! Handler unit tests live here, separate from source files. Storage runs on in-memory SQLite;
//! the transport is a recording double.


use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{
    BotIdentity, Chat, DbotError, Message, MessageDirection, OutgoingMessage, Result, Transport,
    Update, User,
};

/// Builds an inbound text message from user 42 (`alice`) in chat 5.
pub(crate) fn incoming(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        content: content.to_string(),
        user: User {
            id: 42,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 5,
            chat_type: "private".to_string(),
        },
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

/// Records every sent message; optionally fails every send.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    pub sent: Mutex<Vec<OutgoingMessage>>,
    pub fail_sends: bool,
}

impl RecordingTransport {
    pub fn failing() -> Self {
        Self {
            fail_sends: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_message(&self, message: &OutgoingMessage) -> Result<()> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail_sends {
            return Err(DbotError::Transport("connection reset".to_string()));
        }
        Ok(())
    }

    async fn fetch_updates(
        &self,
        _offset: Option<i64>,
        _timeout: std::time::Duration,
    ) -> Result<Vec<Update>> {
        Ok(Vec::new())
    }

    async fn get_me(&self) -> Result<BotIdentity> {
        Ok(BotIdentity {
            id: 1,
            username: Some("test_bot".to_string()),
        })
    }
}
