//! Handler that records the conversation: inbound text in before(), the bot's reply in after().

use async_trait::async_trait;
use dbot_core::{DbotError, Handler, HandlerResponse, Message, Result};
use storage::{MessageRepository, NewBotMessage};
use tracing::{error, info, instrument};

/// Appends one inbound BotMessage per routed message, and one outbound BotMessage when the chain
/// ends with `Reply(text)`. The outbound row is what the bot tried to say, delivered or not.
#[derive(Clone)]
pub struct PersistenceHandler {
    repo: MessageRepository,
}

impl PersistenceHandler {
    pub fn new(repo: MessageRepository) -> Self {
        Self { repo }
    }

    async fn save(&self, record: NewBotMessage) -> Result<()> {
        self.repo.append(&record).await.map_err(|e| {
            error!(
                error = %e,
                user_id = record.telegram_user_id,
                is_from_user = record.is_from_user,
                "Failed to save message"
            );
            DbotError::Database(e.to_string())
        })?;
        Ok(())
    }
}

#[async_trait]
impl Handler for PersistenceHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        self.save(NewBotMessage::inbound(message.user.id, message.content.clone()))
            .await?;
        info!(
            user_id = message.user.id,
            message_id = %message.id,
            "step: PersistenceHandler before done, inbound message saved"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        if let HandlerResponse::Reply(text) = response {
            self.save(NewBotMessage::outbound(message.user.id, text.clone()))
                .await?;
            info!(
                user_id = message.user.id,
                "step: PersistenceHandler after done, outbound message saved"
            );
        }
        Ok(())
    }
}
