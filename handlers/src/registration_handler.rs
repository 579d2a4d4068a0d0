//! Creates the BotUser row on first contact.

use async_trait::async_trait;
use dbot_core::{DbotError, Handler, Message, Result};
use storage::{EventLog, NewBotUser, UserRepository};
use tracing::{debug, error, instrument};

/// Inserts a BotUser for previously unseen senders in before() and logs the registration.
/// Existing users are left untouched; profile fields are captured once.
#[derive(Clone)]
pub struct RegistrationHandler {
    users: UserRepository,
    events: EventLog,
}

impl RegistrationHandler {
    pub fn new(users: UserRepository, events: EventLog) -> Self {
        Self { users, events }
    }
}

#[async_trait]
impl Handler for RegistrationHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let user = NewBotUser {
            telegram_id: message.user.id,
            username: message.user.username.clone(),
            first_name: message.user.first_name.clone(),
            last_name: message.user.last_name.clone(),
        };

        let created = self.users.insert_if_absent(&user).await.map_err(|e| {
            error!(error = %e, user_id = message.user.id, "Failed to register user");
            DbotError::Database(e.to_string())
        })?;

        if created {
            self.events
                .info(format!(
                    "New user registered: {} - {}",
                    message.user.id,
                    message.user.username.as_deref().unwrap_or("unknown")
                ))
                .await;
        } else {
            debug!(user_id = message.user.id, "Known user");
        }
        Ok(true)
    }
}
