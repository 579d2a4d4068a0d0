//! Classifies the message text, sends the reply and hands the recorded text to later handlers.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, OutgoingMessage, ReplyMarkup, Result, Transport};
use tracing::{debug, info, instrument, warn};

use crate::miniapp::MiniAppUrlResolver;
use crate::replies::{BotReplies, MINIAPP_BUTTON_MARKER};

/// What an inbound text asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    About,
    /// Slash command outside the fixed set; carries the normalized token.
    Unknown(String),
    /// Plain text.
    Echo,
}

impl Command {
    /// The token before the first space, lower-cased. `/help@some_bot` is not `/help`.
    pub fn parse(text: &str) -> Self {
        if !text.starts_with('/') {
            return Command::Echo;
        }
        let token = text.split(' ').next().unwrap_or(text).to_lowercase();
        match token.as_str() {
            "/start" => Command::Start,
            "/help" => Command::Help,
            "/about" => Command::About,
            _ => Command::Unknown(token),
        }
    }
}

/// Terminal handler: builds the reply for the message, sends it, and returns `Reply(text)` with the
/// text to record. Unknown commands stop the chain without sending anything. A failed send is
/// logged and still returns `Reply`.
pub struct CommandHandler {
    transport: Arc<dyn Transport>,
    replies: BotReplies,
    resolver: Arc<dyn MiniAppUrlResolver>,
}

impl CommandHandler {
    pub fn new(
        transport: Arc<dyn Transport>,
        replies: BotReplies,
        resolver: Arc<dyn MiniAppUrlResolver>,
    ) -> Self {
        Self {
            transport,
            replies,
            resolver,
        }
    }

    /// Builds the outbound message and the text recorded for it.
    fn start_reply(&self, message: &Message) -> (OutgoingMessage, String) {
        let first_name = message.user.first_name.as_deref().unwrap_or_default();
        let welcome = self.replies.welcome(first_name);
        let outgoing = OutgoingMessage::text(message.chat.id, welcome.clone());
        match self.resolver.resolve(message.user.id) {
            Some(url) => {
                let outgoing = outgoing.with_markup(ReplyMarkup::WebAppButton {
                    text: self.replies.miniapp_button_text.clone(),
                    url: url.to_string(),
                });
                (outgoing, format!("{}{}", welcome, MINIAPP_BUTTON_MARKER))
            }
            None => {
                warn!(
                    user_id = message.user.id,
                    "No mini-app URL configured, sending /start without button"
                );
                (outgoing, welcome)
            }
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let command = Command::parse(&message.content);
        let chat_id = message.chat.id;

        let (outgoing, recorded) = match &command {
            Command::Unknown(token) => {
                debug!(command = %token, "Unrecognized command ignored");
                return Ok(HandlerResponse::Stop);
            }
            Command::Start => self.start_reply(message),
            Command::Help => {
                let text = self.replies.help.clone();
                (OutgoingMessage::text(chat_id, text.clone()), text)
            }
            Command::About => {
                let text = self.replies.about.clone();
                (OutgoingMessage::text(chat_id, text.clone()), text)
            }
            Command::Echo => {
                let text = self.replies.echo(&message.content);
                (OutgoingMessage::text(chat_id, text.clone()), text)
            }
        };

        match self.transport.send_message(&outgoing).await {
            Ok(()) => info!(command = ?command, "Reply sent"),
            Err(e) => warn!(command = ?command, error = %e, "Reply not delivered"),
        }

        Ok(HandlerResponse::Reply(recorded))
    }
}
