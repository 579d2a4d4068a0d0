//! Adapters from Telegram (teloxide) types to dbot_core types, and from core reply markup back to
//! teloxide keyboards. Depends only on teloxide and dbot_core type definitions.

use dbot_core::{
    Chat, DbotError, Message, MessageDirection, ReplyMarkup, Result, ToCoreUpdate, ToCoreUser,
    Update, UpdatePayload, User,
};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, UpdateKind, WebAppInfo};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Update and classifies it into a core [`Update`].
///
/// Text message with a sender → [`UpdatePayload::Message`]; message without sender or an update
/// teloxide could not parse → [`UpdatePayload::Malformed`]; everything else → [`UpdatePayload::NonText`].
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Update);

impl<'a> ToCoreUpdate for TelegramUpdateWrapper<'a> {
    fn to_core(&self) -> Update {
        let id = self.0.id.0 as i64;
        let payload = match &self.0.kind {
            UpdateKind::Message(msg) => classify_message(msg),
            UpdateKind::Error(raw) => {
                UpdatePayload::Malformed(format!("unparseable update: {}", raw))
            }
            _ => UpdatePayload::NonText,
        };
        Update { id, payload }
    }
}

fn classify_message(msg: &teloxide::types::Message) -> UpdatePayload {
    let Some(from) = msg.from.as_ref() else {
        return UpdatePayload::Malformed(format!(
            "message {} in chat {} has no sender",
            msg.id.0, msg.chat.id.0
        ));
    };
    let Some(text) = msg.text() else {
        return UpdatePayload::NonText;
    };
    UpdatePayload::Message(Message {
        id: msg.id.0.to_string(),
        user: TelegramUserWrapper(from).to_core(),
        chat: Chat {
            id: msg.chat.id.0,
            chat_type: chat_type(&msg.chat).to_string(),
        },
        content: text.to_string(),
        direction: MessageDirection::Incoming,
        created_at: msg.date,
    })
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_group() {
        "group"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

/// Converts core reply markup to a single-row, single-button inline keyboard.
pub fn to_inline_keyboard(markup: &ReplyMarkup) -> Result<InlineKeyboardMarkup> {
    match markup {
        ReplyMarkup::WebAppButton { text, url } => {
            let url = reqwest::Url::parse(url).map_err(|e| {
                DbotError::Transport(format!("invalid web app url {}: {}", url, e))
            })?;
            let button = InlineKeyboardButton::web_app(text.clone(), WebAppInfo { url });
            Ok(InlineKeyboardMarkup::new(vec![vec![button]]))
        }
    }
}
