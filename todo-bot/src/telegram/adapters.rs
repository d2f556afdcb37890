//! Conversions from teloxide types to core events.

use crate::core::{CallbackQuery, Message};

/// Converts a transport message to a core [`Message`]; `None` when it carries no text.
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Option<Message>;
}

/// Converts a transport callback query to a core [`CallbackQuery`]; `None` without data.
pub trait ToCoreCallback: Send + Sync {
    fn to_core(&self) -> Option<CallbackQuery>;
}

/// Telegram message to core message.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Option<Message> {
        let text = self.0.text()?;
        let user_id = self.0.from.as_ref().map(|u| u.id.0 as i64).unwrap_or(0);
        Some(Message::new(self.0.chat.id.0, user_id, text))
    }
}

/// Telegram callback query to core callback.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreCallback for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Option<CallbackQuery> {
        let data = self.0.data.as_ref()?;
        let chat_id = self.0.message.as_ref().map(|m| m.chat().id.0);
        Some(CallbackQuery::new(chat_id, self.0.from.id.0 as i64, data.clone()))
    }
}
