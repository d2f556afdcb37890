//! Inbound events, reduced to what the dispatcher needs.

/// A text message sent in a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub chat_id: i64,
    pub user_id: i64,
    pub text: String,
}

/// A button press. `chat_id` is the chat the button was rendered in, when Telegram still
/// has that message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackQuery {
    pub user_id: i64,
    pub chat_id: Option<i64>,
    pub data: String,
}

impl Message {
    pub fn new(chat_id: i64, user_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            user_id,
            text: text.into(),
        }
    }

    /// Slash commands are routed by keyword; everything else by session state.
    pub fn is_command(&self) -> bool {
        self.text.starts_with('/')
    }
}

impl CallbackQuery {
    pub fn new(chat_id: Option<i64>, user_id: i64, data: impl Into<String>) -> Self {
        Self {
            user_id,
            chat_id,
            data: data.into(),
        }
    }
}
