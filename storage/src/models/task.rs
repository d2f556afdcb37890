//! Task model for persistence.
//!
//! Maps to the `tasks` table (`id`, `name`, `isdone`, `chatid`).

use uuid::Uuid;

/// One to-do item owned by a chat.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Task {
    /// Primary key (UUID v4 string), unique across all chats.
    pub id: String,
    /// Free-text description entered by the user.
    pub name: String,
    /// Set once by completion; never reset.
    #[sqlx(rename = "isdone")]
    pub done: bool,
    /// Owning chat.
    #[sqlx(rename = "chatid")]
    pub chat_id: i64,
}

impl Task {
    /// Creates a not-yet-done task with a generated id.
    pub fn new(name: impl Into<String>, chat_id: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            done: false,
            chat_id,
        }
    }
}
