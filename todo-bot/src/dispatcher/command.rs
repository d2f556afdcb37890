//! Slash commands understood by the bot.

use teloxide::utils::command::BotCommands;

/// Commands shown in the Telegram menu. Parsing accepts an `@<bot username>` suffix.
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "start interacting with the bot")]
    Start,
    #[command(description = "see the available commands list")]
    Help,
    #[command(description = "create a new task")]
    Create,
    #[command(description = "see your task list")]
    List,
    #[command(description = "mark a task as completed")]
    Complete,
    #[command(description = "delete a task from your task list")]
    Delete,
}

impl Command {
    /// `None` for anything that is not exactly one known command.
    pub fn recognize(text: &str, bot_username: &str) -> Option<Self> {
        Self::parse(text.trim(), bot_username).ok()
    }
}
