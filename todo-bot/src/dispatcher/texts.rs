//! User-facing texts.

use std::borrow::Cow;

use teloxide::utils::html;

pub const WELCOME: &str = "Welcome! Please check the menu to see what I can do!";

pub const HELP: &str = "Available commands:\n\
    /start - start interacting with the bot\n\
    /help - see the available commands list\n\
    /create - create a new task\n\
    /list - see your task list\n\
    /complete - mark a task as completed\n\
    /delete - delete a task from your task list\n";

pub const ENTER_TASK: &str = "Enter your task";
pub const LIST_HEADER: &str = "Your task list \u{1F447}";
pub const COMPLETE_HEADER: &str = "Select a task to mark as completed:";
pub const DELETE_HEADER: &str = "Select a task you want to delete";

pub const EMPTY_LIST: &str =
    "You don't have any tasks in your list. To start adding tasks, use the /create command";
pub const ALL_COMPLETED: &str = "You have all tasks in your list marked as completed";

pub const UNKNOWN_COMMAND: &str =
    "This command is unknown to me. Please check my command list and try again";
pub const NOT_UNDERSTOOD: &str = "Sorry, I don't understand you. Please try again";

pub const ALREADY_COMPLETED: &str = "Task has already been marked as completed.";
pub const ALREADY_DELETED: &str = "Task has already been deleted.";
pub const UNKNOWN_ACTION: &str = "This button is not supported anymore.";
pub const FAILURE: &str = "Something went wrong. Please try again later.";

const DONE_MARK: &str = "\u{2705}";
const OPEN_MARK: &str = "\u{25FD}";
const DELETE_MARK: &str = "\u{274C}";

/// Longest task name shown in replies and button labels. Keeps callback answers under
/// Telegram's 200-character limit and messages far below 4096.
pub const MAX_NAME_CHARS: usize = 64;

/// The name cut to [`MAX_NAME_CHARS`] characters, with a trailing ellipsis when cut.
pub fn short_name(name: &str) -> Cow<'_, str> {
    match name.char_indices().nth(MAX_NAME_CHARS - 1) {
        Some((end, _)) if name.chars().count() > MAX_NAME_CHARS => {
            Cow::Owned(format!("{}\u{2026}", &name[..end]))
        }
        _ => Cow::Borrowed(name),
    }
}

/// HTML; the name is shortened, then escaped.
pub fn task_created(name: &str) -> String {
    format!("Task <b>{}</b> created!", html::escape(&short_name(name)))
}

pub fn task_shown(name: &str) -> String {
    format!("Task '{}' is in your list", short_name(name))
}

pub fn task_completed(name: &str) -> String {
    format!("Task '{}' marked as completed.", short_name(name))
}

pub fn task_deleted(name: &str) -> String {
    format!("Task '{}' deleted.", short_name(name))
}

pub fn list_label(name: &str, done: bool) -> String {
    let mark = if done { DONE_MARK } else { OPEN_MARK };
    format!("{}{}", mark, short_name(name))
}

pub fn complete_label(name: &str) -> String {
    format!("{} {}", OPEN_MARK, short_name(name))
}

pub fn delete_label(name: &str) -> String {
    format!("{} {}", DELETE_MARK, short_name(name))
}
