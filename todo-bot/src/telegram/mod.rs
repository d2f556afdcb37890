//! Telegram layer: converts teloxide updates to core events, renders replies, and runs the
//! long-polling dispatcher.

mod adapters;
mod keyboard;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, ToCoreCallback, ToCoreMessage};
pub use keyboard::{parse_mode, to_markup, MAX_KEYBOARD_ROWS};
pub use runner::{register_commands, run_dispatcher, send_reply};
