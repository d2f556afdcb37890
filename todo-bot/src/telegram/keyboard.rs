//! Reply rendering: inline keyboard markup and parse mode.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};

use crate::core::{Reply, TextFormat};

/// Rows per message; Telegram rejects inline keyboards much larger than this.
pub const MAX_KEYBOARD_ROWS: usize = 100;

/// Inline keyboard for the reply, or `None` when it has no buttons.
pub fn to_markup(reply: &Reply) -> Option<InlineKeyboardMarkup> {
    if reply.keyboard.is_empty() {
        return None;
    }

    let rows = reply.keyboard.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.action.to_string()))
            .collect::<Vec<_>>()
    });
    Some(InlineKeyboardMarkup::new(rows))
}

pub fn parse_mode(reply: &Reply) -> Option<ParseMode> {
    match reply.format {
        TextFormat::Plain => None,
        TextFormat::Html => Some(ParseMode::Html),
    }
}
