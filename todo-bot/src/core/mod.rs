//! Core types: inbound events, replies, session state, callback payloads, error, logger.
//! Transport-agnostic; the telegram module converts to and from teloxide types.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Button, CallbackAction, CallbackQuery, Message, Reply, SessionState, TextFormat,
};
