//! Core types: inbound events, outbound replies, callback payloads, session state.
//!
//! One file per main type, mirroring how the transport layer converts them.

mod callback;
mod message;
mod reply;
mod state;

pub use callback::CallbackAction;
pub use message::{CallbackQuery, Message};
pub use reply::{Button, Reply, TextFormat};
pub use state::SessionState;
