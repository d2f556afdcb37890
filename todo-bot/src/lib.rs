//! # Telegram to-do bot
//!
//! Wires the task store, the session tracker, and the command/callback dispatcher, then runs
//! the teloxide long-polling loop. Config is loaded from env.

pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod dispatcher;
pub mod runner;
pub mod session;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, BotError, Button, CallbackAction, CallbackQuery, Message, Reply, Result,
    SessionState, TextFormat,
};

pub use config::{BotConfig, DatabaseConfig};
pub use dispatcher::{Command, CommandDispatcher};
pub use runner::run_bot;
pub use session::SessionStore;

pub use components::{build_bot_components, create_task_repository, BotComponents};
