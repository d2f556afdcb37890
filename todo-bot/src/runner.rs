use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, instrument, warn};

use crate::core::init_tracing;
use crate::dispatcher::CommandDispatcher;
use crate::session::SessionStore;
use crate::telegram::{register_commands, run_dispatcher};

use super::components::build_bot_components;
use super::config::BotConfig;

/// Main entry: validate config, init logging, build components, register the command menu,
/// then receive updates until a shutdown signal. Closes the task store before returning.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(store = %config.database.describe(), "Initializing bot");

    let components = build_bot_components(&config).await?;
    let bot = components.teloxide_bot.clone();

    let bot_username = fetch_bot_username(&bot).await;
    register_commands(&bot).await;

    let dispatcher = Arc::new(CommandDispatcher::new(
        components.repo.clone(),
        SessionStore::new(),
        bot_username,
    ));

    info!("Bot started successfully");

    run_dispatcher(bot, dispatcher).await;

    components.repo.close().await;
    info!("Task store closed, bye");

    Ok(())
}

/// Username used to accept `/command@username`; empty if `get_me` fails.
async fn fetch_bot_username(bot: &Bot) -> String {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone().unwrap_or_default();
            info!(username = %username, "Bot username resolved");
            username
        }
        Err(e) => {
            warn!(error = %e, "get_me failed; addressed commands will not be recognized");
            String::new()
        }
    }
}
