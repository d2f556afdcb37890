//! Long-polling runner: builds the dptree handler tree (messages and callback queries), hands
//! each update to the [`CommandDispatcher`], and stops on Ctrl-C or SIGTERM after in-flight
//! updates finish.

use std::sync::Arc;

use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, ToCoreCallback, ToCoreMessage};
use super::keyboard::{parse_mode, to_markup, MAX_KEYBOARD_ROWS};
use crate::core::{Reply, Result};
use crate::dispatcher::{Command, CommandDispatcher};

/// Sends a reply with its parse mode and inline keyboard. Keyboards longer than
/// [`MAX_KEYBOARD_ROWS`] go out as several messages.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> Result<()> {
    for page in reply.clone().pages(MAX_KEYBOARD_ROWS) {
        let mut request = bot.send_message(chat_id, page.text.clone());
        if let Some(mode) = parse_mode(&page) {
            request = request.parse_mode(mode);
        }
        if let Some(markup) = to_markup(&page) {
            request = request.reply_markup(markup);
        }
        request.await?;
    }
    Ok(())
}

/// Publishes the command menu. Failure is logged; the bot still works without a menu.
pub async fn register_commands(bot: &Bot) {
    match bot.set_my_commands(Command::bot_commands()).await {
        Ok(_) => info!("Command menu registered"),
        Err(e) => warn!(error = %e, "Failed to register command menu"),
    }
}

/// Runs the dispatcher until a shutdown signal arrives.
#[instrument(skip(bot, todo))]
pub async fn run_dispatcher(bot: Bot, todo: Arc<CommandDispatcher>) {
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback_query));

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![todo])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in update handler",
        ))
        .build();

    let shutdown_token = dispatcher.shutdown_token();
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        info!("Shutdown signal received, waiting for in-flight updates");
        match shutdown_token.shutdown() {
            Ok(done) => done.await,
            Err(_) => debug!("Dispatcher was not running at shutdown"),
        }
    });

    info!("Dispatcher started, receiving updates");
    dispatcher.dispatch().await;
    info!("Dispatcher stopped");
}

async fn handle_message(
    bot: Bot,
    msg: teloxide::types::Message,
    todo: Arc<CommandDispatcher>,
) -> ResponseResult<()> {
    let Some(core_msg) = TelegramMessageWrapper(&msg).to_core() else {
        debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
        return Ok(());
    };

    info!(
        user_id = core_msg.user_id,
        chat_id = core_msg.chat_id,
        message_content = %core_msg.text,
        "Received message"
    );

    if let Some(reply) = todo.on_message(&core_msg).await {
        if let Err(e) = send_reply(&bot, msg.chat.id, &reply).await {
            error!(error = %e, chat_id = core_msg.chat_id, "Failed to send reply");
        }
    }

    Ok(())
}

async fn handle_callback_query(
    bot: Bot,
    query: teloxide::types::CallbackQuery,
    todo: Arc<CommandDispatcher>,
) -> ResponseResult<()> {
    let Some(core_query) = TelegramCallbackWrapper(&query).to_core() else {
        debug!(user_id = query.from.id.0, "Ignoring callback query without data");
        return Ok(());
    };

    info!(
        user_id = core_query.user_id,
        chat_id = ?core_query.chat_id,
        callback_data = %core_query.data,
        "Received callback query"
    );

    let answer = todo.on_callback(&core_query).await;
    if let Err(e) = bot.answer_callback_query(query.id.clone()).text(answer).await {
        error!(error = %e, user_id = core_query.user_id, "Failed to answer callback query");
    }

    Ok(())
}

async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
