//! # Command/callback dispatcher
//!
//! Routes slash commands, free text (by session state) and button presses to the task
//! repository and builds the reply. [`CommandDispatcher::on_message`] and
//! [`CommandDispatcher::on_callback`] are the per-update boundary: every failure ends there as
//! a user-facing text plus a log line.

mod command;
pub mod texts;

pub use command::Command;

use std::sync::Arc;

use storage::{Task, TaskRepository};
use tracing::{error, info, instrument, warn};

use crate::core::{
    BotError, Button, CallbackAction, CallbackQuery, Message, Reply, Result, SessionState,
};
use crate::session::SessionStore;

/// Owns the session map and drives the repository. Shared by all update handlers.
pub struct CommandDispatcher {
    repo: Arc<dyn TaskRepository>,
    sessions: SessionStore,
    bot_username: String,
}

impl CommandDispatcher {
    /// `bot_username` is used to accept commands addressed as `/list@<username>`.
    pub fn new(
        repo: Arc<dyn TaskRepository>,
        sessions: SessionStore,
        bot_username: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            sessions,
            bot_username: bot_username.into(),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handles a text message; failures become a generic failure reply.
    pub async fn on_message(&self, message: &Message) -> Option<Reply> {
        match self.handle_message(message).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, chat_id = message.chat_id, "Failed to handle message");
                Some(Reply::text(texts::FAILURE))
            }
        }
    }

    /// Handles a button press and returns the text to answer the query with.
    pub async fn on_callback(&self, query: &CallbackQuery) -> String {
        match self.handle_callback(query).await {
            Ok(answer) => answer,
            Err(e @ BotError::InvalidCallback(_)) => {
                warn!(error = %e, chat_id = ?query.chat_id, "Rejected callback");
                texts::UNKNOWN_ACTION.to_string()
            }
            Err(e) => {
                error!(error = %e, chat_id = ?query.chat_id, "Failed to handle callback");
                texts::FAILURE.to_string()
            }
        }
    }

    /// Slash commands go through the command table, other text through the session state.
    /// `None` means the message is deliberately left unanswered.
    #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
    pub async fn handle_message(&self, message: &Message) -> Result<Option<Reply>> {
        if message.is_command() {
            self.handle_command(message.chat_id, &message.text)
                .await
                .map(Some)
        } else {
            self.handle_text(message.chat_id, &message.text).await
        }
    }

    async fn handle_command(&self, chat_id: i64, text: &str) -> Result<Reply> {
        let command = Command::recognize(text, &self.bot_username);
        info!(chat_id, command = ?command, "Dispatching command");

        match command {
            Some(Command::Start) => Ok(Reply::text(texts::WELCOME)),
            Some(Command::Help) => Ok(Reply::text(texts::HELP)),
            Some(Command::Create) => {
                self.sessions.set(chat_id, SessionState::CreatingTask).await;
                Ok(Reply::text(texts::ENTER_TASK))
            }
            Some(Command::List) => {
                self.sessions.set(chat_id, SessionState::TaskList).await;
                self.task_list(chat_id).await
            }
            Some(Command::Complete) => {
                self.sessions.set(chat_id, SessionState::CompletingTask).await;
                self.completion_choices(chat_id).await
            }
            Some(Command::Delete) => {
                self.sessions.set(chat_id, SessionState::DeletingTask).await;
                self.deletion_choices(chat_id).await
            }
            None => {
                self.sessions.set(chat_id, SessionState::NoState).await;
                Ok(Reply::text(texts::UNKNOWN_COMMAND))
            }
        }
    }

    async fn handle_text(&self, chat_id: i64, text: &str) -> Result<Option<Reply>> {
        match self.sessions.get(chat_id).await {
            // Stays in CreatingTask so several tasks can be entered in a row.
            SessionState::CreatingTask => {
                let task = Task::new(text, chat_id);
                self.repo.add(&task).await?;
                info!(chat_id, task_id = %task.id, task_name = %task.name, "Task created");
                Ok(Some(Reply::html(texts::task_created(&task.name))))
            }
            SessionState::TaskList | SessionState::CompletingTask | SessionState::DeletingTask => {
                Ok(None)
            }
            SessionState::NoState => Ok(Some(Reply::text(texts::NOT_UNDERSTOOD))),
        }
    }

    async fn task_list(&self, chat_id: i64) -> Result<Reply> {
        let tasks = self.repo.list(chat_id).await?;
        if tasks.is_empty() {
            return Ok(Reply::text(texts::EMPTY_LIST));
        }

        let buttons = tasks.into_iter().map(|t| {
            Button::new(
                texts::list_label(&t.name, t.done),
                CallbackAction::Show(t.id),
            )
        });
        Ok(Reply::with_buttons(texts::LIST_HEADER, buttons))
    }

    async fn completion_choices(&self, chat_id: i64) -> Result<Reply> {
        let incomplete = self.repo.list_incomplete(chat_id).await?;
        if incomplete.is_empty() {
            let text = if self.repo.count(chat_id).await? > 0 {
                texts::ALL_COMPLETED
            } else {
                texts::EMPTY_LIST
            };
            return Ok(Reply::text(text));
        }

        let buttons = incomplete
            .into_iter()
            .map(|t| Button::new(texts::complete_label(&t.name), CallbackAction::Complete(t.id)));
        Ok(Reply::with_buttons(texts::COMPLETE_HEADER, buttons))
    }

    async fn deletion_choices(&self, chat_id: i64) -> Result<Reply> {
        let tasks = self.repo.list(chat_id).await?;
        if tasks.is_empty() {
            return Ok(Reply::text(texts::EMPTY_LIST));
        }

        let buttons = tasks
            .into_iter()
            .map(|t| Button::new(texts::delete_label(&t.name), CallbackAction::Delete(t.id)));
        Ok(Reply::with_buttons(texts::DELETE_HEADER, buttons))
    }

    /// Decodes the payload, then fetches before mutating. A task that is gone (or vanishes
    /// between fetch and mutation) yields the matching "already ..." text.
    #[instrument(skip(self, query), fields(chat_id = ?query.chat_id))]
    pub async fn handle_callback(&self, query: &CallbackQuery) -> Result<String> {
        let action: CallbackAction = query.data.parse()?;
        info!(action = %action, "Dispatching callback");

        let task = self.owned_task(action.task_id(), query.chat_id).await?;

        let answer = match (action, task) {
            (CallbackAction::Show(_), Some(task)) => texts::task_shown(&task.name),
            (CallbackAction::Show(_), None) => texts::ALREADY_DELETED.to_string(),

            (CallbackAction::Complete(_), Some(task)) if !task.done => {
                if self.repo.complete(&task.id).await? {
                    info!(task_id = %task.id, "Task completed");
                    texts::task_completed(&task.name)
                } else {
                    texts::ALREADY_COMPLETED.to_string()
                }
            }
            (CallbackAction::Complete(_), _) => texts::ALREADY_COMPLETED.to_string(),

            (CallbackAction::Delete(_), Some(task)) => {
                if self.repo.delete(&task.id).await? {
                    info!(task_id = %task.id, "Task deleted");
                    texts::task_deleted(&task.name)
                } else {
                    texts::ALREADY_DELETED.to_string()
                }
            }
            (CallbackAction::Delete(_), None) => texts::ALREADY_DELETED.to_string(),
        };

        Ok(answer)
    }

    /// Looks the task up by id; a task owned by a different chat than the one the button
    /// was pressed in is treated as absent.
    async fn owned_task(&self, task_id: &str, chat_id: Option<i64>) -> Result<Option<Task>> {
        let task = self.repo.get(task_id).await?;
        Ok(task.filter(|t| chat_id.map_or(true, |c| c == t.chat_id)))
    }
}
