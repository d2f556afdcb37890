//! Per-chat input expectation.

/// What kind of free text a chat is expected to send next. Set only by slash commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// `/create` was sent: the next texts are task names.
    CreatingTask,
    /// `/list` was sent: interaction continues through buttons.
    TaskList,
    /// `/complete` was sent: interaction continues through buttons.
    CompletingTask,
    /// `/delete` was sent: interaction continues through buttons.
    DeletingTask,
    #[default]
    NoState,
}
