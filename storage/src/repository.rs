//! Repository trait for task persistence. Implementations ([`crate::PgTaskRepository`],
//! [`crate::SqliteTaskRepository`]) provide the concrete SQL.

use async_trait::async_trait;

use super::error::StorageError;
use super::models::Task;

/// Task CRUD. Every operation is a single independent statement; none is transactional.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new row for `task.chat_id`. Fails with `Conflict` if the id already exists.
    async fn add(&self, task: &Task) -> Result<(), StorageError>;
    /// All tasks of the chat; order is unspecified.
    async fn list(&self, chat_id: i64) -> Result<Vec<Task>, StorageError>;
    /// Tasks of the chat that are not done yet.
    async fn list_incomplete(&self, chat_id: i64) -> Result<Vec<Task>, StorageError>;
    /// Looks a task up by id alone, regardless of owning chat.
    async fn get(&self, task_id: &str) -> Result<Option<Task>, StorageError>;
    /// Number of tasks of the chat, done or not.
    async fn count(&self, chat_id: i64) -> Result<i64, StorageError>;
    /// Marks the task done; false when the id is absent or the task was already done.
    async fn complete(&self, task_id: &str) -> Result<bool, StorageError>;
    /// Removes the task; false when no row was removed.
    async fn delete(&self, task_id: &str) -> Result<bool, StorageError>;
    /// Releases pooled connections. Further calls fail with `Unavailable`.
    async fn close(&self) {}
}
