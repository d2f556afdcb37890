//! `mockall` double of [`storage::TaskRepository`] for races and store failures that a real
//! database cannot reproduce on demand.

use async_trait::async_trait;
use mockall::mock;
use storage::{StorageError, Task, TaskRepository};

mock! {
    pub Repo {}

    #[async_trait]
    impl TaskRepository for Repo {
        async fn add(&self, task: &Task) -> Result<(), StorageError>;
        async fn list(&self, chat_id: i64) -> Result<Vec<Task>, StorageError>;
        async fn list_incomplete(&self, chat_id: i64) -> Result<Vec<Task>, StorageError>;
        async fn get(&self, task_id: &str) -> Result<Option<Task>, StorageError>;
        async fn count(&self, chat_id: i64) -> Result<i64, StorageError>;
        async fn complete(&self, task_id: &str) -> Result<bool, StorageError>;
        async fn delete(&self, task_id: &str) -> Result<bool, StorageError>;
    }
}

/// A task with a fixed id, as returned by a fetch that happened before a concurrent mutation.
pub fn stale_task(name: &str, chat_id: i64, done: bool) -> Task {
    Task {
        id: "4b0a3c1e-0000-4000-8000-000000000001".to_string(),
        name: name.to_string(),
        done,
        chat_id,
    }
}
