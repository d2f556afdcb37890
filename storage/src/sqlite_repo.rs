//! SQLite task repository, used for local runs and tests.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::Task;
use crate::repository::TaskRepository;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SqliteTaskRepository {
    pool_manager: SqlitePoolManager,
}

impl SqliteTaskRepository {
    /// Opens (or creates) the database and ensures the `tasks` table exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating tasks table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                isdone BOOLEAN NOT NULL DEFAULT FALSE,
                chatid BIGINT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_chatid ON tasks(chatid)")
            .execute(pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn add(&self, task: &Task) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO tasks (id, name, isdone, chatid) VALUES (?, ?, ?, ?)")
            .bind(&task.id)
            .bind(&task.name)
            .bind(task.done)
            .bind(task.chat_id)
            .execute(self.pool_manager.pool())
            .await?;

        debug!(task_id = %task.id, chat_id = task.chat_id, "Saved task");
        Ok(())
    }

    async fn list(&self, chat_id: i64) -> Result<Vec<Task>, StorageError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, name, isdone, chatid FROM tasks WHERE chatid = ?",
        )
        .bind(chat_id)
        .fetch_all(self.pool_manager.pool())
        .await?;
        Ok(tasks)
    }

    async fn list_incomplete(&self, chat_id: i64) -> Result<Vec<Task>, StorageError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, name, isdone, chatid FROM tasks WHERE chatid = ? AND isdone = FALSE",
        )
        .bind(chat_id)
        .fetch_all(self.pool_manager.pool())
        .await?;
        Ok(tasks)
    }

    async fn get(&self, task_id: &str) -> Result<Option<Task>, StorageError> {
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, name, isdone, chatid FROM tasks WHERE id = ?",
        )
        .bind(task_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;
        Ok(task)
    }

    async fn count(&self, chat_id: i64) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE chatid = ?")
            .bind(chat_id)
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count)
    }

    async fn complete(&self, task_id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("UPDATE tasks SET isdone = TRUE WHERE id = ? AND isdone = FALSE")
            .bind(task_id)
            .execute(self.pool_manager.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, task_id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(self.pool_manager.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        self.pool_manager.pool().close().await;
    }
}
