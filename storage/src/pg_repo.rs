//! PostgreSQL task repository: the production store.
//!
//! Each call acquires a pooled connection for one statement and returns it immediately.

use std::time::Duration;

use async_trait::async_trait;
use log::info;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::error::StorageError;
use crate::models::Task;
use crate::repository::TaskRepository;

/// How long startup and each statement wait for a connection before the store counts as down.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    /// Connects with explicit options (host, port, database, credentials).
    pub async fn connect_with(
        options: PgConnectOptions,
        max_connections: u32,
    ) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;
        let repo = Self { pool };
        repo.init().await?;
        Ok(repo)
    }

    /// Connects with a `postgres://` URL.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let options: PgConnectOptions = database_url.parse()?;
        Self::connect_with(options, max_connections).await
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating tasks table if not exist");

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
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_chatid ON tasks(chatid)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn add(&self, task: &Task) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO tasks (id, name, isdone, chatid) VALUES ($1, $2, $3, $4)")
            .bind(&task.id)
            .bind(&task.name)
            .bind(task.done)
            .bind(task.chat_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list(&self, chat_id: i64) -> Result<Vec<Task>, StorageError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, name, isdone, chatid FROM tasks WHERE chatid = $1",
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    async fn list_incomplete(&self, chat_id: i64) -> Result<Vec<Task>, StorageError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, name, isdone, chatid FROM tasks WHERE chatid = $1 AND isdone = FALSE",
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    async fn get(&self, task_id: &str) -> Result<Option<Task>, StorageError> {
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, name, isdone, chatid FROM tasks WHERE id = $1",
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(task)
    }

    async fn count(&self, chat_id: i64) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE chatid = $1")
            .bind(chat_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn complete(&self, task_id: &str) -> Result<bool, StorageError> {
        let result =
            sqlx::query("UPDATE tasks SET isdone = TRUE WHERE id = $1 AND isdone = FALSE")
                .bind(task_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, task_id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(task_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
