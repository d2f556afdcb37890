//! Integration tests for [`storage::SqliteTaskRepository`] against a file-backed database.
//!
//! Covers durability across reopen and the repository used through `dyn TaskRepository`.

use std::sync::Arc;

use storage::{SqliteTaskRepository, Task, TaskRepository};
use tempfile::TempDir;

/// Returns a fresh SQLite database path in a temp dir so each test gets an isolated DB.
fn fresh_db_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("tasks.db");
    let path_str = path.to_string_lossy().into_owned();
    (dir, path_str)
}

/// **Test: Tasks survive closing and reopening the database file.**
///
/// **Setup:** File DB; add one task, complete it, close the pool.
/// **Action:** Reopen with a new repository and list the chat.
/// **Expected:** The task is present and still marked done.
#[tokio::test]
async fn test_tasks_survive_reopen() {
    let (_dir, path) = fresh_db_path();

    let task = Task::new("Buy milk", 100);
    {
        let repo = SqliteTaskRepository::new(&path)
            .await
            .expect("Failed to create repository");
        repo.add(&task).await.unwrap();
        assert!(repo.complete(&task.id).await.unwrap());
        repo.close().await;
    }

    let repo = SqliteTaskRepository::new(&path)
        .await
        .expect("Failed to reopen repository");
    let tasks = repo.list(100).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, task.id);
    assert!(tasks[0].done);
}

/// **Test: A `sqlite:` URL and a plain path both open the store.**
#[tokio::test]
async fn test_open_with_sqlite_url() {
    let (_dir, path) = fresh_db_path();
    let url = format!("sqlite://{}", path);

    let repo = SqliteTaskRepository::new(&url)
        .await
        .expect("Failed to open with URL");
    repo.add(&Task::new("via url", 1)).await.unwrap();

    assert_eq!(repo.count(1).await.unwrap(), 1);
}

/// **Test: Trait-object usage, as the bot holds it.**
///
/// **Setup:** `Arc<dyn TaskRepository>` over a file DB; two chats with tasks.
/// **Expected:** Listing and counting stay within each chat.
#[tokio::test]
async fn test_dyn_repository_scopes_by_chat() {
    let (_dir, path) = fresh_db_path();
    let repo: Arc<dyn TaskRepository> = Arc::new(SqliteTaskRepository::new(&path).await.unwrap());

    repo.add(&Task::new("first", 10)).await.unwrap();
    repo.add(&Task::new("second", 10)).await.unwrap();
    repo.add(&Task::new("elsewhere", 20)).await.unwrap();

    let chat_ten = repo.list(10).await.unwrap();
    assert_eq!(chat_ten.len(), 2);
    assert!(chat_ten.iter().all(|t| t.chat_id == 10));
    assert_eq!(repo.count(20).await.unwrap(), 1);
}
