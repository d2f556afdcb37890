//! Unit tests for SqliteTaskRepository.
//!
//! Covers add/list/get, completion and deletion idempotency, and per-chat filtering.

use crate::models::Task;
use crate::repository::TaskRepository;
use crate::sqlite_repo::SqliteTaskRepository;
use crate::StorageError;

async fn memory_repo() -> SqliteTaskRepository {
    SqliteTaskRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository")
}

#[tokio::test]
async fn test_add_then_list_contains_task_once() {
    let repo = memory_repo().await;
    let task = Task::new("Buy milk", 100);

    repo.add(&task).await.expect("Failed to add task");

    let tasks = repo.list(100).await.expect("Failed to list tasks");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0], task);
    assert!(!tasks[0].done);
}

#[tokio::test]
async fn test_add_duplicate_id_is_conflict() {
    let repo = memory_repo().await;
    let task = Task::new("Buy milk", 100);

    repo.add(&task).await.expect("Failed to add task");
    let err = repo.add(&task).await.unwrap_err();

    assert!(matches!(err, StorageError::Conflict(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_get_existing_and_missing() {
    let repo = memory_repo().await;
    let task = Task::new("Walk the dog", 7);
    repo.add(&task).await.unwrap();

    let found = repo.get(&task.id).await.unwrap();
    assert_eq!(found, Some(task));

    let missing = repo.get("non-existent-id").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_get_ignores_chat_scope() {
    let repo = memory_repo().await;
    let task = Task::new("Other chat task", 200);
    repo.add(&task).await.unwrap();

    let found = repo.get(&task.id).await.unwrap().expect("task should be found");
    assert_eq!(found.chat_id, 200);
}

#[tokio::test]
async fn test_complete_twice_reports_change_once() {
    let repo = memory_repo().await;
    let task = Task::new("Buy milk", 100);
    repo.add(&task).await.unwrap();

    assert!(repo.complete(&task.id).await.unwrap());
    assert!(!repo.complete(&task.id).await.unwrap());

    let stored = repo.get(&task.id).await.unwrap().unwrap();
    assert!(stored.done);
}

#[tokio::test]
async fn test_complete_missing_returns_false() {
    let repo = memory_repo().await;
    assert!(!repo.complete("missing").await.unwrap());
}

#[tokio::test]
async fn test_delete_existing_then_missing() {
    let repo = memory_repo().await;
    let task = Task::new("Buy milk", 100);
    repo.add(&task).await.unwrap();

    assert!(repo.delete(&task.id).await.unwrap());
    assert!(!repo.delete(&task.id).await.unwrap());
    assert!(repo.get(&task.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_incomplete_excludes_done() {
    let repo = memory_repo().await;
    let open = Task::new("open", 100);
    let done = Task::new("done", 100);
    repo.add(&open).await.unwrap();
    repo.add(&done).await.unwrap();
    repo.complete(&done.id).await.unwrap();

    let incomplete = repo.list_incomplete(100).await.unwrap();
    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].id, open.id);
    assert!(incomplete.iter().all(|t| !t.done));
}

#[tokio::test]
async fn test_count_and_list_are_scoped_by_chat() {
    let repo = memory_repo().await;
    for i in 0..3 {
        repo.add(&Task::new(format!("a{}", i), 1)).await.unwrap();
    }
    repo.add(&Task::new("b0", 2)).await.unwrap();

    assert_eq!(repo.count(1).await.unwrap(), 3);
    assert_eq!(repo.count(2).await.unwrap(), 1);
    assert_eq!(repo.count(3).await.unwrap(), 0);

    let chat_two = repo.list(2).await.unwrap();
    assert_eq!(chat_two.len(), 1);
    assert!(chat_two.iter().all(|t| t.chat_id == 2));
}

#[tokio::test]
async fn test_count_includes_done_tasks() {
    let repo = memory_repo().await;
    let task = Task::new("done", 5);
    repo.add(&task).await.unwrap();
    repo.complete(&task.id).await.unwrap();

    assert_eq!(repo.count(5).await.unwrap(), 1);
}

#[tokio::test]
async fn test_closed_repository_is_unavailable() {
    let repo = memory_repo().await;
    repo.close().await;

    let err = repo.list(1).await.unwrap_err();
    assert!(err.is_unavailable(), "got {:?}", err);
}
