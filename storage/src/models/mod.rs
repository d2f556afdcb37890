//! Data models for storage.
//!
//! Used by the task repositories and their callers.

mod task;

pub use task::Task;
