use crate::{
    domain::{Category, NewTask, Task, TaskId},
    error::Result,
};
use async_trait::async_trait;

pub mod sqlite_storage;

pub use sqlite_storage::SqliteStorage;

/// Storage trait for persisting task rows
#[async_trait]
pub trait Storage: Send + Sync {
    /// Creates the backing table if it does not exist yet
    async fn initialize(&self) -> Result<()>;

    /// Lists every task, ordered by id
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Inserts a task and returns it with its assigned id
    async fn insert_task(&self, task: &NewTask) -> Result<Task>;

    /// Deletes exactly one task by id
    async fn delete_task(&self, id: TaskId) -> Result<()>;

    /// Deletes every task with this description in this category
    /// Returns the number of rows removed, which may exceed one when
    /// descriptions repeat within a column
    async fn delete_matching(&self, description: &str, category: Category) -> Result<usize>;

    /// Moves a task into `target` in a single transaction
    async fn move_task(&self, id: TaskId, target: Category) -> Result<Task>;

    /// Checks if the backing table exists
    async fn is_initialized(&self) -> bool;
}
