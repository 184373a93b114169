use crate::{
    domain::{Category, NewTask, Task, TaskId},
    error::{Result, TaskboardError},
    storage::Storage,
};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};

/// `(id, description, priority, category)` as read from the table
type RawTask = (i64, String, String, String);

const SELECT_COLUMNS: &str = "SELECT id, description, priority, category FROM tasks";

/// SQLite-backed task store
///
/// Holds only the database path. Every operation opens its own connection
/// on the blocking pool and closes it before returning.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db_path: PathBuf,
}

impl SqliteStorage {
    pub const DEFAULT_FILE: &'static str = "tasks.db";

    /// Creates a store for the given database file; nothing is touched until `initialize`
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn open(path: &Path) -> Result<Connection> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Connection::open(path)?)
    }

    async fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = Self::open(&path)?;
            f(&mut conn)
        })
        .await
        .map_err(|e| TaskboardError::StorageError(format!("store operation aborted: {}", e)))?
    }
}

fn read_raw(row: &Row<'_>) -> rusqlite::Result<RawTask> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn into_task((id, description, priority, category): RawTask) -> Result<Task> {
    Ok(Task {
        id: TaskId::new(id),
        description,
        priority: priority.parse()?,
        category: category.parse()?,
    })
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn initialize(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute_batch(
                r"
                CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    description TEXT NOT NULL,
                    priority TEXT NOT NULL,
                    category TEXT NOT NULL
                );
                ",
            )?;
            Ok(())
        })
        .await?;

        tracing::info!(path = %self.db_path.display(), "Task store initialized");
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
            let rows = stmt
                .query_map([], read_raw)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows.into_iter().map(into_task).collect()
        })
        .await
    }

    async fn insert_task(&self, task: &NewTask) -> Result<Task> {
        let task = task.clone();
        let saved = self
            .with_connection(move |conn| {
                conn.execute(
                    "INSERT INTO tasks (description, priority, category) VALUES (?1, ?2, ?3)",
                    params![task.description, task.priority.label(), task.category.label()],
                )?;
                let id = TaskId::new(conn.last_insert_rowid());
                Ok(task.with_id(id))
            })
            .await?;

        tracing::debug!(id = %saved.id, category = %saved.category, "Inserted task");
        Ok(saved)
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        let removed = self
            .with_connection(move |conn| {
                Ok(conn.execute("DELETE FROM tasks WHERE id = ?1", params![id.get()])?)
            })
            .await?;

        if removed == 0 {
            return Err(TaskboardError::TaskNotFound(id));
        }

        tracing::debug!(%id, "Deleted task");
        Ok(())
    }

    async fn delete_matching(&self, description: &str, category: Category) -> Result<usize> {
        let description = description.to_string();
        let removed = self
            .with_connection(move |conn| {
                Ok(conn.execute(
                    "DELETE FROM tasks WHERE description = ?1 AND category = ?2",
                    params![description, category.label()],
                )?)
            })
            .await?;

        if removed > 1 {
            tracing::warn!(removed, %category, "Description match removed several tasks");
        } else {
            tracing::debug!(removed, %category, "Deleted tasks by description");
        }
        Ok(removed)
    }

    async fn move_task(&self, id: TaskId, target: Category) -> Result<Task> {
        let (task, source) = self
            .with_connection(move |conn| {
                let tx = conn.transaction()?;

                let raw = tx
                    .query_row(
                        &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                        params![id.get()],
                        read_raw,
                    )
                    .optional()?;
                let mut task = match raw {
                    Some(raw) => into_task(raw)?,
                    None => return Err(TaskboardError::TaskNotFound(id)),
                };

                let source = task.category;
                if source != target {
                    tx.execute(
                        "UPDATE tasks SET category = ?1 WHERE id = ?2",
                        params![target.label(), id.get()],
                    )?;
                    task.category = target;
                }

                tx.commit()?;
                Ok((task, source))
            })
            .await?;

        tracing::debug!(%id, from = %source, to = %target, "Moved task");
        Ok(task)
    }

    async fn is_initialized(&self) -> bool {
        if !self.db_path.exists() {
            return false;
        }

        self.with_connection(|conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'tasks'",
                [],
                |row| row.get(0),
            )?;
            Ok(count > 0)
        })
        .await
        .unwrap_or(false)
    }
}
