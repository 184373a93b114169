use crate::domain::task::TaskId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskboardError>;

#[derive(Debug, Error)]
pub enum TaskboardError {
    #[error("Task description cannot be empty.")]
    EmptyDescription,

    #[error("Task description can only contain letters and spaces.")]
    InvalidCharacters,

    #[error("Task description is too long ({len} characters). Please keep it under {max} characters.")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("Invalid priority: '{0}'. Valid values: Menial, Semi Important, Urgent")]
    InvalidPriority(String),

    #[error("Invalid category: '{0}'. Valid values: To Do, In Progress, Done")]
    InvalidCategory(String),

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("No drag in progress")]
    NoActiveDrag,

    #[error("Malformed drag payload: {0}")]
    MalformedPayload(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl TaskboardError {
    /// True for errors caused by what the user typed, as opposed to store faults
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyDescription | Self::InvalidCharacters | Self::DescriptionTooLong { .. }
        )
    }
}
