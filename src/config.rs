use crate::{
    domain::BoardConfig,
    error::{Result, TaskboardError},
    storage::SqliteStorage,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Application settings, read from a TOML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_path: PathBuf,
    pub board: BoardConfig,
}

impl Config {
    pub const FILE_NAME: &'static str = "taskboard.toml";

    /// Parses a configuration document; missing keys fall back to defaults
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| TaskboardError::ConfigError(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TaskboardError::ConfigError(e.to_string()))
    }

    /// Loads configuration from a file that must exist
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).await?;
        Self::from_toml(&contents)
    }

    /// Loads configuration, or returns the defaults when the file is absent
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path).await
    }

    /// Store for the configured database file
    pub fn storage(&self) -> SqliteStorage {
        SqliteStorage::new(&self.database_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(SqliteStorage::DEFAULT_FILE),
            board: BoardConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database_path, PathBuf::from("tasks.db"));
        assert_eq!(config.board.name, "Task Manager - Board View");
        assert_eq!(config.storage().db_path(), Path::new("tasks.db"));
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = Config::from_toml("database_path = \"/tmp/board.db\"\n").unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/board.db"));
        assert_eq!(config.board, BoardConfig::default());

        let config = Config::from_toml("[board]\nname = \"Home\"\n").unwrap();
        assert_eq!(config.database_path, PathBuf::from("tasks.db"));
        assert_eq!(config.board.name, "Home");
    }

    #[test]
    fn test_malformed_document() {
        let result = Config::from_toml("database_path = [");
        assert!(matches!(result, Err(TaskboardError::ConfigError(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            database_path: PathBuf::from("board.db"),
            board: BoardConfig {
                name: "Chores".to_string(),
            },
        };
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[tokio::test]
    async fn test_load_or_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(Config::FILE_NAME);

        let config = Config::load_or_default(&path).await.unwrap();
        assert_eq!(config, Config::default());
        assert!(matches!(
            Config::load(&path).await,
            Err(TaskboardError::IoError(_))
        ));

        tokio::fs::write(&path, "[board]\nname = \"Work\"\n")
            .await
            .unwrap();
        let config = Config::load_or_default(&path).await.unwrap();
        assert_eq!(config.board.name, "Work");
    }
}
