use crate::error::TaskboardError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Row identifier of a task, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A display color, stored as 8-bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// How pressing a task is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    #[serde(rename = "Menial")]
    Menial,
    #[serde(rename = "Semi Important")]
    SemiImportant,
    #[serde(rename = "Urgent")]
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Self::Menial, Self::SemiImportant, Self::Urgent];

    /// Label shown to the user and stored in the `priority` column
    pub fn label(&self) -> &'static str {
        match self {
            Self::Menial => "Menial",
            Self::SemiImportant => "Semi Important",
            Self::Urgent => "Urgent",
        }
    }

    /// Card background color for this priority
    pub fn color(&self) -> Rgb {
        match self {
            Self::Menial => Rgb::new(192, 192, 192),
            Self::SemiImportant => Rgb::new(255, 120, 0),
            Self::Urgent => Rgb::new(255, 0, 0),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = TaskboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| TaskboardError::InvalidPriority(s.to_string()))
    }
}

/// The column a task currently sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl Category {
    /// Columns in display order, left to right
    pub const ALL: [Category; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Position of the column on the board
    pub fn index(&self) -> usize {
        match self {
            Self::ToDo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = TaskboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| TaskboardError::InvalidCategory(s.to_string()))
    }
}

/// A task that has not been written to the store yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub description: String,
    pub priority: Priority,
    pub category: Category,
}

impl NewTask {
    pub fn new(description: impl Into<String>, priority: Priority, category: Category) -> Self {
        Self {
            description: description.into(),
            priority,
            category,
        }
    }

    pub fn with_id(self, id: TaskId) -> Task {
        Task {
            id,
            description: self.description,
            priority: self.priority,
            category: self.category,
        }
    }
}

/// One row of the `tasks` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub priority: Priority,
    pub category: Category,
}

impl Task {
    pub fn color(&self) -> Rgb {
        self.priority.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_labels_round_trip() {
        for priority in Priority::ALL {
            assert_eq!(Priority::from_str(priority.label()).unwrap(), priority);
        }
        assert!(Priority::from_str("semi important").is_err());
        assert!(Priority::from_str("").is_err());
    }

    #[test]
    fn test_priority_colors() {
        assert_eq!(Priority::Menial.color().hex(), "#c0c0c0");
        assert_eq!(Priority::SemiImportant.color().hex(), "#ff7800");
        assert_eq!(Priority::Urgent.color().hex(), "#ff0000");
    }

    #[test]
    fn test_priority_colors_are_distinct() {
        let colors: std::collections::HashSet<Rgb> =
            Priority::ALL.iter().map(|p| p.color()).collect();
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(Category::from_str("To Do").unwrap(), Category::ToDo);
        assert_eq!(Category::from_str("In Progress").unwrap(), Category::InProgress);
        assert_eq!(Category::from_str("Done").unwrap(), Category::Done);

        let err = Category::from_str("Backlog").unwrap_err();
        assert!(matches!(err, TaskboardError::InvalidCategory(ref s) if s == "Backlog"));
    }

    #[test]
    fn test_category_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_task_serialization_uses_labels() {
        let task = NewTask::new("Buy milk", Priority::SemiImportant, Category::InProgress)
            .with_id(TaskId::new(7));

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"Semi Important\""));
        assert!(json.contains("\"In Progress\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
