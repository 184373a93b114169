use crate::domain::task::{Category, Priority, Rgb, Task, TaskId};
use crate::error::{Result, TaskboardError};
use serde::{Deserialize, Serialize};

/// A task as rendered inside a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: TaskId,
    pub text: String,
    pub priority: Priority,
}

impl Card {
    /// Background color, always derived from the priority
    pub fn color(&self) -> Rgb {
        self.priority.color()
    }
}

impl From<Task> for Card {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            text: task.description,
            priority: task.priority,
        }
    }
}

/// One of the three fixed kanban columns
#[derive(Debug, Clone)]
pub struct Column {
    category: Category,
    cards: Vec<Card>,
}

impl Column {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            cards: Vec::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Header text of the column
    pub fn title(&self) -> &'static str {
        self.category.label()
    }

    /// Cards in display order (ascending row id)
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: TaskId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Only the "To Do" column offers an add button
    pub fn accepts_new_cards(&self) -> bool {
        self.category == Category::ToDo
    }

    fn insert(&mut self, card: Card) {
        let pos = self.cards.partition_point(|c| c.id < card.id);
        self.cards.insert(pos, card);
    }

    fn take(&mut self, id: TaskId) -> Option<Card> {
        let pos = self.cards.iter().position(|card| card.id == id)?;
        Some(self.cards.remove(pos))
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Task Manager - Board View".to_string(),
        }
    }
}

/// In-memory kanban board state
#[derive(Debug, Clone)]
pub struct Board {
    pub config: BoardConfig,
    columns: [Column; 3],
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            columns: Category::ALL.map(Column::new),
        }
    }

    /// Builds a board from stored rows, placing each under its recorded category
    pub fn from_tasks(config: BoardConfig, tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::new(config);
        for task in tasks {
            board.add_card(task.category, Card::from(task));
        }
        board
    }

    /// Columns left to right
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, category: Category) -> &Column {
        &self.columns[category.index()]
    }

    fn column_mut(&mut self, category: Category) -> &mut Column {
        &mut self.columns[category.index()]
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Finds a card and the column holding it
    pub fn find_card(&self, id: TaskId) -> Option<(Category, &Card)> {
        self.columns
            .iter()
            .find_map(|col| col.get(id).map(|card| (col.category, card)))
    }

    pub fn add_card(&mut self, category: Category, card: Card) {
        self.column_mut(category).insert(card);
    }

    /// Removes a card from whichever column holds it
    pub fn remove_card(&mut self, id: TaskId) -> Result<(Category, Card)> {
        let (category, _) = self.find_card(id).ok_or(TaskboardError::TaskNotFound(id))?;
        let card = self
            .column_mut(category)
            .take(id)
            .ok_or(TaskboardError::TaskNotFound(id))?;
        Ok((category, card))
    }

    /// Moves a card out of `source` into `target`
    pub fn move_card(&mut self, id: TaskId, source: Category, target: Category) -> Result<()> {
        if source == target {
            return if self.column(source).contains(id) {
                Ok(())
            } else {
                Err(TaskboardError::TaskNotFound(id))
            };
        }

        let card = self
            .column_mut(source)
            .take(id)
            .ok_or(TaskboardError::TaskNotFound(id))?;
        self.column_mut(target).insert(card);
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
