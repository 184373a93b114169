//! Board controller: runs each user action against the store, then mirrors
//! it in the in-memory board.

use crate::{
    domain::{
        validate_description, Board, BoardConfig, Card, Category, DragPayload, NewTask, Priority,
        Task, TaskId,
    },
    error::{Result, TaskboardError},
    storage::Storage,
};

/// A kanban board bound to its store
pub struct TaskBoard<S: Storage> {
    storage: S,
    board: Board,
    active_drag: Option<DragPayload>,
}

impl<S: Storage> TaskBoard<S> {
    /// Initializes the store and loads every stored task onto the board
    pub async fn open(storage: S, config: BoardConfig) -> Result<Self> {
        storage.initialize().await?;
        let tasks = storage.list_tasks().await?;
        let board = Board::from_tasks(config, tasks);

        tracing::info!(
            board = %board.config.name,
            cards = board.card_count(),
            "Board loaded"
        );

        Ok(Self {
            storage,
            board,
            active_drag: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Payload of the drag in progress, if any
    pub fn active_drag(&self) -> Option<&DragPayload> {
        self.active_drag.as_ref()
    }

    /// Rebuilds the board from the store, dropping any drag in progress
    pub async fn reload(&mut self) -> Result<()> {
        let tasks = self.storage.list_tasks().await?;
        self.board = Board::from_tasks(self.board.config.clone(), tasks);
        self.active_drag = None;
        Ok(())
    }

    /// Validates and adds a new card to "To Do"
    pub async fn add_task(&mut self, description: &str, priority: Priority) -> Result<Task> {
        validate_description(description)?;

        let task = self
            .storage
            .insert_task(&NewTask::new(description, priority, Category::ToDo))
            .await?;
        self.board.add_card(task.category, Card::from(task.clone()));
        Ok(task)
    }

    /// Same as `add_task` with the priority given as its label
    pub async fn add_task_with_label(&mut self, description: &str, priority: &str) -> Result<Task> {
        validate_description(description)?;
        let priority: Priority = priority.parse()?;
        self.add_task(description, priority).await
    }

    /// Deletes a card and its row
    pub async fn delete_task(&mut self, id: TaskId) -> Result<()> {
        if self.board.find_card(id).is_none() {
            return Err(TaskboardError::TaskNotFound(id));
        }

        self.storage.delete_task(id).await?;
        self.board.remove_card(id)?;

        if self.active_drag.as_ref().is_some_and(|p| p.task_id == id) {
            self.active_drag = None;
        }
        Ok(())
    }

    /// Starts dragging a card; returns the encoded transfer payload
    pub fn begin_drag(&mut self, id: TaskId) -> Result<String> {
        let (source, card) = self
            .board
            .find_card(id)
            .ok_or(TaskboardError::TaskNotFound(id))?;

        let payload = DragPayload::from_card(card, source);
        let encoded = payload.encode()?;
        self.active_drag = Some(payload);
        Ok(encoded)
    }

    /// Abandons the drag in progress without touching the store
    pub fn cancel_drag(&mut self) -> Option<DragPayload> {
        self.active_drag.take()
    }

    /// Accepts a dropped payload onto `target`
    ///
    /// The store moves the row in one transaction before the card moves in
    /// memory, so a store failure leaves both unchanged.
    pub async fn drop_card(&mut self, raw_payload: &str, target: Category) -> Result<Task> {
        let payload = DragPayload::decode(raw_payload);
        // Any drop, accepted or not, ends the drag.
        self.active_drag = None;
        let payload = payload?;

        if !self.board.column(payload.source).contains(payload.task_id) {
            tracing::warn!(
                id = %payload.task_id,
                source = %payload.source,
                "Dropped card is no longer in its source column"
            );
            return Err(TaskboardError::TaskNotFound(payload.task_id));
        }

        let task = self.storage.move_task(payload.task_id, target).await?;
        self.board
            .move_card(payload.task_id, payload.source, task.category)?;
        Ok(task)
    }

    /// Drops the active drag onto `target`
    pub async fn drop_active(&mut self, target: Category) -> Result<Task> {
        let payload = self.active_drag.clone().ok_or(TaskboardError::NoActiveDrag)?;
        let raw = payload.encode()?;
        self.drop_card(&raw, target).await
    }

    /// Drag and drop in one call
    pub async fn move_task(&mut self, id: TaskId, target: Category) -> Result<Task> {
        let raw = self.begin_drag(id)?;
        self.drop_card(&raw, target).await
    }
}
