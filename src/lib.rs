//! # Taskboard Core
//!
//! Board state, persistence and drag/drop protocol for a three-column
//! kanban task board ("To Do", "In Progress", "Done").
//!
//! The crate has no dependency on any UI toolkit: a front end renders
//! [`Board`] columns, forwards user actions to a [`TaskBoard`], and carries
//! the string returned by [`TaskBoard::begin_drag`] to the drop target.

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use controller::TaskBoard;
pub use domain::{
    board::{Board, BoardConfig, Card, Column},
    task::{Category, NewTask, Priority, Rgb, Task, TaskId},
    transfer::DragPayload,
};
pub use error::{Result, TaskboardError};
pub use storage::{SqliteStorage, Storage};
