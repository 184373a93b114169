pub mod board;
pub mod task;
pub mod transfer;
pub mod validation;

pub use board::{Board, BoardConfig, Card, Column};
pub use task::{Category, NewTask, Priority, Rgb, Task, TaskId};
pub use transfer::{DragPayload, PAYLOAD_MIME_TYPE};
pub use validation::{validate_description, MAX_DESCRIPTION_LEN};
