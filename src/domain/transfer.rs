//! Payload carried from a drag source column to a drop target.

use crate::domain::board::Card;
use crate::domain::task::{Category, Priority, TaskId};
use crate::error::{Result, TaskboardError};
use serde::{Deserialize, Serialize};

/// Media type a front end should attach to the encoded payload
pub const PAYLOAD_MIME_TYPE: &str = "application/x-taskboard-card+json";

/// Everything the drop side needs to move a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub task_id: TaskId,
    pub description: String,
    pub priority: Priority,
    pub source: Category,
}

impl DragPayload {
    pub fn from_card(card: &Card, source: Category) -> Self {
        Self {
            task_id: card.id,
            description: card.text.clone(),
            priority: card.priority,
            source,
        }
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| TaskboardError::MalformedPayload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card {
            id: TaskId::new(3),
            text: "Buy milk".to_string(),
            priority: Priority::Urgent,
        }
    }

    #[test]
    fn test_payload_carries_priority_and_source() {
        let payload = DragPayload::from_card(&card(), Category::ToDo);
        let raw = payload.encode().unwrap();

        assert!(raw.contains("\"Urgent\""));
        assert!(raw.contains("\"To Do\""));
        assert_eq!(DragPayload::decode(&raw).unwrap(), payload);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        for raw in [
            "",
            "#ff0000|Buy milk|To Do",
            r#"{"task_id":1,"description":"x","priority":"High","source":"To Do"}"#,
            r#"{"task_id":1,"description":"x","priority":"Urgent","source":"Backlog"}"#,
            r#"{"description":"x","priority":"Urgent","source":"To Do"}"#,
        ] {
            assert!(
                matches!(
                    DragPayload::decode(raw),
                    Err(TaskboardError::MalformedPayload(_))
                ),
                "expected rejection for {raw:?}"
            );
        }
    }
}
