use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type SubtaskId = Uuid;

/// A checklist item owned by a task.
///
/// Subtasks have no lifecycle of their own: deleting the parent task
/// deletes them, and they are never referenced from outside the parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub title: String,
    pub completed: bool,
}

impl Subtask {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            completed: false,
        }
    }
}
