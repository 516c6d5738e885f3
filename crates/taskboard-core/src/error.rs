use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Subtask not found: {0}")]
    SubtaskNotFound(Uuid),

    #[error("Invalid index: {index} (destination holds at most {max} positions)")]
    InvalidIndex { index: usize, max: usize },
}
