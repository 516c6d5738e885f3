pub mod board;
pub mod subtask;
pub mod task;
