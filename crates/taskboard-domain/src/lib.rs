pub mod board;
pub mod column;
pub mod engine;
pub mod field_update;
pub mod filter;
pub mod subtask;
pub mod task;

pub use board::Board;
pub use column::{Column, ColumnId, Columns};
pub use engine::Intent;
pub use field_update::FieldUpdate;
pub use filter::{filter_tasks, PriorityFilter, SearchFilter, TaskFilter};
pub use subtask::{Subtask, SubtaskId};
pub use task::{Priority, Task, TaskChanges, TaskDraft, TaskId};
