use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::column::Columns;
use crate::task::{Task, TaskId};

/// The full task-tracking aggregate: all tasks plus all column orderings.
///
/// Column membership is stored twice, as `task.column` and as an entry in
/// one column's `task_ids`. The engine keeps the two in sync by funneling
/// every membership change through its move operation; `is_consistent` is
/// the ground truth for the sync holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub tasks: Vec<Task>,
    pub columns: Columns,
}

impl Board {
    /// An empty board with the four canonical columns.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            columns: Columns::new(),
        }
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// True iff every column's id list only contains ids present in
    /// `tasks`, no id appears more than once within or across lists, every
    /// task is listed in exactly one column, and each task's `column`
    /// field names the column whose list contains it.
    pub fn is_consistent(&self) -> bool {
        let mut listed: HashSet<TaskId> = HashSet::new();
        for column in self.columns.iter() {
            for &task_id in &column.task_ids {
                if !listed.insert(task_id) {
                    return false;
                }
                match self.task(task_id) {
                    Some(task) if task.column == column.id => {}
                    _ => return false,
                }
            }
        }
        // every task must appear in some column list (and ids are unique,
        // so the counts matching means exactly one each)
        self.tasks.len() == listed.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
