//! The board mutation engine.
//!
//! Every board-changing operation is a pure transform: it takes the current
//! board by reference and returns the next snapshot, or fails leaving the
//! input untouched. The caller injects the current time, so operations are
//! deterministic under test.
//!
//! Column membership lives in two places (the task's `column` field and the
//! per-column orderings); `move_task` is the only code path that rewrites
//! membership, which is what keeps the two representations from diverging.

use chrono::{DateTime, Utc};
use taskboard_core::{BoardError, BoardResult};

use crate::board::Board;
use crate::column::ColumnId;
use crate::subtask::SubtaskId;
use crate::task::{Task, TaskChanges, TaskDraft, TaskId};

/// A caller-supplied description of one desired mutation.
#[derive(Debug, Clone)]
pub enum Intent {
    CreateTask {
        draft: TaskDraft,
    },
    UpdateTask {
        task_id: TaskId,
        changes: TaskChanges,
    },
    DeleteTask {
        task_id: TaskId,
    },
    ToggleSubtask {
        task_id: TaskId,
        subtask_id: SubtaskId,
    },
    MoveTask {
        task_id: TaskId,
        source: ColumnId,
        dest: ColumnId,
        dest_index: usize,
    },
}

/// Apply one intent to the board, producing the next snapshot.
///
/// This is the single choke point callers go through; each arm dispatches
/// to the matching operation below.
pub fn apply(board: &Board, intent: Intent, now: DateTime<Utc>) -> BoardResult<Board> {
    match intent {
        Intent::CreateTask { draft } => Ok(create_task(board, draft, now)),
        Intent::UpdateTask { task_id, changes } => update_task(board, task_id, changes, now),
        Intent::DeleteTask { task_id } => delete_task(board, task_id),
        Intent::ToggleSubtask {
            task_id,
            subtask_id,
        } => toggle_subtask(board, task_id, subtask_id, now),
        Intent::MoveTask {
            task_id,
            source,
            dest,
            dest_index,
        } => move_task(board, task_id, source, dest, dest_index, now),
    }
}

/// Create a task from `draft` at the tail of the backlog ordering.
///
/// Never fails for well-formed input.
pub fn create_task(board: &Board, draft: TaskDraft, now: DateTime<Utc>) -> Board {
    let mut next = board.clone();
    let task = Task::new(draft, now);
    next.columns.backlog.task_ids.push(task.id);
    next.tasks.push(task);
    next
}

/// Apply the content-field changes to one task.
///
/// Column membership is not updatable here; moves go through [`move_task`]
/// so the orderings stay authoritative.
pub fn update_task(
    board: &Board,
    task_id: TaskId,
    changes: TaskChanges,
    now: DateTime<Utc>,
) -> BoardResult<Board> {
    let mut next = board.clone();
    let task = next
        .task_mut(task_id)
        .ok_or(BoardError::TaskNotFound(task_id))?;
    task.apply_changes(changes, now);
    Ok(next)
}

/// Remove a task and scrub its id from whichever column lists it.
pub fn delete_task(board: &Board, task_id: TaskId) -> BoardResult<Board> {
    if board.task(task_id).is_none() {
        return Err(BoardError::TaskNotFound(task_id));
    }
    let mut next = board.clone();
    next.tasks.retain(|t| t.id != task_id);
    for id in ColumnId::ALL {
        next.columns.get_mut(id).task_ids.retain(|&tid| tid != task_id);
    }
    Ok(next)
}

/// Flip one subtask's completed flag, refreshing the parent's `updated_at`.
pub fn toggle_subtask(
    board: &Board,
    task_id: TaskId,
    subtask_id: SubtaskId,
    now: DateTime<Utc>,
) -> BoardResult<Board> {
    let mut next = board.clone();
    let task = next
        .task_mut(task_id)
        .ok_or(BoardError::TaskNotFound(task_id))?;
    let subtask = task
        .subtasks
        .iter_mut()
        .find(|s| s.id == subtask_id)
        .ok_or(BoardError::SubtaskNotFound(subtask_id))?;
    subtask.completed = !subtask.completed;
    task.updated_at = now;
    Ok(next)
}

/// Move a task from `source` to position `dest_index` in `dest`.
///
/// A same-column move is a pure reorder: the task's `column` field and
/// `updated_at` are left untouched. A cross-column move rewrites both.
/// `dest_index` is validated against the destination length after removal,
/// never silently clamped.
pub fn move_task(
    board: &Board,
    task_id: TaskId,
    source: ColumnId,
    dest: ColumnId,
    dest_index: usize,
    now: DateTime<Utc>,
) -> BoardResult<Board> {
    if board.task(task_id).is_none() {
        return Err(BoardError::TaskNotFound(task_id));
    }
    // A stale intent naming the wrong source column is surfaced, not
    // repaired: the task is not where the caller claims it is.
    let source_pos = board
        .columns
        .get(source)
        .task_ids
        .iter()
        .position(|&id| id == task_id)
        .ok_or(BoardError::TaskNotFound(task_id))?;

    let dest_len = board.columns.get(dest).task_ids.len();
    let max = if source == dest { dest_len - 1 } else { dest_len };
    if dest_index > max {
        return Err(BoardError::InvalidIndex {
            index: dest_index,
            max,
        });
    }

    let mut next = board.clone();
    next.columns.get_mut(source).task_ids.remove(source_pos);
    next.columns.get_mut(dest).task_ids.insert(dest_index, task_id);
    if source != dest {
        if let Some(task) = next.task_mut(task_id) {
            task.column = dest;
            task.updated_at = now;
        }
    }
    Ok(next)
}
