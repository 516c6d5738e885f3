use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::column::ColumnId;
use crate::field_update::FieldUpdate;
use crate::subtask::Subtask;

pub type TaskId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    /// Denormalized cache of the owning column. The per-column orderings are
    /// authoritative; only the engine's move operation rewrites this field.
    pub column: ColumnId,
    pub subtasks: Vec<Subtask>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// Initial field values for task creation.
///
/// Defaults match a freshly created card: placeholder title, empty
/// description, medium priority, no due date, no subtasks, no tags.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub subtasks: Vec<Subtask>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: "New Task".to_string(),
            description: String::new(),
            priority: Priority::Medium,
            due_date: None,
            tags: Vec::new(),
            subtasks: Vec::new(),
        }
    }
}

/// Partial update of a task's content fields.
///
/// Absent fields keep their existing values. The due date uses the
/// three-state [`FieldUpdate`] so it can be cleared as well as set; tags
/// and subtasks are wholesale replacements. Column membership is
/// deliberately not expressible here: it changes only through the engine's
/// move operation.
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: FieldUpdate<NaiveDate>,
    pub tags: Option<Vec<String>>,
    pub subtasks: Option<Vec<Subtask>>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && !self.due_date.is_change()
            && self.tags.is_none()
            && self.subtasks.is_none()
    }
}

impl Task {
    /// Create a task in the backlog, stamping both timestamps with the
    /// caller-supplied clock.
    pub fn new(draft: TaskDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            due_date: draft.due_date,
            column: ColumnId::Backlog,
            subtasks: draft.subtasks,
            created_at: now,
            updated_at: now,
            tags: draft.tags,
        }
    }

    /// Apply the fields present in `changes` and refresh `updated_at`.
    pub fn apply_changes(&mut self, changes: TaskChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        changes.due_date.apply_to(&mut self.due_date);
        if let Some(tags) = changes.tags {
            self.tags = tags;
        }
        if let Some(subtasks) = changes.subtasks {
            self.subtasks = subtasks;
        }
        self.updated_at = now;
    }

    /// Completed and total subtask counts, or None when there are no
    /// subtasks.
    pub fn subtask_progress(&self) -> Option<(usize, usize)> {
        if self.subtasks.is_empty() {
            return None;
        }
        let completed = self.subtasks.iter().filter(|s| s.completed).count();
        Some((completed, self.subtasks.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        "2026-01-15T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(TaskDraft::default(), now());
        assert_eq!(task.title, "New Task");
        assert_eq!(task.description, "");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, None);
        assert_eq!(task.column, ColumnId::Backlog);
        assert!(task.subtasks.is_empty());
        assert!(task.tags.is_empty());
        assert_eq!(task.created_at, now());
        assert_eq!(task.updated_at, now());
    }

    #[test]
    fn test_apply_changes_touches_only_named_fields() {
        let mut task = Task::new(TaskDraft::default(), now());
        let later = now() + chrono::Duration::minutes(5);

        let changes = TaskChanges {
            priority: Some(Priority::Critical),
            ..Default::default()
        };
        task.apply_changes(changes, later);

        assert_eq!(task.priority, Priority::Critical);
        assert_eq!(task.title, "New Task");
        assert_eq!(task.created_at, now());
        assert_eq!(task.updated_at, later);
    }

    #[test]
    fn test_apply_changes_clears_due_date() {
        let mut task = Task::new(
            TaskDraft {
                due_date: Some("2026-02-01".parse().unwrap()),
                ..Default::default()
            },
            now(),
        );

        let changes = TaskChanges {
            due_date: FieldUpdate::Clear,
            ..Default::default()
        };
        task.apply_changes(changes, now());
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_subtask_progress() {
        let mut task = Task::new(TaskDraft::default(), now());
        assert_eq!(task.subtask_progress(), None);

        task.subtasks = vec![
            Subtask::new("a".to_string()),
            Subtask::new("b".to_string()),
        ];
        task.subtasks[0].completed = true;
        assert_eq!(task.subtask_progress(), Some((1, 2)));
    }

    #[test]
    fn test_task_serializes_with_document_field_names() {
        let task = Task::new(
            TaskDraft {
                due_date: Some("2026-03-01".parse().unwrap()),
                ..Default::default()
            },
            now(),
        );
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"dueDate\":\"2026-03-01\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("\"column\":\"backlog\""));
        assert!(json.contains("\"priority\":\"medium\""));
    }
}
