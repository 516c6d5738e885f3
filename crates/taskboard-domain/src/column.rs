use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::task::TaskId;

/// The four fixed workflow stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    Backlog,
    InProgress,
    Review,
    Done,
}

impl ColumnId {
    /// Canonical stage order, left to right.
    pub const ALL: [ColumnId; 4] = [
        ColumnId::Backlog,
        ColumnId::InProgress,
        ColumnId::Review,
        ColumnId::Done,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(Self::Backlog),
            "in-progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            other => Err(format!("unknown column: {}", other)),
        }
    }
}

/// One workflow stage and its ordered task membership.
///
/// `task_ids` defines the user-visible order within the column and is the
/// authoritative record of which column a task sits in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub task_ids: Vec<TaskId>,
}

impl Column {
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            task_ids: Vec::new(),
        }
    }
}

/// The fixed four-column record.
///
/// Field order is the canonical stage order, which is also the key order of
/// the persisted document (the document keys the columns object by column
/// id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Columns {
    pub backlog: Column,
    #[serde(rename = "in-progress")]
    pub in_progress: Column,
    pub review: Column,
    pub done: Column,
}

impl Columns {
    pub fn new() -> Self {
        Self {
            backlog: Column::new(ColumnId::Backlog),
            in_progress: Column::new(ColumnId::InProgress),
            review: Column::new(ColumnId::Review),
            done: Column::new(ColumnId::Done),
        }
    }

    pub fn get(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::Backlog => &self.backlog,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Review => &self.review,
            ColumnId::Done => &self.done,
        }
    }

    pub fn get_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::Backlog => &mut self.backlog,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Review => &mut self.review,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Iterate the columns in canonical stage order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        [&self.backlog, &self.in_progress, &self.review, &self.done].into_iter()
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self::new()
    }
}
