//! Read-only task queries.
//!
//! Filtering never mutates the board and has no failure modes. Results
//! preserve the iteration order of the input slice; callers that need
//! column order re-project through the board's per-column orderings.

use std::str::FromStr;

use crate::task::{Priority, Task};

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Case-insensitive substring search over title, description, and tags.
///
/// An empty term matches everything.
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into().to_lowercase(),
        }
    }
}

impl TaskFilter for SearchFilter {
    fn matches(&self, task: &Task) -> bool {
        if self.term.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&self.term)
            || task.description.to_lowercase().contains(&self.term)
            || task
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&self.term))
    }
}

/// Priority predicate with an explicit match-all sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl TaskFilter for PriorityFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(priority) => task.priority == *priority,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Priority::from_str(s).map(Self::Only)
        }
    }
}

/// Tasks matching both the search term and the priority filter.
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    search_term: &str,
    priority: PriorityFilter,
) -> Vec<&'a Task> {
    let search = SearchFilter::new(search_term);
    tasks
        .iter()
        .filter(|task| search.matches(task) && priority.matches(task))
        .collect()
}
