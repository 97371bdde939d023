//! Filtered views over the ordered task collection.
//!
//! The board never decides how a subset was chosen. It receives a predicate
//! (any [`TaskPredicate`]) or an already-built [`TaskSubset`] and only relies on
//! membership; order always comes from the collection itself.

use crate::types::{Status, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A black-box test deciding whether a task is visible
pub trait TaskPredicate {
    fn matches(&self, task: &Task) -> bool;
}

impl<F> TaskPredicate for F
where
    F: Fn(&Task) -> bool,
{
    fn matches(&self, task: &Task) -> bool {
        self(task)
    }
}

/// Project selector of the task page.
///
/// Travels as the selector's plain string: `"all"` selects every project,
/// anything else names one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectFilter {
    #[default]
    All,
    Named(String),
}

impl ProjectFilter {
    const ALL: &'static str = "all";
}

impl From<String> for ProjectFilter {
    fn from(s: String) -> Self {
        if s == Self::ALL {
            Self::All
        } else {
            Self::Named(s)
        }
    }
}

impl From<&str> for ProjectFilter {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ProjectFilter> for String {
    fn from(filter: ProjectFilter) -> Self {
        match filter {
            ProjectFilter::All => ProjectFilter::ALL.to_string(),
            ProjectFilter::Named(name) => name,
        }
    }
}

/// Search text plus project selector.
///
/// A task matches when its title or description contains the search text
/// (case-insensitive) and it belongs to the selected project. An empty search
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub project: ProjectFilter,
}

impl TaskQuery {
    /// A query matching every task
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict to one project
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = ProjectFilter::Named(project.into());
        self
    }
}

impl TaskPredicate for TaskQuery {
    fn matches(&self, task: &Task) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle);
        let matches_project = match &self.project {
            ProjectFilter::All => true,
            ProjectFilter::Named(name) => &task.project == name,
        };
        matches_search && matches_project
    }
}

/// Membership set produced by a filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSubset {
    ids: HashSet<TaskId>,
}

impl TaskSubset {
    /// Every task in the collection
    pub fn all(tasks: &[Task]) -> Self {
        tasks.iter().collect()
    }

    /// The tasks accepted by `predicate`
    pub fn matching(tasks: &[Task], predicate: &impl TaskPredicate) -> Self {
        tasks.iter().filter(|t| predicate.matches(t)).collect()
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> FromIterator<&'a Task> for TaskSubset {
    fn from_iter<I: IntoIterator<Item = &'a Task>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(|t| t.id.clone()).collect(),
        }
    }
}

impl FromIterator<TaskId> for TaskSubset {
    fn from_iter<I: IntoIterator<Item = TaskId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Tasks of `subset` in `column`, in collection order.
///
/// The returned iterator is lazy and `Clone`, so a renderer can walk it as
/// often as it likes.
pub fn tasks_in_column<'a, 's>(
    collection: &'a [Task],
    subset: &'s TaskSubset,
    column: Status,
) -> impl Iterator<Item = &'a Task> + Clone + 's
where
    'a: 's,
{
    collection
        .iter()
        .filter(move |t| t.status == column && subset.contains(&t.id))
}

/// Per-column task counts over `subset`, in column order
pub fn column_counts(collection: &[Task], subset: &TaskSubset) -> Vec<(Status, usize)> {
    Status::ALL
        .into_iter()
        .map(|status| (status, tasks_in_column(collection, subset, status).count()))
        .collect()
}

/// Distinct project names in first-seen order
pub fn projects(collection: &[Task]) -> Vec<&str> {
    let mut seen = HashSet::new();
    collection
        .iter()
        .map(|t| t.project.as_str())
        .filter(|p| seen.insert(*p))
        .collect()
}
