//! BoardStore - owner of the ordered task collection

use super::plan::{plan_move, MoveOutcome};
use crate::error::{KanbanError, Result};
use crate::filter::{self, TaskPredicate, TaskSubset};
use crate::types::{Column, Status, Task, TaskId};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, trace};

/// The authoritative ordered task collection plus the fixed columns.
///
/// [`BoardStore::apply_move`] is the only way to change the collection once the
/// store exists. Same-status relative order in the collection is the
/// top-to-bottom order of that column.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStore {
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

/// One column of a filtered board
#[derive(Debug, Clone, Serialize)]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub tasks: Vec<&'a Task>,
}

impl BoardStore {
    /// Create a store from seed tasks, taken verbatim as the initial order.
    ///
    /// Fails when a task id is empty or appears more than once.
    pub fn from_seed(tasks: Vec<Task>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if task.id.is_empty() {
                return Err(KanbanError::invalid_value("id", "task id must not be empty"));
            }
            if !seen.insert(&task.id) {
                return Err(KanbanError::duplicate_id("task", task.id.as_str()));
            }
        }

        info!(tasks = tasks.len(), "board store created");
        Ok(Self {
            columns: crate::defaults::columns(),
            tasks,
        })
    }

    /// A store seeded with the built-in demo tasks
    pub fn demo() -> Self {
        Self {
            columns: crate::defaults::columns(),
            tasks: crate::defaults::demo_tasks(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The columns in left-to-right order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by status
    pub fn column(&self, status: Status) -> &Column {
        &self.columns[status.column_index()]
    }

    /// The ordered task collection
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a task by id
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The subset accepted by `predicate`
    pub fn filtered(&self, predicate: &impl TaskPredicate) -> TaskSubset {
        TaskSubset::matching(&self.tasks, predicate)
    }

    /// Tasks of `subset` in `column`, in board order
    pub fn tasks_in_column<'a, 's>(
        &'a self,
        subset: &'s TaskSubset,
        column: Status,
    ) -> impl Iterator<Item = &'a Task> + Clone + 's
    where
        'a: 's,
    {
        filter::tasks_in_column(&self.tasks, subset, column)
    }

    /// Every column with the tasks `predicate` keeps
    pub fn view(&self, predicate: &impl TaskPredicate) -> Vec<ColumnView<'_>> {
        let subset = self.filtered(predicate);
        self.columns
            .iter()
            .map(|column| ColumnView {
                column,
                tasks: self.tasks_in_column(&subset, column.id).collect(),
            })
            .collect()
    }

    /// Per-column counts of the tasks `predicate` keeps
    pub fn column_counts(&self, predicate: &impl TaskPredicate) -> Vec<(Status, usize)> {
        filter::column_counts(&self.tasks, &self.filtered(predicate))
    }

    /// Distinct project names in first-seen order
    pub fn projects(&self) -> Vec<&str> {
        filter::projects(&self.tasks)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Drop `task_id` over `over_id` (a task id or a column id).
    ///
    /// Unknown ids, self-drops and drops onto the task's own column leave the
    /// collection untouched and are reported as [`MoveOutcome::Unchanged`].
    pub fn apply_move(&mut self, task_id: &str, over_id: &str) -> MoveOutcome {
        let outcome = plan_move(&self.tasks, task_id, over_id);
        match &outcome {
            MoveOutcome::Moved(plan) => {
                plan.apply_to(&mut self.tasks);
                debug!(
                    task = %plan.task_id,
                    from_status = %plan.from_status,
                    to_status = %plan.to_status,
                    from_index = plan.from_index,
                    to_index = plan.to_index,
                    "task moved"
                );
            }
            MoveOutcome::Unchanged { reason } => {
                trace!(task_id, over_id, ?reason, "drop ignored");
            }
        }
        outcome
    }

    // =========================================================================
    // Persistence hand-off
    // =========================================================================

    /// Copy of the collection for a persistence layer
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// The collection as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.tasks)?)
    }

    /// Ids in collection order
    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.tasks.iter().map(|t| &t.id)
    }

    /// Hand the collection over to a persistence layer
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}
