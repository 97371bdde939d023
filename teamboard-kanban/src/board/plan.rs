//! Resolving a drop into a concrete change of the task sequence.
//!
//! A drop names the dragged task and whatever it was released over: another
//! task or a column. Resolution happens in a fixed order:
//!
//! 1. The target status is the column itself when `over` is a column id,
//!    otherwise the status of the task `over` names. Anything else is a no-op.
//! 2. The dragged task takes on the target status. Dropped onto a different
//!    column, it is appended after the last task already in that status; an
//!    empty column leaves it where it is.
//! 3. When `over` names a different task, the dragged task is spliced into the
//!    index that task occupies in the raw sequence. The splice is not scoped to
//!    a status group.
//!
//! Column ids are checked before task ids, so a task whose id collides with a
//! column id can never be used as a drop target.

use crate::ordering::move_index;
use crate::types::{Status, Task, TaskId};
use serde::Serialize;

/// Why a drop left the sequence untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoOpReason {
    /// The dragged task is not on the board
    UnknownTask,
    /// The drop target is neither a column nor a task
    UnknownTarget,
    /// The task was dropped onto itself
    SelfMove,
    /// The task was dropped onto its own column
    AlreadyInPlace,
}

/// A resolved change to apply to the task sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovePlan {
    pub task_id: TaskId,
    pub from_status: Status,
    pub to_status: Status,
    pub from_index: usize,
    pub to_index: usize,
}

impl MovePlan {
    /// True when the task changes column
    pub fn changes_status(&self) -> bool {
        self.from_status != self.to_status
    }

    /// True when the task changes position in the sequence
    pub fn changes_order(&self) -> bool {
        self.from_index != self.to_index
    }

    /// Apply the plan in place. The slice must be the one the plan was made
    /// against.
    pub(crate) fn apply_to(&self, tasks: &mut [Task]) {
        tasks[self.from_index].status = self.to_status;
        move_index(tasks, self.from_index, self.to_index);
    }
}

/// Result of a drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    Moved(MovePlan),
    Unchanged { reason: NoOpReason },
}

impl MoveOutcome {
    fn unchanged(reason: NoOpReason) -> Self {
        Self::Unchanged { reason }
    }

    /// True when the drop changed the sequence
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }

    /// The applied plan, if any
    pub fn plan(&self) -> Option<&MovePlan> {
        match self {
            Self::Moved(plan) => Some(plan),
            Self::Unchanged { .. } => None,
        }
    }
}

/// Work out what dropping `task_id` over `over_id` does to `tasks`.
pub fn plan_move(tasks: &[Task], task_id: &str, over_id: &str) -> MoveOutcome {
    let Some(from_index) = tasks.iter().position(|t| t.id == task_id) else {
        return MoveOutcome::unchanged(NoOpReason::UnknownTask);
    };
    let from_status = tasks[from_index].status;

    let (to_status, over_index) = if let Some(status) = Status::from_column_id(over_id) {
        (status, None)
    } else if let Some(index) = tasks.iter().position(|t| t.id == over_id) {
        (tasks[index].status, Some(index))
    } else {
        return MoveOutcome::unchanged(NoOpReason::UnknownTarget);
    };

    let to_index = match over_index {
        Some(index) => index,
        None if to_status != from_status => append_index(tasks, from_index, to_status),
        None => from_index,
    };
    if to_status == from_status && to_index == from_index {
        let reason = if task_id == over_id {
            NoOpReason::SelfMove
        } else {
            NoOpReason::AlreadyInPlace
        };
        return MoveOutcome::unchanged(reason);
    }

    MoveOutcome::Moved(MovePlan {
        task_id: tasks[from_index].id.clone(),
        from_status,
        to_status,
        from_index,
        to_index,
    })
}

/// Index that puts the task at `from` right after the last task in `status`,
/// measured after the task has been taken out. With no task in `status` the
/// task stays put.
fn append_index(tasks: &[Task], from: usize, status: Status) -> usize {
    match tasks.iter().rposition(|t| t.status == status) {
        Some(last) if last > from => last,
        Some(last) => last + 1,
        None => from,
    }
}

/// Drop `task_id` over `over_id` and return the resulting sequence.
///
/// Pure: the input is not touched. A no-op returns a value-equal copy.
pub fn apply_move(tasks: &[Task], task_id: &str, over_id: &str) -> Vec<Task> {
    let mut next = tasks.to_vec();
    if let MoveOutcome::Moved(plan) = plan_move(tasks, task_id, over_id) {
        plan.apply_to(&mut next);
    }
    next
}
