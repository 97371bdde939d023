//! MoveTask command

use crate::board::{BoardStore, MoveOutcome};
use crate::types::{Status, TaskId};
use serde::{Deserialize, Serialize};

/// Move a task onto another task or into a column.
///
/// This is the resolved intent a finished drag session hands to the board:
/// the dragged task and whatever it was released over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// Task ID or column ID the task was dropped over
    pub over: String,
}

impl MoveTask {
    /// Create a MoveTask command dropping `id` over `over`
    pub fn new(id: impl Into<TaskId>, over: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            over: over.into(),
        }
    }

    /// Create a MoveTask command that drops the task at the end of a column
    pub fn to_column(id: impl Into<TaskId>, column: Status) -> Self {
        Self::new(id, column.as_str())
    }

    /// Create a MoveTask command that drops the task onto another task
    pub fn onto_task(id: impl Into<TaskId>, target: &TaskId) -> Self {
        Self::new(id, target.as_str())
    }

    /// Apply to the board
    pub fn execute(&self, board: &mut BoardStore) -> MoveOutcome {
        board.apply_move(self.id.as_str(), &self.over)
    }
}
