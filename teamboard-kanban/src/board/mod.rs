//! Board store and drop resolution

mod plan;
mod store;

pub use plan::{apply_move, plan_move, MoveOutcome, MovePlan, NoOpReason};
pub use store::{BoardStore, ColumnView};
