//! Core types for the kanban engine

mod board;
mod ids;
mod task;

// Re-export all types
pub use board::{Column, Status};
pub use ids::TaskId;
pub use task::{Assignee, Priority, Task};
