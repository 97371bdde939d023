//! Kanban board engine for the team dashboard
//!
//! This crate holds the logical model behind the dashboard's task board: the
//! ordered task collection, the rules that decide where a dragged card lands,
//! and the drag session state machine that turns pointer and keyboard gestures
//! into exactly one board move.
//!
//! ## Overview
//!
//! - **One collection** - [`BoardStore`] owns a single ordered `Vec<Task>`.
//!   Same-status relative order is the top-to-bottom order of each column.
//! - **One mutation** - [`BoardStore::apply_move`] is the only way to change
//!   it. Unknown ids and self-drops are no-ops, never errors.
//! - **Explicit sessions** - [`drag::DragSession`] is a plain value; nothing is
//!   ambient. [`drag::DragResolver`] applies a resolved session to the board.
//! - **Black-box filters** - column views work over any [`filter::TaskSubset`],
//!   however it was chosen.
//!
//! ## Basic Usage
//!
//! ```rust
//! use teamboard_kanban::{BoardStore, Status, filter::TaskQuery};
//! use teamboard_kanban::drag::{DragResolver, PointerPosition};
//!
//! let mut board = BoardStore::demo();
//!
//! // The rendering layer supplies hit testing
//! let hit_test = |p: PointerPosition| -> Option<String> {
//!     (p.x > 300.0).then(|| "done".to_string())
//! };
//! let mut resolver = DragResolver::new(hit_test);
//!
//! resolver.pointer_down("1");
//! resolver.pointer_move(PointerPosition::new(320.0, 40.0));
//! resolver.pointer_up(&mut board);
//!
//! assert_eq!(board.task("1").unwrap().status, Status::Done);
//!
//! let subset = board.filtered(&TaskQuery::new().with_project("Website Redesign"));
//! let done: Vec<_> = board.tasks_in_column(&subset, Status::Done).collect();
//! assert_eq!(done.len(), 1);
//! ```
//!
//! ## Modules
//!
//! ```text
//! types      Task, Status/Column, Priority, Assignee, TaskId
//! ordering   index and key based sequence moves
//! board      BoardStore, move planning
//! task       MoveTask command (the resolved intent)
//! filter     predicates, subsets, column projections
//! drag       session state machine and resolver
//! config     figment-backed BoardConfig
//! seed       JSON/YAML seed documents
//! defaults   built-in columns and demo tasks
//! ```

pub mod board;
pub mod config;
pub mod defaults;
pub mod drag;
mod error;
pub mod filter;
pub mod ordering;
pub mod seed;
pub mod task;
pub mod types;

pub use board::{BoardStore, MoveOutcome, MovePlan, NoOpReason};
pub use config::{BoardConfig, GrabPolicy};
pub use error::{KanbanError, Result};
pub use task::MoveTask;

// Re-export commonly used types
pub use types::{Assignee, Column, Priority, Status, Task, TaskId};
