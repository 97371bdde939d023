//! Task commands

mod mv;

pub use mv::MoveTask;
