//! Drag-and-drop gesture handling

mod resolver;
mod session;

pub use resolver::{Dispatch, DragResolver, HitTest, MoveSink, PointerPosition};
pub use session::{
    CancelReason, DragEvent, DragSession, GrabSource, IgnoreReason, Phase, Transition,
};
