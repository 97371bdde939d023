//! DragResolver - turns gestures into board moves

use super::session::{DragEvent, DragSession, Phase, Transition};
use crate::board::{BoardStore, MoveOutcome};
use crate::config::GrabPolicy;
use crate::task::MoveTask;
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pointer coordinates in the rendering surface's space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps a pointer position to the task or column id under it.
///
/// Supplied by the rendering layer (closest-center against card and column
/// bounds, for instance). `None` means empty space.
pub trait HitTest {
    fn hit_test(&self, position: PointerPosition) -> Option<String>;
}

impl<F> HitTest for F
where
    F: Fn(PointerPosition) -> Option<String>,
{
    fn hit_test(&self, position: PointerPosition) -> Option<String> {
        self(position)
    }
}

/// Receives resolved moves. The board is the only production implementation.
pub trait MoveSink {
    fn apply(&mut self, intent: &MoveTask) -> MoveOutcome;
}

impl MoveSink for BoardStore {
    fn apply(&mut self, intent: &MoveTask) -> MoveOutcome {
        intent.execute(self)
    }
}

/// Result of routing one event
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub transition: Transition,
    /// Present only when the event resolved the session
    pub outcome: Option<MoveOutcome>,
}

/// A drag session bound to a hit tester.
///
/// The board is passed per event instead of being held, so the store stays
/// the sole owner of the task collection. Each resolved session calls
/// [`MoveSink::apply`] exactly once; every other transition calls it zero
/// times.
pub struct DragResolver<H> {
    session: DragSession,
    hit_test: H,
}

impl<H: HitTest> DragResolver<H> {
    pub fn new(hit_test: H) -> Self {
        Self::with_policy(hit_test, GrabPolicy::default())
    }

    pub fn with_policy(hit_test: H, policy: GrabPolicy) -> Self {
        Self {
            session: DragSession::with_policy(policy),
            hit_test,
        }
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Route an event, applying the move if it resolves the session
    pub fn dispatch(&mut self, event: DragEvent, sink: &mut impl MoveSink) -> Dispatch {
        let transition = self.session.handle(event);
        let outcome = match &transition {
            Transition::Resolved(intent) => {
                debug!(task = %intent.id, over = %intent.over, "drag resolved");
                Some(sink.apply(intent))
            }
            _ => None,
        };
        Dispatch {
            transition,
            outcome,
        }
    }

    pub fn pointer_down(&mut self, task_id: impl Into<TaskId>) -> Transition {
        self.session.handle(DragEvent::PointerDown(task_id.into()))
    }

    /// Hit-test `position` and record the result as the hover target
    pub fn pointer_move(&mut self, position: PointerPosition) -> Transition {
        let over = self.hit_test.hit_test(position);
        self.session.handle(DragEvent::Hover(over))
    }

    pub fn pointer_up(&mut self, sink: &mut impl MoveSink) -> Dispatch {
        self.dispatch(DragEvent::PointerUp, sink)
    }

    pub fn keyboard_grab(&mut self, task_id: impl Into<TaskId>) -> Transition {
        self.session.handle(DragEvent::KeyboardGrab(task_id.into()))
    }

    /// Keyboard navigation moved the drop target directly to `over`
    pub fn keyboard_target(&mut self, over: impl Into<String>) -> Transition {
        self.session.handle(DragEvent::Hover(Some(over.into())))
    }

    pub fn keyboard_confirm(&mut self, sink: &mut impl MoveSink) -> Dispatch {
        self.dispatch(DragEvent::KeyboardConfirm, sink)
    }

    pub fn escape(&mut self) -> Transition {
        self.session.handle(DragEvent::Escape)
    }

    pub fn focus_lost(&mut self) -> Transition {
        self.session.handle(DragEvent::FocusLost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    /// Records every move it receives
    #[derive(Default)]
    struct Recorder {
        moves: Vec<MoveTask>,
    }

    impl MoveSink for Recorder {
        fn apply(&mut self, intent: &MoveTask) -> MoveOutcome {
            self.moves.push(intent.clone());
            MoveOutcome::Unchanged {
                reason: crate::board::NoOpReason::UnknownTask,
            }
        }
    }

    /// Columns are 100px wide bands; anything below y=500 is empty space
    fn columns_hit_test(position: PointerPosition) -> Option<String> {
        if position.y > 500.0 || position.x < 0.0 {
            return None;
        }
        Status::ALL
            .get((position.x / 100.0) as usize)
            .map(|s| s.as_str().to_string())
    }

    #[test]
    fn test_pointer_gesture_applies_once() {
        let mut resolver = DragResolver::new(columns_hit_test);
        let mut sink = Recorder::default();

        resolver.pointer_down("x");
        resolver.pointer_move(PointerPosition::new(150.0, 10.0));
        resolver.pointer_move(PointerPosition::new(350.0, 10.0));
        let dispatch = resolver.pointer_up(&mut sink);

        assert!(dispatch.outcome.is_some());
        assert_eq!(sink.moves, vec![MoveTask::new("x", "done")]);
        assert_eq!(resolver.phase(), Phase::Idle);
    }

    #[test]
    fn test_release_over_empty_space_applies_nothing() {
        let mut resolver = DragResolver::new(columns_hit_test);
        let mut sink = Recorder::default();

        resolver.pointer_down("x");
        resolver.pointer_move(PointerPosition::new(150.0, 900.0));
        let dispatch = resolver.pointer_up(&mut sink);

        assert!(dispatch.outcome.is_none());
        assert!(sink.moves.is_empty());
    }

    #[test]
    fn test_stray_release_applies_nothing() {
        let mut resolver = DragResolver::new(columns_hit_test);
        let mut sink = Recorder::default();

        let dispatch = resolver.pointer_up(&mut sink);
        assert!(dispatch.outcome.is_none());
        assert!(sink.moves.is_empty());
    }

    #[test]
    fn test_keyboard_flow_moves_on_board() {
        let mut resolver = DragResolver::new(|_: PointerPosition| -> Option<String> { None });
        let mut board = BoardStore::demo();

        resolver.keyboard_grab("1");
        resolver.keyboard_target("review");
        let dispatch = resolver.keyboard_confirm(&mut board);

        assert!(dispatch.outcome.unwrap().is_moved());
        assert_eq!(board.task("1").unwrap().status, Status::Review);
    }

    #[test]
    fn test_escape_then_release_applies_nothing() {
        let mut resolver = DragResolver::new(columns_hit_test);
        let mut sink = Recorder::default();

        resolver.pointer_down("x");
        resolver.pointer_move(PointerPosition::new(50.0, 10.0));
        resolver.escape();
        resolver.pointer_up(&mut sink);

        assert!(sink.moves.is_empty());
    }
}
