//! Drag session state machine
//!
//! ```text
//! Idle ──grab──▶ Dragging ──release with target──▶ (Resolved) ──▶ Idle
//!                   │
//!                   └──release without target / escape / focus lost──▶ (Cancelled) ──▶ Idle
//! ```
//!
//! `Resolved` and `Cancelled` are transient: they are reported as the
//! [`Transition`] of the event that caused them, and the session is back in
//! `Idle` by the time the caller sees them.

use crate::config::GrabPolicy;
use crate::task::MoveTask;
use crate::types::TaskId;
use serde::Serialize;
use tracing::{trace, warn};

/// Where a grab came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrabSource {
    Pointer,
    Keyboard,
}

/// Input driving a drag session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// Pointer pressed on a task card
    PointerDown(TaskId),
    /// Keyboard grab of the focused task card
    KeyboardGrab(TaskId),
    /// Hover target changed; `None` when over empty space
    Hover(Option<String>),
    /// Pointer released
    PointerUp,
    /// Keyboard drop confirmation
    KeyboardConfirm,
    /// Explicit cancellation (escape)
    Escape,
    /// The surface lost focus mid-gesture
    FocusLost,
}

/// Why a session ended without a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// Released while not over any drop surface
    NoTarget,
    Escape,
    FocusLost,
}

/// Why an event had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Hover, release or cancel arrived with no session active
    NotDragging,
    /// A grab arrived while a session was active
    AlreadyDragging,
}

/// What an event did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A session began. `replaced` names the subject of a session the grab
    /// cancelled under [`GrabPolicy::CancelPrevious`].
    Started {
        task_id: TaskId,
        replaced: Option<TaskId>,
    },
    /// The hover target changed
    Hovering { over: Option<String> },
    /// The session ended over a target; apply this move exactly once
    Resolved(MoveTask),
    /// The session ended with nothing to apply
    Cancelled {
        task_id: TaskId,
        reason: CancelReason,
    },
    /// The event did not apply in the current state
    Ignored(IgnoreReason),
}

/// Coarse session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    Dragging {
        task_id: TaskId,
        over: Option<String>,
        source: GrabSource,
    },
}

/// One drag gesture at a time, from grab to release.
///
/// The session is an explicit value owned by whoever routes input events; it
/// never touches the board. A resolved session yields a [`MoveTask`] the caller
/// applies.
#[derive(Debug, Clone)]
pub struct DragSession {
    state: State,
    policy: GrabPolicy,
}

impl DragSession {
    /// A new idle session that ignores grabs while dragging
    pub fn new() -> Self {
        Self::with_policy(GrabPolicy::default())
    }

    /// A new idle session with an explicit grab policy
    pub fn with_policy(policy: GrabPolicy) -> Self {
        Self {
            state: State::Idle,
            policy,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Dragging { .. } => Phase::Dragging,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase() == Phase::Dragging
    }

    /// The task being dragged
    pub fn subject(&self) -> Option<&TaskId> {
        match &self.state {
            State::Dragging { task_id, .. } => Some(task_id),
            State::Idle => None,
        }
    }

    /// The current hover target, for live feedback
    pub fn hover_target(&self) -> Option<&str> {
        match &self.state {
            State::Dragging { over, .. } => over.as_deref(),
            State::Idle => None,
        }
    }

    /// How the active session was started
    pub fn source(&self) -> Option<GrabSource> {
        match &self.state {
            State::Dragging { source, .. } => Some(*source),
            State::Idle => None,
        }
    }

    pub fn policy(&self) -> GrabPolicy {
        self.policy
    }

    /// Feed one input event
    pub fn handle(&mut self, event: DragEvent) -> Transition {
        match event {
            DragEvent::PointerDown(task_id) => self.grab(task_id, GrabSource::Pointer),
            DragEvent::KeyboardGrab(task_id) => self.grab(task_id, GrabSource::Keyboard),
            DragEvent::Hover(target) => self.hover(target),
            DragEvent::PointerUp | DragEvent::KeyboardConfirm => self.release(),
            DragEvent::Escape => self.cancel(CancelReason::Escape),
            DragEvent::FocusLost => self.cancel(CancelReason::FocusLost),
        }
    }

    fn grab(&mut self, task_id: TaskId, source: GrabSource) -> Transition {
        let replaced = match (&self.state, self.policy) {
            (State::Idle, _) => None,
            (State::Dragging { task_id: active, .. }, GrabPolicy::Ignore) => {
                warn!(active = %active, ignored = %task_id, "grab while dragging ignored");
                return Transition::Ignored(IgnoreReason::AlreadyDragging);
            }
            (State::Dragging { task_id: active, .. }, GrabPolicy::CancelPrevious) => {
                warn!(active = %active, replacement = %task_id, "grab cancels active drag");
                Some(active.clone())
            }
        };

        trace!(task = %task_id, ?source, "drag started");
        self.state = State::Dragging {
            task_id: task_id.clone(),
            over: None,
            source,
        };
        Transition::Started { task_id, replaced }
    }

    fn hover(&mut self, target: Option<String>) -> Transition {
        match &mut self.state {
            State::Dragging { over, .. } => {
                trace!(?target, "hover target");
                *over = target.clone();
                Transition::Hovering { over: target }
            }
            State::Idle => Transition::Ignored(IgnoreReason::NotDragging),
        }
    }

    fn release(&mut self) -> Transition {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Dragging {
                task_id,
                over: Some(over),
                ..
            } => Transition::Resolved(MoveTask::new(task_id, over)),
            State::Dragging { task_id, over: None, .. } => Transition::Cancelled {
                task_id,
                reason: CancelReason::NoTarget,
            },
            State::Idle => {
                warn!("release without an active drag");
                Transition::Ignored(IgnoreReason::NotDragging)
            }
        }
    }

    fn cancel(&mut self, reason: CancelReason) -> Transition {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Dragging { task_id, .. } => {
                trace!(task = %task_id, ?reason, "drag cancelled");
                Transition::Cancelled { task_id, reason }
            }
            State::Idle => Transition::Ignored(IgnoreReason::NotDragging),
        }
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}
