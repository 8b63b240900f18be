//! State owned by a single seat map instance.
//!
//! Viewport and gesture state live here and never leave the widget. The layout
//! itself belongs to the owner; during a drag the widget only keeps a working
//! copy of the dragged table's position.

use super::viewport::Viewport;
use crate::types::ShapeId;
use egui::{Pos2, Vec2};

/// Identifies the pointer driving a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The mouse, or the primary touch that egui folds into pointer events.
    pub const MOUSE: PointerId = PointerId(0);
}

/// An in-flight table drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Pointer that started the drag; other pointers are ignored until it ends
    pub pointer: PointerId,
    /// Table being dragged
    pub id: ShapeId,
    /// Committed position when the drag started
    pub origin: (f32, f32),
    /// Table anchor minus the canvas point that was grabbed
    pub grab_offset: Vec2,
    /// Working position, shown while dragging and committed on release
    pub current: (f32, f32),
    /// Last widget-local screen position seen from the pointer
    pub last_screen: Pos2,
}

/// The single-pointer gesture state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// No pointer is down
    #[default]
    Idle,
    /// The background is being dragged to move the view
    Panning {
        /// Pointer that started the pan
        pointer: PointerId,
        /// Previous widget-local screen position, used for the pan delta
        last_screen: Pos2,
    },
    /// A table is being dragged
    Dragging(DragSession),
}

impl GestureState {
    /// Pointer that owns the current gesture, if any.
    pub fn pointer(&self) -> Option<PointerId> {
        match self {
            GestureState::Idle => None,
            GestureState::Panning { pointer, .. } => Some(*pointer),
            GestureState::Dragging(session) => Some(session.pointer),
        }
    }
}

/// Viewport plus gesture state for one widget instance.
///
/// A fresh value corresponds to a fresh mount: scale 1, zero offset, idle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatMapState {
    /// Current pan/zoom transform
    pub viewport: Viewport,
    /// Current gesture
    pub gesture: GestureState,
}

impl SeatMapState {
    /// Creates state for a newly mounted widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any pointer gesture is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self.gesture, GestureState::Idle)
    }

    /// Id of the table currently being dragged.
    ///
    /// At most one table can be dragging; the gesture holds a single session.
    pub fn dragging(&self) -> Option<&str> {
        match &self.gesture {
            GestureState::Dragging(session) => Some(session.id.as_str()),
            _ => None,
        }
    }

    /// Whether the given shape is currently being dragged.
    pub fn is_dragging(&self, id: &str) -> bool {
        self.dragging() == Some(id)
    }

    /// Working position of the dragged table, if `id` is being dragged.
    pub fn working_position(&self, id: &str) -> Option<(f32, f32)> {
        match &self.gesture {
            GestureState::Dragging(session) if session.id == id => Some(session.current),
            _ => None,
        }
    }
}
