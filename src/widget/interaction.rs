//! Pointer and wheel handling for the seat map.
//!
//! These handlers are independent of egui's input plumbing: the widget feeds
//! them widget-local screen positions, and they return the events the owner
//! should see. Per table the machine is `idle -> dragging -> idle`.

use super::hit;
use super::state::{DragSession, GestureState, PointerId, SeatMapState};
use super::viewport::ZoomDirection;
use super::{SeatMapEvent, SeatMapOptions};
use crate::types::Layout;
use egui::Pos2;

fn finite(p: Pos2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

impl SeatMapState {
    /// Handles a pointer press at a widget-local screen position.
    ///
    /// Over a table with dragging enabled this starts a drag and returns
    /// [`SeatMapEvent::DragStarted`]. Anywhere else it starts a pan if panning
    /// is allowed. A press from a second pointer while a gesture is active is
    /// ignored.
    pub fn pointer_down(
        &mut self,
        layout: &Layout,
        options: &SeatMapOptions,
        pointer: PointerId,
        screen: Pos2,
    ) -> Option<SeatMapEvent> {
        if let Some(owner) = self.gesture.pointer() {
            log::debug!("ignoring press from {pointer:?}, gesture owned by {owner:?}");
            return None;
        }
        if !finite(screen) {
            return None;
        }

        let canvas = self.viewport.screen_to_canvas(screen);
        if options.draggable {
            if let Some(table) = hit::table_at(layout, (canvas.x, canvas.y), |t| t.position) {
                log::debug!("drag start on {}", table.id);
                self.gesture = GestureState::Dragging(DragSession {
                    pointer,
                    id: table.id.clone(),
                    origin: table.position,
                    grab_offset: egui::vec2(table.position.0 - canvas.x, table.position.1 - canvas.y),
                    current: table.position,
                    last_screen: screen,
                });
                return Some(SeatMapEvent::DragStarted {
                    id: table.id.clone(),
                });
            }
        }

        if options.allow_pan {
            self.gesture = GestureState::Panning {
                pointer,
                last_screen: screen,
            };
        }
        None
    }

    /// Handles pointer motion. Pans the view or moves the dragged table.
    pub fn pointer_move(&mut self, options: &SeatMapOptions, pointer: PointerId, screen: Pos2) {
        if self.gesture.pointer() != Some(pointer) || !finite(screen) {
            return;
        }

        let Self { viewport, gesture } = self;
        match gesture {
            GestureState::Idle => {}
            GestureState::Panning { last_screen, .. } => {
                if options.allow_pan {
                    viewport.pan_by(screen - *last_screen);
                }
                *last_screen = screen;
            }
            GestureState::Dragging(session) => {
                let canvas = viewport.screen_to_canvas(screen) + session.grab_offset;
                session.current = (canvas.x, canvas.y);
                session.last_screen = screen;
            }
        }
    }

    /// Handles a pointer release and ends the gesture.
    ///
    /// `screen` is `None` when the release happened where no position is known
    /// (outside the window, pointer gone); the drag then ends at the last
    /// known position. Returns [`SeatMapEvent::TableMoved`] when a drag ended.
    pub fn pointer_up(
        &mut self,
        options: &SeatMapOptions,
        pointer: PointerId,
        screen: Option<Pos2>,
    ) -> Option<SeatMapEvent> {
        if self.gesture.pointer() != Some(pointer) {
            return None;
        }
        if let Some(screen) = screen {
            self.pointer_move(options, pointer, screen);
        }

        match std::mem::take(&mut self.gesture) {
            GestureState::Dragging(session) => {
                let to = if options.clamp_to_bounds {
                    self.viewport.clamp_to_canvas(session.current)
                } else {
                    session.current
                };
                log::debug!("drag end on {} at {:?}", session.id, to);
                Some(SeatMapEvent::TableMoved {
                    id: session.id,
                    from: session.origin,
                    to,
                })
            }
            GestureState::Panning { .. } | GestureState::Idle => None,
        }
    }

    /// Ends whatever gesture is active at its last known position.
    pub fn cancel(&mut self, options: &SeatMapOptions) -> Option<SeatMapEvent> {
        let pointer = self.gesture.pointer()?;
        self.pointer_up(options, pointer, None)
    }

    /// Handles one wheel tick at a widget-local screen position.
    ///
    /// Returns `true` when the zoom level changed.
    pub fn wheel(&mut self, options: &SeatMapOptions, direction: ZoomDirection, screen: Pos2) -> bool {
        options.allow_zoom && self.viewport.zoom_at(direction, screen)
    }
}
