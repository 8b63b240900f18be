//! The seat map widget.
//!
//! [`SeatMap`] draws a [`Layout`] on a pannable, zoomable canvas, optionally
//! lets the user drag tables, and highlights one seat. It never mutates the
//! layout it is given: finished drags come back as [`SeatMapEvent`]s which the
//! owner applies to its own copy.
//!
//! # Module Organization
//!
//! - `viewport` - scale/offset transform and zoom-to-cursor
//! - `state` - gesture state machine types owned by one widget instance
//! - `interaction` - pointer and wheel handlers
//! - `hit` - hit-testing tables and seats
//! - `scene` - pure scene description shared by painting and export
//! - `rendering` - egui painting of the scene and grid

mod hit;
mod interaction;
mod rendering;
pub mod scene;
mod state;
pub mod viewport;


pub use scene::{Primitive, Scene, SceneShape, ShapeStyle};
pub use state::{DragSession, GestureState, PointerId, SeatMapState};
pub use viewport::{Viewport, ZoomDirection};

use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, HIGHLIGHT_PULSE_PERIOD};
use crate::types::{Layout, ShapeId};
use eframe::egui;

/// Rendering and interaction options supplied by the owner on every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatMapOptions {
    /// Seat to emphasise as "your seat"
    pub highlight_seat_id: Option<ShapeId>,
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
    /// Whether the wheel zooms the view
    pub allow_zoom: bool,
    /// Whether dragging the background pans the view
    pub allow_pan: bool,
    /// Whether tables can be dragged (editing contexts only)
    pub draggable: bool,
    /// Whether dropped tables are clamped into `[0, width] x [0, height]`
    pub clamp_to_bounds: bool,
    /// Whether to draw the background grid
    pub show_grid: bool,
    /// Use dark canvas background
    pub dark_mode: bool,
}

impl Default for SeatMapOptions {
    fn default() -> Self {
        Self {
            highlight_seat_id: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            allow_zoom: true,
            allow_pan: true,
            draggable: false,
            clamp_to_bounds: false,
            show_grid: true,
            dark_mode: false,
        }
    }
}

/// Notifications emitted towards the owner.
#[derive(Debug, Clone, PartialEq)]
pub enum SeatMapEvent {
    /// The user grabbed a table
    DragStarted {
        /// The grabbed table
        id: ShapeId,
    },
    /// A drag ended; `to` is the table's new anchor position
    TableMoved {
        /// The dropped table
        id: ShapeId,
        /// Anchor position when the drag started
        from: (f32, f32),
        /// Anchor position at the drop
        to: (f32, f32),
    },
}

impl SeatMapEvent {
    /// Commits the event into the owner's layout.
    ///
    /// Returns `true` when a table position was written.
    pub fn apply_to(&self, layout: &mut Layout) -> bool {
        match self {
            SeatMapEvent::DragStarted { .. } => false,
            SeatMapEvent::TableMoved { id, to, .. } => layout.move_table(id, *to).is_some(),
        }
    }
}

/// What one call to [`SeatMap::show`] produced.
pub struct SeatMapResponse {
    /// The canvas response
    pub response: egui::Response,
    /// Events emitted this frame, in order
    pub events: Vec<SeatMapEvent>,
    /// Seat under the pointer, if any
    pub hovered_seat: Option<ShapeId>,
}

/// A seat map instance. Dropping it and creating a new one resets the view.
#[derive(Debug, Default)]
pub struct SeatMap {
    state: SeatMapState,
}

impl SeatMap {
    /// Creates a freshly mounted seat map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to viewport and gesture state.
    pub fn state(&self) -> &SeatMapState {
        &self.state
    }

    /// Current pan/zoom transform.
    pub fn viewport(&self) -> &Viewport {
        &self.state.viewport
    }

    /// Whether the given shape is being dragged right now.
    pub fn is_dragging(&self, id: &str) -> bool {
        self.state.is_dragging(id)
    }

    /// Restores scale 1 and zero offset.
    pub fn reset_view(&mut self) {
        self.state.viewport.reset();
    }

    /// Ends any active gesture at its last known position.
    ///
    /// Owners call this when the widget stops being shown mid-gesture so no
    /// table is left dragging.
    pub fn release(&mut self, options: &SeatMapOptions) -> Option<SeatMapEvent> {
        self.state.cancel(options)
    }

    /// Allocates the canvas, handles this frame's input and paints the layout.
    pub fn show(&mut self, ui: &mut egui::Ui, layout: &Layout, options: &SeatMapOptions) -> SeatMapResponse {
        let size = egui::vec2(options.width.max(1.0), options.height.max(1.0));
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let rect = response.rect;
        self.state.viewport.resize(rect.size());

        let mut events = Vec::new();
        self.handle_input(ui, rect, layout, options, &mut events);

        let hover = ui.input(|i| i.pointer.hover_pos()).filter(|p| rect.contains(*p));
        let hovered_seat = hover.and_then(|p| {
            let canvas = self.state.viewport.screen_to_canvas(p - rect.min.to_vec2());
            hit::seat_at(layout, (canvas.x, canvas.y)).map(|s| s.id.clone())
        });

        if self.state.is_active() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if hover.is_some() && (options.allow_pan || options.draggable) {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }

        let drag = match &self.state.gesture {
            GestureState::Dragging(session) => Some((session.id.as_str(), session.current)),
            _ => None,
        };
        let scene = Scene::build(layout, options.highlight_seat_id.as_deref(), drag);

        painter.rect_filled(rect, 0.0, rendering::background(options.dark_mode));
        if options.show_grid {
            rendering::draw_grid(&painter, rect, &self.state.viewport);
        }

        let pulse = if scene.highlighted().is_some() {
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_millis(33));
            rendering::pulse_at(ui.input(|i| i.time), HIGHLIGHT_PULSE_PERIOD)
        } else {
            1.0
        };
        rendering::draw_scene(&painter, rect, &self.state.viewport, &scene, pulse);

        SeatMapResponse {
            response,
            events,
            hovered_seat,
        }
    }

    /// Translates egui pointer and wheel input into state machine calls.
    fn handle_input(
        &mut self,
        ui: &egui::Ui,
        rect: egui::Rect,
        layout: &Layout,
        options: &SeatMapOptions,
        events: &mut Vec<SeatMapEvent>,
    ) {
        let (pressed, released, down, latest, hover, scroll_y) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.latest_pos(),
                i.pointer.hover_pos(),
                i.raw_scroll_delta.y,
            )
        });
        let local = |p: egui::Pos2| p - rect.min.to_vec2();
        let pointer = PointerId::MOUSE;

        if self.state.is_active() {
            if released || !down {
                events.extend(self.state.pointer_up(options, pointer, latest.map(local)));
            } else if let Some(pos) = latest {
                self.state.pointer_move(options, pointer, local(pos));
            }
        }

        if pressed && !self.state.is_active() {
            if let Some(pos) = latest.filter(|p| rect.contains(*p)) {
                events.extend(self.state.pointer_down(layout, options, pointer, local(pos)));
            }
        }

        if let (Some(direction), Some(pos)) = (
            ZoomDirection::from_scroll(scroll_y),
            hover.filter(|p| rect.contains(*p)),
        ) {
            self.state.wheel(options, direction, local(pos));
        }
    }
}
