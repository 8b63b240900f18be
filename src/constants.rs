//! Shared application-wide constants.
//! Centralizes tweakable values used across the seat map widget, rendering and export.

use egui::Color32;

// Viewport
/// Multiplicative zoom step applied per wheel tick.
pub const ZOOM_STEP: f32 = 1.1;
/// Smallest allowed viewport scale.
pub const MIN_SCALE: f32 = 0.2;
/// Largest allowed viewport scale.
pub const MAX_SCALE: f32 = 8.0;

// Widget sizing
/// Default canvas width in pixels when the owner supplies none.
pub const DEFAULT_WIDTH: f32 = 800.0;
/// Default canvas height in pixels when the owner supplies none.
pub const DEFAULT_HEIGHT: f32 = 600.0;

// Grid
/// Spacing between background grid lines (canvas units).
pub const GRID_SPACING: f32 = 50.0;
/// Grid line colour.
pub const GRID_COLOR: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);

// Tables
/// Default table fill.
pub const TABLE_FILL: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6);
/// Default table outline.
pub const TABLE_STROKE: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
/// Table outline width.
pub const TABLE_STROKE_WIDTH: f32 = 2.0;
/// Corner radius for rectangular tables.
pub const TABLE_CORNER_RADIUS: f32 = 8.0;
/// Table label font size.
pub const TABLE_FONT_SIZE: f32 = 14.0;
/// Opacity of a table while it is being dragged.
pub const DRAG_OPACITY: f32 = 0.7;

// Seats
/// Radius of every seat circle.
pub const SEAT_RADIUS: f32 = 12.0;
/// Seat fill in the default style.
pub const SEAT_FILL: Color32 = Color32::WHITE;
/// Seat outline in the default style.
pub const SEAT_STROKE: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
/// Seat label font size.
pub const SEAT_FONT_SIZE: f32 = 10.0;
/// Label colour for tables and unhighlighted seats.
pub const LABEL_COLOR: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);

// Highlight
/// Fill of the highlighted seat.
pub const HIGHLIGHT_FILL: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
/// Outline of the highlighted seat.
pub const HIGHLIGHT_STROKE: Color32 = Color32::from_rgb(0x1d, 0x4e, 0xd8);
/// Outline width of the highlighted seat.
pub const HIGHLIGHT_STROKE_WIDTH: f32 = 3.0;
/// Radius of the dashed ring drawn around the highlighted seat.
pub const HIGHLIGHT_RING_RADIUS: f32 = 20.0;
/// Dash and gap length of the highlight ring.
pub const HIGHLIGHT_RING_DASH: f32 = 5.0;
/// Base opacity of the highlight ring.
pub const HIGHLIGHT_RING_OPACITY: f32 = 0.7;
/// Pulse period of the highlight ring, in seconds.
pub const HIGHLIGHT_PULSE_PERIOD: f64 = 1.6;

// Undo/redo
/// Maximum number of undo history entries to retain.
pub const MAX_UNDO_HISTORY: usize = 100;

// Editor activity feed
/// Number of recent table moves shown in the editor side panel.
pub const MAX_ACTIVITY_ENTRIES: usize = 8;
