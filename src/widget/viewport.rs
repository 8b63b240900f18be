//! Pan/zoom transform between widget-local screen space and canvas space.
//!
//! Screen positions handed to the viewport are relative to the top-left corner
//! of the seat map widget, not to the window.

use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_SCALE, MIN_SCALE, ZOOM_STEP};
use egui::{Pos2, Vec2};

/// Direction of a single wheel tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Scale up by [`ZOOM_STEP`]
    In,
    /// Scale down by [`ZOOM_STEP`]
    Out,
}

impl ZoomDirection {
    /// Maps egui's vertical scroll delta to a zoom direction.
    ///
    /// Rolling the wheel toward the user (a negative delta in egui) zooms in.
    /// Returns `None` for a zero or non-finite delta.
    pub fn from_scroll(delta_y: f32) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            None
        } else if delta_y < 0.0 {
            Some(Self::In)
        } else {
            Some(Self::Out)
        }
    }
}

/// Scale and offset applied to the canvas, plus the widget's pixel size.
///
/// `screen = canvas * scale + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Current zoom level, always within `[MIN_SCALE, MAX_SCALE]`
    pub scale: f32,
    /// Pan offset in screen pixels
    pub offset: Vec2,
    /// Widget size in screen pixels
    pub size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            size: egui::vec2(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }
}

impl Viewport {
    /// Converts a widget-local screen position to canvas coordinates.
    pub fn screen_to_canvas(&self, screen: Pos2) -> Pos2 {
        (screen - self.offset) / self.scale
    }

    /// Converts a canvas position to widget-local screen coordinates.
    pub fn canvas_to_screen(&self, canvas: Pos2) -> Pos2 {
        canvas * self.scale + self.offset
    }

    /// Applies one wheel tick, keeping the canvas point under `pointer` fixed.
    ///
    /// The new scale is clamped; the offset is always derived from the clamped
    /// scale so the point under the cursor never drifts. Returns `true` when
    /// the scale changed.
    pub fn zoom_at(&mut self, direction: ZoomDirection, pointer: Pos2) -> bool {
        if !pointer.x.is_finite() || !pointer.y.is_finite() {
            return false;
        }

        let canvas_point = self.screen_to_canvas(pointer);
        let target = match direction {
            ZoomDirection::In => self.scale * ZOOM_STEP,
            ZoomDirection::Out => self.scale / ZOOM_STEP,
        };
        let new_scale = target.clamp(MIN_SCALE, MAX_SCALE);
        if (new_scale - self.scale).abs() <= f32::EPSILON {
            return false;
        }

        self.scale = new_scale;
        self.offset = pointer.to_vec2() - canvas_point.to_vec2() * new_scale;
        true
    }

    /// Translates the view by a screen-space delta. Shapes do not move.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta.x.is_finite() && delta.y.is_finite() {
            self.offset += delta;
        }
    }

    /// Updates the widget size. Scale, offset and shape positions are untouched.
    pub fn resize(&mut self, size: Vec2) {
        if size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0 {
            self.size = size;
        }
    }

    /// Clamps a canvas point into the unscaled canvas area `[0, width] x [0, height]`.
    pub fn clamp_to_canvas(&self, point: (f32, f32)) -> (f32, f32) {
        (
            point.0.clamp(0.0, self.size.x),
            point.1.clamp(0.0, self.size.y),
        )
    }

    /// Restores scale 1 and zero offset, keeping the size.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset = Vec2::ZERO;
    }
}
