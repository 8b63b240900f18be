//! Painting a [`Scene`] and the background grid through an egui painter.

use super::scene::{Primitive, Scene, SceneShape};
use super::viewport::Viewport;
use crate::constants::{GRID_COLOR, GRID_SPACING};
use egui::{Color32, Painter, Pos2, Rect, Stroke, StrokeKind};

/// Number of segments used to approximate the dashed highlight ring.
const RING_SEGMENTS: usize = 64;

/// Maps canvas coordinates into the painter's (window) coordinates.
struct ScreenMap {
    origin: Pos2,
    viewport: Viewport,
}

impl ScreenMap {
    fn pos(&self, canvas: Pos2) -> Pos2 {
        self.viewport.canvas_to_screen(canvas) + self.origin.to_vec2()
    }

    fn len(&self, canvas_len: f32) -> f32 {
        canvas_len * self.viewport.scale
    }

    fn stroke(&self, stroke: Stroke, opacity: f32) -> Stroke {
        Stroke::new(self.len(stroke.width), stroke.color.gamma_multiply(opacity))
    }
}

/// Draws the grid lines covering `rect`, fixed to canvas space.
pub fn draw_grid(painter: &Painter, rect: Rect, viewport: &Viewport) {
    let screen_spacing = GRID_SPACING * viewport.scale;
    if screen_spacing < 4.0 {
        return;
    }
    let stroke = Stroke::new(1.0, GRID_COLOR);
    let map = ScreenMap {
        origin: rect.min,
        viewport: *viewport,
    };

    let top_left = viewport.screen_to_canvas(Pos2::ZERO);
    let bottom_right = viewport.screen_to_canvas(rect.size().to_pos2());

    let mut x = (top_left.x / GRID_SPACING).floor() * GRID_SPACING;
    while x <= bottom_right.x {
        let sx = map.pos(egui::pos2(x, 0.0)).x;
        painter.line_segment([egui::pos2(sx, rect.min.y), egui::pos2(sx, rect.max.y)], stroke);
        x += GRID_SPACING;
    }

    let mut y = (top_left.y / GRID_SPACING).floor() * GRID_SPACING;
    while y <= bottom_right.y {
        let sy = map.pos(egui::pos2(0.0, y)).y;
        painter.line_segment([egui::pos2(rect.min.x, sy), egui::pos2(rect.max.x, sy)], stroke);
        y += GRID_SPACING;
    }
}

/// Draws every shape of the scene. `pulse` scales the highlight ring's alpha.
pub fn draw_scene(painter: &Painter, rect: Rect, viewport: &Viewport, scene: &Scene, pulse: f32) {
    let map = ScreenMap {
        origin: rect.min,
        viewport: *viewport,
    };
    for shape in &scene.shapes {
        draw_shape(painter, &map, shape, pulse);
    }
}

fn draw_shape(painter: &Painter, map: &ScreenMap, shape: &SceneShape, pulse: f32) {
    let opacity = shape.opacity;
    for primitive in &shape.primitives {
        match primitive {
            Primitive::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                painter.circle(
                    map.pos(*center),
                    map.len(*radius),
                    fill.gamma_multiply(opacity),
                    map.stroke(*stroke, opacity),
                );
            }
            Primitive::DashedRing {
                center,
                radius,
                stroke,
                dash,
            } => {
                let center = map.pos(*center);
                let radius = map.len(*radius);
                let points: Vec<Pos2> = (0..=RING_SEGMENTS)
                    .map(|i| {
                        let angle = i as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
                        center + radius * egui::vec2(angle.cos(), angle.sin())
                    })
                    .collect();
                let dash = map.len(*dash).max(1.0);
                painter.extend(egui::Shape::dashed_line(
                    &points,
                    map.stroke(*stroke, opacity * pulse),
                    dash,
                    dash,
                ));
            }
            Primitive::Rect {
                rect,
                corner_radius,
                fill,
                stroke,
            } => {
                let screen_rect = Rect::from_min_max(map.pos(rect.min), map.pos(rect.max));
                let rounding = map.len(*corner_radius);
                painter.rect_filled(screen_rect, rounding, fill.gamma_multiply(opacity));
                painter.rect_stroke(
                    screen_rect,
                    rounding,
                    map.stroke(*stroke, opacity),
                    StrokeKind::Inside,
                );
            }
            Primitive::Label {
                center,
                text,
                font_size,
                color,
            } => {
                let size = map.len(*font_size).clamp(4.0, 96.0);
                painter.text(
                    map.pos(*center),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(size),
                    color.gamma_multiply(opacity),
                );
            }
        }
    }
}

/// Alpha multiplier for the highlight ring at time `t` seconds.
pub fn pulse_at(t: f64, period: f64) -> f32 {
    let phase = (t / period) * std::f64::consts::TAU;
    (0.7 + 0.3 * phase.sin()) as f32
}

/// Background fill of the canvas area.
pub fn background(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_gray(32)
    } else {
        Color32::from_rgb(0xf9, 0xfa, 0xfb)
    }
}
