//! Render-ready description of a seat map.
//!
//! A [`Scene`] is built purely from a layout, the highlighted seat and the
//! in-flight drag. Everything is in canvas coordinates; the painter and the
//! SVG exporter apply their own transforms.

use crate::constants::*;
use crate::types::{Layout, Seat, ShapeId, ShapeKind, Table, TableGeometry};
use egui::{Color32, Pos2, Rect, Stroke};

/// Visual state of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeStyle {
    /// Normal appearance
    Default,
    /// The viewer's seat
    Highlighted,
    /// A table being dragged, drawn translucent
    Dragging,
}

/// A single drawing instruction in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled and stroked circle
    Circle {
        /// Centre point
        center: Pos2,
        /// Radius in canvas units
        radius: f32,
        /// Interior colour
        fill: Color32,
        /// Outline
        stroke: Stroke,
    },
    /// Dashed circular outline with equal dash and gap
    DashedRing {
        /// Centre point
        center: Pos2,
        /// Radius in canvas units
        radius: f32,
        /// Outline
        stroke: Stroke,
        /// Length of each dash and each gap
        dash: f32,
    },
    /// Filled and stroked rounded rectangle
    Rect {
        /// Outer edges
        rect: Rect,
        /// Rounding of every corner
        corner_radius: f32,
        /// Interior colour
        fill: Color32,
        /// Outline
        stroke: Stroke,
    },
    /// Centered text
    Label {
        /// Point the text is centred on
        center: Pos2,
        /// The text itself
        text: String,
        /// Size in canvas units
        font_size: f32,
        /// Text colour
        color: Color32,
    },
}

/// One table or seat with its primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneShape {
    /// Id of the table or seat
    pub id: ShapeId,
    /// What the shape is
    pub kind: ShapeKind,
    /// Default, highlighted or dragging
    pub style: ShapeStyle,
    /// Multiplier applied to every colour of the shape
    pub opacity: f32,
    /// Drawn in order, later ones on top
    pub primitives: Vec<Primitive>,
}

/// All shapes in draw order: tables first, then seats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Shapes in paint order
    pub shapes: Vec<SceneShape>,
}

impl Scene {
    /// Builds the scene for a layout.
    ///
    /// `drag` is the id and working position of a table being dragged; that
    /// table is drawn at the working position with reduced opacity. A
    /// `highlight` id that matches no seat highlights nothing.
    pub fn build(layout: &Layout, highlight: Option<&str>, drag: Option<(&str, (f32, f32))>) -> Self {
        let mut shapes = Vec::with_capacity(layout.tables.len() + layout.seats.len());

        for table in &layout.tables {
            let working = drag.filter(|(id, _)| *id == table.id).map(|(_, pos)| pos);
            shapes.push(table_shape(table, working));
        }

        let mut highlighted = false;
        for seat in &layout.seats {
            let is_highlight = !highlighted && highlight == Some(seat.id.as_str());
            highlighted |= is_highlight;
            shapes.push(seat_shape(seat, is_highlight));
        }

        Self { shapes }
    }

    /// Looks up a shape by id.
    pub fn shape(&self, id: &str) -> Option<&SceneShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// The highlighted seat, if any.
    pub fn highlighted(&self) -> Option<&SceneShape> {
        self.shapes.iter().find(|s| s.style == ShapeStyle::Highlighted)
    }
}

fn table_shape(table: &Table, working: Option<(f32, f32)>) -> SceneShape {
    let position = working.unwrap_or(table.position);
    let (style, opacity) = if working.is_some() {
        (ShapeStyle::Dragging, DRAG_OPACITY)
    } else {
        (ShapeStyle::Default, 1.0)
    };

    let custom_fill = table
        .color
        .as_deref()
        .and_then(|hex| Color32::from_hex(hex).ok());
    let fill = custom_fill.unwrap_or(TABLE_FILL);
    let label_color = if custom_fill.is_some() {
        Color32::WHITE
    } else {
        LABEL_COLOR
    };
    let stroke = Stroke::new(TABLE_STROKE_WIDTH, TABLE_STROKE);

    let body = match table.geometry {
        TableGeometry::Round { radius } => Primitive::Circle {
            center: egui::pos2(position.0, position.1),
            radius,
            fill,
            stroke,
        },
        TableGeometry::Rectangle { width, height } => Primitive::Rect {
            rect: Rect::from_min_size(egui::pos2(position.0, position.1), egui::vec2(width, height)),
            corner_radius: TABLE_CORNER_RADIUS,
            fill,
            stroke,
        },
    };

    // Demo floor plans leave the label empty and show the seat count instead.
    let text = match (table.label.is_empty(), table.seat_count) {
        (true, Some(count)) => count.to_string(),
        _ => table.label.clone(),
    };
    let center = table.center_at(position);

    SceneShape {
        id: table.id.clone(),
        kind: table.kind(),
        style,
        opacity,
        primitives: vec![
            body,
            Primitive::Label {
                center: egui::pos2(center.0, center.1),
                text,
                font_size: TABLE_FONT_SIZE,
                color: label_color,
            },
        ],
    }
}

fn seat_shape(seat: &Seat, highlighted: bool) -> SceneShape {
    let center = egui::pos2(seat.position.0, seat.position.1);
    let mut primitives = Vec::with_capacity(3);

    if highlighted {
        primitives.push(Primitive::Circle {
            center,
            radius: SEAT_RADIUS,
            fill: HIGHLIGHT_FILL,
            stroke: Stroke::new(HIGHLIGHT_STROKE_WIDTH, HIGHLIGHT_STROKE),
        });
        primitives.push(Primitive::DashedRing {
            center,
            radius: HIGHLIGHT_RING_RADIUS,
            stroke: Stroke::new(2.0, HIGHLIGHT_FILL.gamma_multiply(HIGHLIGHT_RING_OPACITY)),
            dash: HIGHLIGHT_RING_DASH,
        });
    } else {
        primitives.push(Primitive::Circle {
            center,
            radius: SEAT_RADIUS,
            fill: SEAT_FILL,
            stroke: Stroke::new(2.0, SEAT_STROKE),
        });
    }

    primitives.push(Primitive::Label {
        center,
        text: seat.label.clone(),
        font_size: SEAT_FONT_SIZE,
        color: if highlighted { Color32::WHITE } else { LABEL_COLOR },
    });

    SceneShape {
        id: seat.id.clone(),
        kind: ShapeKind::Seat,
        style: if highlighted {
            ShapeStyle::Highlighted
        } else {
            ShapeStyle::Default
        },
        opacity: 1.0,
        primitives,
    }
}
