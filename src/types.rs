//! Core data types for seating layouts.
//!
//! A [`Layout`] is the validated, render-ready form of a seating plan. It is
//! built from the loosely typed JSON shape ([`RawLayout`]) that the rest of the
//! product exchanges, skipping any entry whose geometry is unusable.

use crate::constants::SEAT_RADIUS;
use crate::error::{LayoutIssue, SeatingError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier shared by tables and seats. Unique within one layout.
pub type ShapeId = String;

/// The three kinds of shape the seat map draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// A circular table, anchored at its centre
    RoundTable,
    /// A rectangular table, anchored at its top-left corner
    RectangularTable,
    /// A single seat, anchored at its centre
    Seat,
}

/// Size of a table. Fixed once the table is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TableGeometry {
    /// Circle of the given radius
    Round {
        /// Distance from the centre to the edge
        radius: f32,
    },
    /// Axis-aligned rectangle
    Rectangle {
        /// Extent along x
        width: f32,
        /// Extent along y
        height: f32,
    },
}

/// A table in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Unique identifier
    pub id: ShapeId,
    /// Display text
    pub label: String,
    /// Anchor position as (x, y)
    pub position: (f32, f32),
    /// Table size and shape
    pub geometry: TableGeometry,
    /// Number of seats at the table, informational only
    pub seat_count: Option<u32>,
    /// Optional `#rrggbb` fill overriding the default table colour
    pub color: Option<String>,
}

impl Table {
    /// Creates a round table centred on `position`.
    pub fn round(id: &str, label: &str, position: (f32, f32), radius: f32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            position,
            geometry: TableGeometry::Round { radius },
            seat_count: None,
            color: None,
        }
    }

    /// Creates a rectangular table whose top-left corner is at `position`.
    pub fn rectangle(id: &str, label: &str, position: (f32, f32), width: f32, height: f32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            position,
            geometry: TableGeometry::Rectangle { width, height },
            seat_count: None,
            color: None,
        }
    }

    /// Sets the informational seat count.
    pub fn with_seat_count(mut self, seats: u32) -> Self {
        self.seat_count = Some(seats);
        self
    }

    /// Sets a custom fill colour.
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Which kind of shape this table is.
    pub fn kind(&self) -> ShapeKind {
        match self.geometry {
            TableGeometry::Round { .. } => ShapeKind::RoundTable,
            TableGeometry::Rectangle { .. } => ShapeKind::RectangularTable,
        }
    }

    /// Centre of the table for a given anchor position.
    pub fn center_at(&self, position: (f32, f32)) -> (f32, f32) {
        match self.geometry {
            TableGeometry::Round { .. } => position,
            TableGeometry::Rectangle { width, height } => {
                (position.0 + width / 2.0, position.1 + height / 2.0)
            }
        }
    }

    /// Whether `point` lies on the table when it is anchored at `position`.
    pub fn contains_at(&self, position: (f32, f32), point: (f32, f32)) -> bool {
        match self.geometry {
            TableGeometry::Round { radius } => {
                let dx = point.0 - position.0;
                let dy = point.1 - position.1;
                dx * dx + dy * dy <= radius * radius
            }
            TableGeometry::Rectangle { width, height } => {
                point.0 >= position.0
                    && point.0 <= position.0 + width
                    && point.1 >= position.1
                    && point.1 <= position.1 + height
            }
        }
    }

    /// Bounding box `(min, max)` when anchored at `position`.
    pub fn bounds_at(&self, position: (f32, f32)) -> ((f32, f32), (f32, f32)) {
        match self.geometry {
            TableGeometry::Round { radius } => (
                (position.0 - radius, position.1 - radius),
                (position.0 + radius, position.1 + radius),
            ),
            TableGeometry::Rectangle { width, height } => {
                (position, (position.0 + width, position.1 + height))
            }
        }
    }
}

/// A seat in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    /// Unique identifier
    pub id: ShapeId,
    /// Display text, e.g. `A1`
    pub label: String,
    /// Centre position as (x, y)
    pub position: (f32, f32),
    /// Table this seat belongs to; may reference a table that does not exist
    pub table_id: Option<ShapeId>,
}

impl Seat {
    /// Creates a seat, optionally attached to a table.
    pub fn new(id: &str, label: &str, position: (f32, f32), table_id: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            position,
            table_id: table_id.map(str::to_string),
        }
    }

    /// Bounding box `(min, max)` of the seat circle.
    pub fn bounds(&self) -> ((f32, f32), (f32, f32)) {
        (
            (self.position.0 - SEAT_RADIUS, self.position.1 - SEAT_RADIUS),
            (self.position.0 + SEAT_RADIUS, self.position.1 + SEAT_RADIUS),
        )
    }
}

/// A complete seating plan: tables and seats in one shared coordinate space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// Tables in draw order
    pub tables: Vec<Table>,
    /// Seats in draw order, drawn above the tables
    pub seats: Vec<Seat>,
}

impl Layout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the layout has no tables and no seats.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.seats.is_empty()
    }

    /// Looks up a table by id.
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Looks up a seat by id.
    pub fn seat(&self, id: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    /// The table a seat is attached to, if that table exists.
    pub fn table_for_seat(&self, seat: &Seat) -> Option<&Table> {
        seat.table_id.as_deref().and_then(|id| self.table(id))
    }

    /// Moves a table to a new anchor position.
    ///
    /// Returns the previous position, or `None` if no table has this id. No
    /// other shape is touched, including the table's seats.
    pub fn move_table(&mut self, id: &str, position: (f32, f32)) -> Option<(f32, f32)> {
        let table = self.tables.iter_mut().find(|t| t.id == id)?;
        let old = table.position;
        table.position = position;
        Some(old)
    }

    /// Canvas-space bounding box `(min, max)` of all shapes, or `None` when empty.
    pub fn bounds(&self) -> Option<((f32, f32), (f32, f32))> {
        let boxes = self
            .tables
            .iter()
            .map(|t| t.bounds_at(t.position))
            .chain(self.seats.iter().map(Seat::bounds));

        boxes.fold(None, |acc, (min, max)| match acc {
            None => Some((min, max)),
            Some((amin, amax)) => Some((
                (amin.0.min(min.0), amin.1.min(min.1)),
                (amax.0.max(max.0), amax.1.max(max.1)),
            )),
        })
    }

    /// Builds a layout from raw input, skipping malformed entries.
    ///
    /// Every skipped entry produces one [`LayoutIssue`], which is also logged
    /// as a warning. Skipping never fails the whole layout.
    pub fn from_raw(raw: RawLayout) -> (Self, Vec<LayoutIssue>) {
        Self::assemble(
            raw.tables.into_iter().map(Ok),
            raw.seats.into_iter().map(Ok),
        )
    }

    fn assemble(
        tables: impl IntoIterator<Item = Result<RawTable, LayoutIssue>>,
        seats: impl IntoIterator<Item = Result<RawSeat, LayoutIssue>>,
    ) -> (Self, Vec<LayoutIssue>) {
        let mut layout = Layout::new();
        let mut issues = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (index, raw_table) in tables.into_iter().enumerate() {
            let table = raw_table.and_then(|t| t.validate(index));
            match table.and_then(|t| claim_id(&mut seen, t)) {
                Ok(table) => layout.tables.push(table),
                Err(issue) => {
                    log::warn!("skipping table: {issue}");
                    issues.push(issue);
                }
            }
        }

        for (index, raw_seat) in seats.into_iter().enumerate() {
            let seat = raw_seat.and_then(|s| s.validate(index));
            match seat.and_then(|s| claim_id(&mut seen, s)) {
                Ok(seat) => layout.seats.push(seat),
                Err(issue) => {
                    log::warn!("skipping seat: {issue}");
                    issues.push(issue);
                }
            }
        }

        (layout, issues)
    }

    /// Converts back into the raw exchange format.
    pub fn to_raw(&self) -> RawLayout {
        RawLayout {
            tables: self.tables.iter().map(RawTable::from).collect(),
            seats: self.seats.iter().map(RawSeat::from).collect(),
        }
    }

    /// Parses a layout from JSON, skipping malformed entries.
    ///
    /// Only a document that is not JSON, or whose `tables`/`seats` are not
    /// arrays, is an error. An entry with a wrong-typed field is skipped like
    /// any other malformed entry.
    pub fn from_json(json: &str) -> Result<(Self, Vec<LayoutIssue>), SeatingError> {
        let loose: LooseLayout = serde_json::from_str(json)?;
        Ok(Self::assemble(
            decode_entries("table", loose.tables),
            decode_entries("seat", loose.seats),
        ))
    }

    /// Serializes the layout to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SeatingError> {
        Ok(serde_json::to_string_pretty(&self.to_raw())?)
    }
}

/// Anything with an id that has to be unique across a layout.
trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Table {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Seat {
    fn id(&self) -> &str {
        &self.id
    }
}

fn claim_id<T: Identified>(seen: &mut HashSet<String>, shape: T) -> Result<T, LayoutIssue> {
    if seen.insert(shape.id().to_string()) {
        Ok(shape)
    } else {
        Err(LayoutIssue::DuplicateId(shape.id().to_string()))
    }
}

/// Entries are kept as untyped JSON until each one is decoded on its own.
#[derive(Deserialize)]
struct LooseLayout {
    #[serde(default)]
    tables: Vec<serde_json::Value>,
    #[serde(default)]
    seats: Vec<serde_json::Value>,
}

fn decode_entries<T: DeserializeOwned>(
    kind: &'static str,
    entries: Vec<serde_json::Value>,
) -> impl Iterator<Item = Result<T, LayoutIssue>> {
    entries.into_iter().enumerate().map(move |(index, value)| {
        serde_json::from_value(value).map_err(|e| LayoutIssue::Malformed {
            kind,
            index,
            reason: e.to_string(),
        })
    })
}

/// The layout exchange format: `{ "tables": [...], "seats": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLayout {
    /// Raw table entries
    #[serde(default)]
    pub tables: Vec<RawTable>,
    /// Raw seat entries
    #[serde(default)]
    pub seats: Vec<RawSeat>,
}

/// A table entry as it arrives, with every geometric field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTable {
    /// Identifier; empty when absent
    #[serde(default)]
    pub id: String,
    /// Anchor x
    pub x: Option<f32>,
    /// Anchor y
    pub y: Option<f32>,
    /// Rectangle width, or a round table's diameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Rectangle height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Round table radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    /// `rectangle`, `round` or `circle`
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Display text
    #[serde(default)]
    pub label: String,
    /// Seat count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    /// `#rrggbb` fill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl RawTable {
    fn validate(self, index: usize) -> Result<Table, LayoutIssue> {
        if self.id.is_empty() {
            return Err(LayoutIssue::EmptyId { kind: "table", index });
        }
        let x = coordinate(&self.id, "x", self.x)?;
        let y = coordinate(&self.id, "y", self.y)?;

        let geometry = match self.kind.as_str() {
            "rectangle" => TableGeometry::Rectangle {
                width: size(&self.id, "width", self.width)?,
                height: size(&self.id, "height", self.height)?,
            },
            "round" | "circle" => {
                // Floor plans authored in the demo editor store a diameter as `width`.
                let radius = match (self.radius, self.width) {
                    (None, Some(width)) => size(&self.id, "width", Some(width))? / 2.0,
                    (radius, _) => size(&self.id, "radius", radius)?,
                };
                TableGeometry::Round { radius }
            }
            other => {
                return Err(LayoutIssue::UnknownTableType {
                    id: self.id.clone(),
                    kind: other.to_string(),
                })
            }
        };

        let color = match self.color {
            Some(hex) if egui::Color32::from_hex(&hex).is_err() => {
                log::warn!("{:?} has unparsable color {hex:?}, using the default fill", self.id);
                None
            }
            color => color,
        };

        Ok(Table {
            id: self.id,
            label: self.label,
            position: (x, y),
            geometry,
            seat_count: self.seats,
            color,
        })
    }
}

impl From<&Table> for RawTable {
    fn from(table: &Table) -> Self {
        let (kind, width, height, radius) = match table.geometry {
            TableGeometry::Round { radius } => ("round", None, None, Some(radius)),
            TableGeometry::Rectangle { width, height } => {
                ("rectangle", Some(width), Some(height), None)
            }
        };
        Self {
            id: table.id.clone(),
            x: Some(table.position.0),
            y: Some(table.position.1),
            width,
            height,
            radius,
            kind: kind.to_string(),
            label: table.label.clone(),
            seats: table.seat_count,
            color: table.color.clone(),
        }
    }
}

/// A seat entry as it arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSeat {
    /// Identifier; empty when absent
    #[serde(default)]
    pub id: String,
    /// Centre x
    pub x: Option<f32>,
    /// Centre y
    pub y: Option<f32>,
    /// Owning table, serialized as `tableId`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    /// Display text
    #[serde(default)]
    pub label: String,
}

impl RawSeat {
    fn validate(self, index: usize) -> Result<Seat, LayoutIssue> {
        if self.id.is_empty() {
            return Err(LayoutIssue::EmptyId { kind: "seat", index });
        }
        let x = coordinate(&self.id, "x", self.x)?;
        let y = coordinate(&self.id, "y", self.y)?;
        Ok(Seat {
            id: self.id,
            label: self.label,
            position: (x, y),
            table_id: self.table_id,
        })
    }
}

impl From<&Seat> for RawSeat {
    fn from(seat: &Seat) -> Self {
        Self {
            id: seat.id.clone(),
            x: Some(seat.position.0),
            y: Some(seat.position.1),
            table_id: seat.table_id.clone(),
            label: seat.label.clone(),
        }
    }
}

fn coordinate(id: &str, field: &'static str, value: Option<f32>) -> Result<f32, LayoutIssue> {
    let value = value.ok_or_else(|| LayoutIssue::MissingGeometry {
        id: id.to_string(),
        field,
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutIssue::InvalidGeometry {
            id: id.to_string(),
            field,
            value,
        })
    }
}

fn size(id: &str, field: &'static str, value: Option<f32>) -> Result<f32, LayoutIssue> {
    let value = coordinate(id, field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(LayoutIssue::InvalidGeometry {
            id: id.to_string(),
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> (Layout, Vec<LayoutIssue>) {
        Layout::from_json(&value.to_string()).expect("valid JSON")
    }

    #[test]
    fn test_parses_kiosk_layout_shapes() {
        let (layout, issues) = parse(json!({
            "tables": [
                { "id": "table-1", "x": 100, "y": 100, "width": 120, "height": 80, "type": "rectangle", "label": "Table 1" },
                { "id": "table-2", "x": 300, "y": 100, "radius": 60, "type": "circle", "label": "Table 2" }
            ],
            "seats": [
                { "id": "seat-1", "x": 110, "y": 80, "tableId": "table-1", "label": "A1" }
            ]
        }));

        assert!(issues.is_empty());
        assert_eq!(layout.tables.len(), 2);
        assert_eq!(layout.tables[0].kind(), ShapeKind::RectangularTable);
        assert_eq!(layout.tables[1].geometry, TableGeometry::Round { radius: 60.0 });
        assert_eq!(layout.seats[0].table_id.as_deref(), Some("table-1"));
        assert_eq!(layout.seats[0].position, (110.0, 80.0));
    }

    #[test]
    fn test_round_table_falls_back_to_half_width() {
        let (layout, issues) = parse(json!({
            "tables": [{ "id": "t", "x": 50, "y": 50, "width": 80, "height": 80, "type": "round", "label": "", "seats": 6 }]
        }));
        assert!(issues.is_empty());
        assert_eq!(layout.tables[0].geometry, TableGeometry::Round { radius: 40.0 });
        assert_eq!(layout.tables[0].seat_count, Some(6));
    }

    #[test]
    fn test_malformed_entries_are_skipped_not_fatal() {
        let (layout, issues) = parse(json!({
            "tables": [
                { "id": "no-size", "x": 0, "y": 0, "type": "rectangle", "label": "" },
                { "id": "no-radius", "x": 0, "y": 0, "type": "round", "label": "" },
                { "id": "hexagon", "x": 0, "y": 0, "radius": 4, "type": "hexagon", "label": "" },
                { "id": "ok", "x": 0, "y": 0, "radius": 4, "type": "round", "label": "" }
            ],
            "seats": [
                { "id": "no-y", "x": 3, "label": "" },
                { "id": "", "x": 1, "y": 1, "label": "" },
                { "id": "ok", "x": 1, "y": 1, "label": "" }
            ]
        }));

        assert_eq!(layout.tables.len(), 1);
        assert!(layout.seats.is_empty());
        assert_eq!(issues.len(), 6);
        assert!(issues.contains(&LayoutIssue::MissingGeometry {
            id: "no-size".into(),
            field: "width"
        }));
        assert!(issues.contains(&LayoutIssue::UnknownTableType {
            id: "hexagon".into(),
            kind: "hexagon".into()
        }));
        assert!(issues.contains(&LayoutIssue::DuplicateId("ok".into())));
        assert!(issues.contains(&LayoutIssue::EmptyId { kind: "seat", index: 1 }));
    }

    #[test]
    fn test_wrong_typed_entry_is_skipped_and_neighbours_survive() {
        let (layout, issues) = parse(json!({
            "tables": [
                { "id": "good", "x": 10, "y": 10, "radius": 20, "type": "round", "label": "G" },
                { "id": "bad", "x": "100", "y": 10, "radius": 20, "type": "round", "label": "B" }
            ],
            "seats": [
                { "id": "null-label", "x": 1, "y": 1, "label": null },
                { "id": "s", "x": 12, "y": 12, "label": "A1", "tableId": "good" }
            ]
        }));

        assert_eq!(layout.tables.len(), 1);
        assert_eq!(layout.tables[0].id, "good");
        assert_eq!(layout.seats.len(), 1);
        assert_eq!(layout.seats[0].id, "s");
        assert_eq!(issues.len(), 2);
        assert!(matches!(
            issues[0],
            LayoutIssue::Malformed { kind: "table", index: 1, .. }
        ));
        assert!(matches!(
            issues[1],
            LayoutIssue::Malformed { kind: "seat", index: 0, .. }
        ));
    }

    #[test]
    fn test_fractional_seat_count_is_malformed() {
        let (layout, issues) = parse(json!({
            "tables": [{ "id": "t", "x": 0, "y": 0, "radius": 10, "type": "round", "label": "", "seats": 6.5 }]
        }));
        assert!(layout.is_empty());
        assert!(matches!(issues[0], LayoutIssue::Malformed { kind: "table", index: 0, .. }));
    }

    #[test]
    fn test_non_array_tables_fail_the_document() {
        assert!(Layout::from_json(r#"{"tables": 3}"#).is_err());
        assert!(Layout::from_json("null").is_err());
    }

    #[test]
    fn test_zero_size_is_invalid() {
        let (layout, issues) = parse(json!({
            "tables": [{ "id": "flat", "x": 0, "y": 0, "width": 0, "height": 10, "type": "rectangle", "label": "" }]
        }));
        assert!(layout.is_empty());
        assert!(matches!(issues[0], LayoutIssue::InvalidGeometry { field: "width", .. }));
    }

    #[test]
    fn test_bad_color_falls_back_without_skipping() {
        let (layout, issues) = parse(json!({
            "tables": [{ "id": "t", "x": 0, "y": 0, "radius": 10, "type": "round", "label": "", "color": "blue-ish" }]
        }));
        assert!(issues.is_empty());
        assert_eq!(layout.tables[0].color, None);
    }

    #[test]
    fn test_empty_layout_is_valid() {
        let (layout, issues) = parse(json!({}));
        assert!(layout.is_empty());
        assert!(issues.is_empty());
        assert!(layout.bounds().is_none());
    }

    #[test]
    fn test_move_table_only_touches_that_table() {
        let mut layout = Layout {
            tables: vec![
                Table::round("a", "A", (50.0, 50.0), 40.0),
                Table::rectangle("b", "B", (200.0, 100.0), 120.0, 60.0),
            ],
            seats: vec![Seat::new("s", "A1", (110.0, 50.0), Some("a"))],
        };

        let old = layout.move_table("a", (10.0, 20.0));
        assert_eq!(old, Some((50.0, 50.0)));
        assert_eq!(layout.tables[0].position, (10.0, 20.0));
        assert_eq!(layout.tables[1].position, (200.0, 100.0));
        assert_eq!(layout.seats[0].position, (110.0, 50.0));
        assert_eq!(layout.move_table("missing", (0.0, 0.0)), None);
    }

    #[test]
    fn test_json_round_trip_preserves_layout() {
        let layout = Layout {
            tables: vec![Table::round("a", "A", (50.0, 50.0), 40.0)
                .with_seat_count(4)
                .with_color("#3B82F6")],
            seats: vec![Seat::new("s", "A1", (110.0, 50.0), None)],
        };
        let json = layout.to_json().unwrap();
        let (back, issues) = Layout::from_json(&json).unwrap();
        assert!(issues.is_empty());
        assert_eq!(back, layout);
    }

    #[test]
    fn test_seat_with_unknown_table_is_unattached() {
        let layout = Layout {
            tables: vec![],
            seats: vec![Seat::new("s", "Z9", (0.0, 0.0), Some("ghost"))],
        };
        assert!(layout.table_for_seat(&layout.seats[0]).is_none());
    }

    #[test]
    fn test_hit_testing_respects_anchor() {
        let round = Table::round("r", "", (50.0, 50.0), 40.0);
        assert!(round.contains_at(round.position, (80.0, 50.0)));
        assert!(!round.contains_at(round.position, (95.0, 50.0)));

        let rect = Table::rectangle("q", "", (100.0, 100.0), 120.0, 80.0);
        assert!(rect.contains_at(rect.position, (100.0, 100.0)));
        assert!(rect.contains_at(rect.position, (220.0, 180.0)));
        assert!(!rect.contains_at(rect.position, (99.0, 150.0)));
        assert_eq!(rect.center_at(rect.position), (160.0, 140.0));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Layout::from_json("{ not json"),
            Err(SeatingError::Json(_))
        ));
    }
}
