//! Hit-testing shapes in canvas space.

use crate::constants::SEAT_RADIUS;
use crate::types::{Layout, Seat, Table};

/// Topmost table under `point`.
///
/// Tables are drawn in layout order, so the last match wins. `position_of`
/// supplies each table's current anchor, which lets an in-flight drag be
/// hit-tested at its working position rather than its committed one.
pub fn table_at<'a>(
    layout: &'a Layout,
    point: (f32, f32),
    position_of: impl Fn(&Table) -> (f32, f32),
) -> Option<&'a Table> {
    layout
        .tables
        .iter()
        .rev()
        .find(|table| table.contains_at(position_of(table), point))
}

/// Topmost seat under `point`.
pub fn seat_at(layout: &Layout, point: (f32, f32)) -> Option<&Seat> {
    layout.seats.iter().rev().find(|seat| {
        let dx = point.0 - seat.position.0;
        let dy = point.1 - seat.position.1;
        dx * dx + dy * dy <= SEAT_RADIUS * SEAT_RADIUS
    })
}
