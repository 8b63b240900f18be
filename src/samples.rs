//! Built-in sample layouts that can be loaded from the toolbar.

use crate::kiosk::{Guest, Invitation};
use crate::types::{Layout, Seat, Table};

/// Kinds of built-in sample available from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SampleKind {
    /// Four tables with six seats, as shown on the event kiosk
    KioskHall,
    /// Three coloured tables from the marketing floor-plan demo
    FloorPlanDemo,
    /// Nothing at all
    Empty,
}

/// Metadata for a single sample.
pub struct SampleInfo {
    /// Stable identifier
    pub kind: SampleKind,
    /// Human-friendly display name
    pub name: &'static str,
    /// Whether kiosk guests must verify an invitation before seeing their seat
    pub require_qr: bool,
}

/// Returns all samples with their display names.
pub const fn all_samples() -> &'static [SampleInfo] {
    const SAMPLES: &[SampleInfo] = &[
        SampleInfo {
            kind: SampleKind::KioskHall,
            name: "Kiosk hall (4 tables)",
            require_qr: true,
        },
        SampleInfo {
            kind: SampleKind::FloorPlanDemo,
            name: "Floor plan demo",
            require_qr: false,
        },
        SampleInfo {
            kind: SampleKind::Empty,
            name: "Empty",
            require_qr: false,
        },
    ];
    SAMPLES
}

/// Looks up the metadata for a sample.
pub fn sample_info(kind: SampleKind) -> &'static SampleInfo {
    all_samples()
        .iter()
        .find(|info| info.kind == kind)
        .unwrap_or(&all_samples()[0])
}

/// Builds a layout for the given sample.
pub fn build_sample(kind: SampleKind) -> Layout {
    match kind {
        SampleKind::KioskHall => build_kiosk_hall(),
        SampleKind::FloorPlanDemo => build_floor_plan_demo(),
        SampleKind::Empty => Layout::new(),
    }
}

/// Invitations the kiosk accepts for a sample.
pub fn sample_invitations(kind: SampleKind) -> Vec<Invitation> {
    match kind {
        SampleKind::KioskHall => vec![
            Invitation {
                code: "JS-2024".into(),
                expired: false,
                guest: Guest {
                    name: "John Smith".into(),
                    org: Some("Tech Corp".into()),
                    seat_id: Some("seat-2".into()),
                    dietary: Some("Vegetarian, No nuts".into()),
                    access: Some("Wheelchair accessible".into()),
                    tags: vec!["VIP".into(), "Speaker".into(), "Early Bird".into()],
                },
            },
            Invitation {
                code: "ML-2023".into(),
                expired: true,
                guest: Guest {
                    name: "Maria Lopez".into(),
                    org: Some("Design Studio".into()),
                    seat_id: Some("seat-5".into()),
                    ..Default::default()
                },
            },
        ],
        SampleKind::FloorPlanDemo | SampleKind::Empty => Vec::new(),
    }
}

fn build_kiosk_hall() -> Layout {
    Layout {
        tables: vec![
            Table::rectangle("table-1", "Table 1", (100.0, 100.0), 120.0, 80.0),
            Table::round("table-2", "Table 2", (300.0, 100.0), 60.0),
            Table::rectangle("table-3", "Table 3", (500.0, 100.0), 120.0, 80.0),
            Table::round("table-4", "Table 4", (200.0, 300.0), 60.0),
        ],
        seats: vec![
            Seat::new("seat-1", "A1", (110.0, 80.0), Some("table-1")),
            Seat::new("seat-2", "A2", (150.0, 80.0), Some("table-1")),
            Seat::new("seat-3", "A3", (190.0, 80.0), Some("table-1")),
            Seat::new("seat-4", "B1", (280.0, 60.0), Some("table-2")),
            Seat::new("seat-5", "B2", (320.0, 60.0), Some("table-2")),
            Seat::new("seat-6", "C1", (510.0, 80.0), Some("table-3")),
        ],
    }
}

fn build_floor_plan_demo() -> Layout {
    Layout {
        tables: vec![
            Table::round("table1", "", (50.0, 50.0), 40.0)
                .with_seat_count(6)
                .with_color("#3B82F6"),
            Table::rectangle("table2", "", (200.0, 100.0), 120.0, 60.0)
                .with_seat_count(8)
                .with_color("#10B981"),
            Table::round("table3", "", (100.0, 200.0), 40.0)
                .with_seat_count(4)
                .with_color("#F59E0B"),
        ],
        seats: Vec::new(),
    }
}
