//! # Seat Map
//!
//! An interactive seating canvas for event venues. A [`SeatMap`] draws tables
//! and seats on a pannable, zoomable canvas. It can highlight one guest's
//! seat, and in editing contexts it lets the user drag tables around.
//!
//! The crate also ships a small desktop app built on the widget:
//! - **Kiosk**: read-only view that checks a guest in and shows where they sit
//! - **Editor**: vendor view for rearranging tables, with undo/redo
//!
//! ## Features
//! - Zoom toward the cursor within fixed scale limits
//! - Drag-to-pan and drag-to-move with a single active pointer
//! - Layout JSON import that skips malformed entries instead of failing
//! - SVG and PNG export of the current layout

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod error;
mod kiosk;
mod samples;
mod types;
mod ui;
pub mod widget;

// Re-export public types and functions
pub use error::{LayoutIssue, SeatingError};
pub use kiosk::{verify_code, CheckIn, Guest, Invitation, VerifyFailure};
pub use samples::{all_samples, build_sample, sample_invitations, SampleInfo, SampleKind};
pub use types::*;
pub use ui::{build_svg, render_png, AppSettings, SeatingApp, View};
pub use widget::{SeatMap, SeatMapEvent, SeatMapOptions, SeatMapResponse};

/// Runs the seating application.
///
/// Settings from the previous session are restored when eframe storage holds them.
///
/// # Example
///
/// ```no_run
/// fn main() -> Result<(), eframe::Error> {
///     seatmap::run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_title("Seat Map"),
        ..Default::default()
    };
    eframe::run_native(
        "Seat Map",
        options,
        Box::new(|cc| Ok(Box::new(SeatingApp::new(cc)))),
    )
}
