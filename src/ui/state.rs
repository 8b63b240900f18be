//! Application state management structures.
//!
//! This module contains the persisted user settings, file operation plumbing,
//! and the main `SeatingApp` that owns the layout shown by the seat map.

use super::undo::UndoHistory;
use crate::kiosk::{self, CheckIn, Invitation};
use crate::samples::{self, SampleKind};
use crate::types::{Layout, ShapeId};
use crate::widget::{SeatMap, SeatMapOptions};
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Which consumer of the seat map is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    /// Read-only guest view with the guest's seat highlighted
    Kiosk,
    /// Vendor view where tables can be dragged
    Editor,
}

/// User settings persisted between sessions.
///
/// The viewport is not stored; every mount starts at scale 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Last active view
    pub view: View,
    /// Sample loaded on startup
    pub sample: SampleKind,
    /// Remembered width of the side panel
    pub side_panel_width: f32,
    /// Whether the canvas grid is drawn
    pub show_grid: bool,
    /// Whether dropped tables are kept inside the canvas in the editor
    pub clamp_to_bounds: bool,
    /// Raster scale used for PNG export
    pub png_scale: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            view: View::Kiosk,
            sample: SampleKind::KioskHall,
            side_panel_width: 280.0,
            show_grid: true,
            clamp_to_bounds: false,
            png_scale: 2.0,
        }
    }
}

/// Represents a pending save operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingSaveOperation {
    /// Save with a new file path (show file picker)
    SaveAs,
    /// Save to the existing file path
    Save,
}

/// Messages sent from async file operations back to the main app.
#[derive(Debug)]
pub enum FileOperationResult {
    /// Layout saved to the given path
    SaveCompleted(String),
    /// Layout file read: path and content
    LoadCompleted(String, String),
    /// Export written to the given path
    ExportCompleted(String),
    /// Operation failed with an error message
    OperationFailed(String),
}

/// State related to file operations.
pub struct FileState {
    /// Current layout file path for "Save"
    pub current_path: Option<String>,
    /// Whether the layout changed since it was loaded or saved
    pub has_unsaved_changes: bool,
    /// Save requested this frame
    pub pending_save_operation: Option<PendingSaveOperation>,
    /// Open requested this frame
    pub pending_load_operation: bool,
    /// Handed to async tasks to report their results
    pub sender: Sender<FileOperationResult>,
    /// Drained once per frame by the UI
    pub receiver: Receiver<FileOperationResult>,
}

impl Default for FileState {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            current_path: None,
            has_unsaved_changes: false,
            pending_save_operation: None,
            pending_load_operation: false,
            sender,
            receiver,
        }
    }
}

/// The main application: owns the source-of-truth layout and the seat map.
pub struct SeatingApp {
    /// Persisted settings
    pub settings: AppSettings,
    /// The layout being viewed or edited
    pub layout: Layout,
    /// The seat map widget; replaced on remount
    pub seat_map: SeatMap,
    /// Seat highlighted in the kiosk view
    pub guest_seat: Option<ShapeId>,
    /// Kiosk check-in step
    pub check_in: CheckIn,
    /// Invitations the kiosk accepts for the current event
    pub invitations: Vec<Invitation>,
    /// Seat under the pointer on the last frame
    pub hovered_seat: Option<ShapeId>,
    /// Undo/redo history of table moves
    pub undo_history: UndoHistory,
    /// Recent moves, newest first
    pub activity: VecDeque<String>,
    /// One-line status shown at the bottom of the window
    pub status: Option<String>,
    /// File operations state
    pub file: FileState,
}

impl Default for SeatingApp {
    fn default() -> Self {
        Self::with_settings(AppSettings::default())
    }
}

impl SeatingApp {
    /// Creates the app, restoring settings from eframe storage when present.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<AppSettings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(settings)
    }

    /// Creates the app with the given settings and loads their sample.
    pub fn with_settings(settings: AppSettings) -> Self {
        let mut app = Self {
            settings,
            layout: Layout::new(),
            seat_map: SeatMap::new(),
            guest_seat: None,
            check_in: CheckIn::Open,
            invitations: Vec::new(),
            hovered_seat: None,
            undo_history: UndoHistory::new(),
            activity: VecDeque::new(),
            status: None,
            file: FileState::default(),
        };
        app.load_sample(app.settings.sample);
        app
    }

    /// Replaces the layout with a built-in sample.
    pub fn load_sample(&mut self, kind: SampleKind) {
        let info = samples::sample_info(kind);
        self.settings.sample = kind;
        self.guest_seat = None;
        self.check_in = CheckIn::start(info.require_qr);
        self.invitations = samples::sample_invitations(kind);
        self.file.current_path = None;
        self.replace_layout(samples::build_sample(kind));
        log::info!("loaded sample {:?}", kind);
    }

    /// Installs a new layout and remounts the seat map.
    pub fn replace_layout(&mut self, layout: Layout) {
        self.layout = layout;
        if let Some(seat) = &self.guest_seat {
            if self.layout.seat(seat).is_none() {
                self.guest_seat = None;
            }
        }
        self.seat_map = SeatMap::new();
        self.hovered_seat = None;
        self.undo_history.clear();
        self.activity.clear();
        self.file.has_unsaved_changes = false;
    }

    /// Whether the current event makes guests verify an invitation.
    pub fn require_qr(&self) -> bool {
        samples::sample_info(self.settings.sample).require_qr
    }

    /// Verifies the code typed at the scan step.
    ///
    /// A verified guest's seat becomes the highlighted seat and the map
    /// remounts. A rejected code clears any highlight.
    pub fn submit_code(&mut self) {
        let CheckIn::Scan { code } = &self.check_in else {
            return;
        };
        match kiosk::verify_code(code, &self.invitations) {
            Ok(guest) => {
                log::info!("checked in {}", guest.name);
                let guest = guest.clone();
                self.guest_seat = guest
                    .seat_id
                    .clone()
                    .filter(|id| self.layout.seat(id).is_some());
                self.check_in = CheckIn::Welcome(guest);
                self.seat_map = SeatMap::new();
                self.hovered_seat = None;
            }
            Err(failure) => {
                log::warn!("check-in rejected: {failure:?}");
                self.guest_seat = None;
                self.check_in = CheckIn::Rejected(failure);
            }
        }
    }

    /// Returns the kiosk to the scan step for the next guest.
    ///
    /// Does nothing for events that do not require an invitation.
    pub fn back_to_scan(&mut self) {
        if !self.require_qr() {
            return;
        }
        self.guest_seat = None;
        self.check_in = CheckIn::start(true);
        self.seat_map = SeatMap::new();
        self.hovered_seat = None;
    }

    /// Switches between kiosk and editor.
    ///
    /// Each view is its own mount of the seat map, so the view resets. A drag
    /// still in flight is committed first.
    pub fn set_view(&mut self, view: View) {
        if self.settings.view == view {
            return;
        }
        let options = self.map_options(self.seat_map.viewport().size);
        if let Some(event) = self.seat_map.release(&options) {
            self.handle_map_events(vec![event]);
        }
        self.settings.view = view;
        self.seat_map = SeatMap::new();
        self.hovered_seat = None;
    }

    /// Seat map options for the current view and the space available.
    pub fn map_options(&self, available: egui::Vec2) -> SeatMapOptions {
        let base = SeatMapOptions {
            show_grid: self.settings.show_grid,
            dark_mode: self.settings.dark_mode,
            ..Default::default()
        };
        match self.settings.view {
            View::Kiosk => SeatMapOptions {
                highlight_seat_id: self.guest_seat.clone(),
                width: available.x.clamp(1.0, base.width),
                height: available.y.clamp(1.0, base.height),
                ..base
            },
            View::Editor => SeatMapOptions {
                draggable: true,
                clamp_to_bounds: self.settings.clamp_to_bounds,
                width: available.x.max(1.0),
                height: available.y.clamp(1.0, base.height),
                ..base
            },
        }
    }
}
