//! User interface for the seating application.
//!
//! The app owns the layout and hosts a [`SeatMap`](crate::widget::SeatMap) in
//! one of two views: a read-only kiosk that shows a guest where they sit, and
//! an editor where vendors drag tables around.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main SeatingApp
//! - `file_ops` - Opening and saving layout JSON
//! - `export` - SVG and PNG export of the current layout
//! - `undo` - Undo/redo of table moves

mod export;
mod file_ops;
mod state;
mod undo;

#[cfg(test)]
mod tests;

pub use export::{build_svg, render_png};
pub use state::{AppSettings, SeatingApp, View};
pub use undo::{UndoAction, UndoableLayout};

use crate::constants::{HIGHLIGHT_FILL, MAX_ACTIVITY_ENTRIES, SEAT_STROKE, TABLE_STROKE};
use crate::kiosk::{CheckIn, Guest};
use crate::samples;
use crate::widget::SeatMapEvent;
use eframe::egui;

impl eframe::App for SeatingApp {
    /// Persist settings between restarts. The layout itself is saved to files.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.handle_pending_operations(ctx);
        self.handle_undo_redo_keys(ctx);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, ctx);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.draw_status_bar(ui);
        });

        let viewport_width = ctx.input(|i| i.screen_rect().width());
        let max_allowed = (viewport_width * 0.5).max(180.0);
        egui::SidePanel::right("side_panel")
            .resizable(true)
            .default_width(self.settings.side_panel_width.clamp(180.0, max_allowed))
            .show(ctx, |ui| {
                self.settings.side_panel_width = ui.available_width().clamp(180.0, max_allowed);
                match self.settings.view {
                    View::Kiosk => self.draw_kiosk_panel(ui),
                    View::Editor => self.draw_editor_panel(ui),
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}

impl SeatingApp {
    /// Shows the seat map and commits whatever it reports.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let options = self.map_options(ui.available_size());
        let shown = self.seat_map.show(ui, &self.layout, &options);
        self.hovered_seat = shown.hovered_seat;
        self.handle_map_events(shown.events);
        shown.response
    }

    /// Applies seat map events to the owned layout.
    ///
    /// Moves that change a position are recorded for undo and in the activity feed.
    pub fn handle_map_events(&mut self, events: Vec<SeatMapEvent>) {
        for event in events {
            match &event {
                SeatMapEvent::DragStarted { id } => log::debug!("drag started on {id}"),
                SeatMapEvent::TableMoved { id, from, to } => {
                    if !event.apply_to(&mut self.layout) {
                        log::warn!("moved table {id} is no longer in the layout");
                        continue;
                    }
                    if from == to {
                        continue;
                    }
                    log::info!("table {id} moved from {from:?} to {to:?}");
                    self.undo_history.push_action(UndoAction::TableMoved {
                        table_id: id.clone(),
                        old_position: *from,
                        new_position: *to,
                    });
                    let name = self
                        .layout
                        .table(id)
                        .filter(|t| !t.label.is_empty())
                        .map_or(id.as_str(), |t| t.label.as_str());
                    let entry = format!("Moved {name} to ({:.0}, {:.0})", to.0, to.1);
                    self.push_activity(entry);
                    self.file.has_unsaved_changes = true;
                }
            }
        }
    }

    fn push_activity(&mut self, entry: String) {
        self.activity.push_front(entry);
        self.activity.truncate(MAX_ACTIVITY_ENTRIES);
    }

    /// Handles undo/redo keyboard shortcuts in the editor.
    pub fn handle_undo_redo_keys(&mut self, ctx: &egui::Context) {
        if self.settings.view != View::Editor
            || ctx.wants_keyboard_input()
            || self.seat_map.state().is_active()
        {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Z) && i.modifiers.command && !i.modifiers.shift) {
            self.perform_undo();
        } else if ctx.input(|i| {
            (i.key_pressed(egui::Key::Z) && i.modifiers.command && i.modifiers.shift)
                || (i.key_pressed(egui::Key::Y) && i.modifiers.command)
        }) {
            self.perform_redo();
        }
    }

    /// Performs an undo operation.
    pub fn perform_undo(&mut self) {
        if let Some(action) = self.undo_history.pop_undo() {
            if let Some(redo_action) = self.layout.apply_undo(&action) {
                self.undo_history.push_redo(redo_action);
                self.file.has_unsaved_changes = true;
                self.push_activity("Undid move".to_string());
            }
        }
    }

    /// Performs a redo operation.
    pub fn perform_redo(&mut self) {
        if let Some(action) = self.undo_history.pop_redo() {
            if let Some(undo_action) = self.layout.apply_redo(&action) {
                // push_action would clear the redo stack
                self.undo_history.push_undo(undo_action);
                self.file.has_unsaved_changes = true;
                self.push_activity("Redid move".to_string());
            }
        }
    }

    fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal_wrapped(|ui| {
            let mut view = self.settings.view;
            ui.selectable_value(&mut view, View::Kiosk, "Kiosk");
            ui.selectable_value(&mut view, View::Editor, "Editor");
            if view != self.settings.view {
                self.set_view(view);
            }

            ui.separator();

            let current = samples::sample_info(self.settings.sample).name;
            let mut chosen = None;
            egui::ComboBox::from_id_salt("sample_picker")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for info in samples::all_samples() {
                        if ui
                            .selectable_label(info.kind == self.settings.sample, info.name)
                            .clicked()
                        {
                            chosen = Some(info.kind);
                        }
                    }
                });
            if let Some(kind) = chosen {
                self.load_sample(kind);
            }

            ui.separator();

            if ui.button("Open…").clicked() {
                self.open_layout();
            }
            if ui.button("Save").clicked() {
                self.save_layout();
            }
            if ui.button("Save As…").clicked() {
                self.save_layout_as();
            }

            ui.separator();

            if ui.button("Export SVG").clicked() {
                self.export_svg(ctx);
            }
            if ui.button("Export PNG").clicked() {
                self.export_png(ctx);
            }

            ui.separator();

            if ui.button("Reset view").clicked() {
                self.seat_map.reset_view();
            }
            ui.checkbox(&mut self.settings.show_grid, "Grid");
            ui.checkbox(&mut self.settings.dark_mode, "Dark");
        });
    }

    fn draw_kiosk_panel(&mut self, ui: &mut egui::Ui) {
        match &self.check_in {
            CheckIn::Open => self.draw_seat_picker(ui),
            CheckIn::Scan { .. } => self.draw_scan_step(ui),
            CheckIn::Rejected(failure) => {
                let failure = *failure;
                ui.heading(egui::RichText::new("Verification failed").color(ui.visuals().error_fg_color));
                ui.label(failure.to_string());
                ui.add_space(8.0);
                if ui.button("Back to scan").clicked() {
                    self.back_to_scan();
                }
            }
            CheckIn::Welcome(guest) => {
                let guest = guest.clone();
                self.draw_guest_card(ui, &guest);
            }
        }

        ui.separator();
        match self.hovered_seat.as_deref().and_then(|id| self.layout.seat(id)) {
            Some(seat) => ui.label(format!("Pointing at seat {}", seat.label)),
            None => ui.weak("Hover a seat to see its label"),
        };

        ui.separator();
        ui.label("Legend");
        ui.colored_label(HIGHLIGHT_FILL, "● Your seat");
        ui.colored_label(SEAT_STROKE, "○ Other seats");
        ui.colored_label(TABLE_STROKE, "▢ Tables");
        ui.weak("Drag to pan, scroll to zoom.");
    }

    fn draw_scan_step(&mut self, ui: &mut egui::Ui) {
        ui.heading("Check in");
        ui.label("Scan your invitation or type the code printed on it.");

        let mut submit = false;
        if let CheckIn::Scan { code } = &mut self.check_in {
            let edit = ui.add(egui::TextEdit::singleline(code).hint_text("Invitation code"));
            submit = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let ready = !code.trim().is_empty();
            submit |= ui.add_enabled(ready, egui::Button::new("Verify")).clicked();
        }
        if submit {
            self.submit_code();
        }
    }

    fn draw_guest_card(&mut self, ui: &mut egui::Ui, guest: &Guest) {
        ui.heading("Welcome!");
        ui.label(egui::RichText::new(&guest.name).size(24.0).strong());
        if let Some(org) = &guest.org {
            ui.weak(org);
        }

        ui.add_space(8.0);
        match guest.seat_summary(&self.layout) {
            Some(summary) => ui.label(egui::RichText::new(summary).size(20.0).color(HIGHLIGHT_FILL)),
            None => ui.label("No seat assigned"),
        };

        if let Some(dietary) = &guest.dietary {
            ui.add_space(4.0);
            ui.strong("Dietary requirements");
            ui.label(dietary);
        }
        if let Some(access) = &guest.access {
            ui.add_space(4.0);
            ui.strong("Accessibility");
            ui.label(access);
        }
        if !guest.tags.is_empty() {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for tag in &guest.tags {
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::symmetric(6, 2))
                        .show(ui, |ui| ui.small(tag));
                }
            });
        }

        if self.require_qr() {
            ui.add_space(8.0);
            if ui.button("Back to scan").clicked() {
                self.back_to_scan();
            }
        }
    }

    /// Seat chooser for events that do not check invitations.
    fn draw_seat_picker(&mut self, ui: &mut egui::Ui) {
        ui.heading("Your seat");

        match self.guest_seat.as_deref().and_then(|id| self.layout.seat(id)) {
            Some(seat) => {
                ui.label(egui::RichText::new(&seat.label).size(28.0).strong());
                let table = self
                    .layout
                    .table_for_seat(seat)
                    .map_or("Unattached".to_string(), |t| {
                        if t.label.is_empty() {
                            t.id.clone()
                        } else {
                            t.label.clone()
                        }
                    });
                ui.label(format!("Table: {table}"));
            }
            None => {
                ui.label("No seat selected");
            }
        }

        ui.add_space(8.0);
        let selected = self
            .guest_seat
            .as_deref()
            .and_then(|id| self.layout.seat(id))
            .map_or("Choose a seat", |s| s.label.as_str())
            .to_string();
        let mut chosen = None;
        egui::ComboBox::from_id_salt("guest_seat_picker")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for seat in &self.layout.seats {
                    let is_selected = self.guest_seat.as_deref() == Some(seat.id.as_str());
                    if ui.selectable_label(is_selected, &seat.label).clicked() {
                        chosen = Some(seat.id.clone());
                    }
                }
            });
        if chosen.is_some() {
            self.guest_seat = chosen;
        }
    }

    fn draw_editor_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tables");

        let dragging = self.seat_map.state().dragging().map(str::to_string);
        egui::Grid::new("table_positions")
            .striped(true)
            .num_columns(2)
            .show(ui, |ui| {
                for table in &self.layout.tables {
                    let name = if table.label.is_empty() {
                        &table.id
                    } else {
                        &table.label
                    };
                    let position = self
                        .seat_map
                        .state()
                        .working_position(&table.id)
                        .unwrap_or(table.position);
                    let text = format!("({:.0}, {:.0})", position.0, position.1);
                    if dragging.as_deref() == Some(table.id.as_str()) {
                        ui.strong(name);
                        ui.strong(text);
                    } else {
                        ui.label(name);
                        ui.label(text);
                    }
                    ui.end_row();
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.undo_history.can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                self.perform_undo();
            }
            if ui
                .add_enabled(self.undo_history.can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                self.perform_redo();
            }
        });
        ui.checkbox(&mut self.settings.clamp_to_bounds, "Keep tables on canvas");

        ui.separator();
        ui.label("Recent activity");
        if self.activity.is_empty() {
            ui.weak("Drag a table to move it.");
        }
        for entry in &self.activity {
            ui.label(entry);
        }
    }

    fn draw_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let path = self.file.current_path.as_deref().unwrap_or("untitled");
            let marker = if self.file.has_unsaved_changes { " *" } else { "" };
            ui.label(format!("{path}{marker}"));
            ui.separator();
            ui.label(format!("Zoom {:.0}%", self.seat_map.viewport().scale * 100.0));
            if let Some(status) = &self.status {
                ui.separator();
                ui.label(status);
            }
        });
    }
}
