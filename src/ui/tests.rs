use super::state::FileOperationResult;
use super::*;
use crate::kiosk::CheckIn;
use crate::samples::SampleKind;
use eframe::egui;

fn raw_input(events: Vec<egui::Event>, modifiers: egui::Modifiers) -> egui::RawInput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.modifiers = modifiers;
    raw.events = events;
    raw
}

fn press(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

/// Runs one frame of the canvas on a shared context and returns the canvas origin.
fn run_canvas(ctx: &egui::Context, app: &mut SeatingApp, events: Vec<egui::Event>) -> egui::Pos2 {
    let mut origin = egui::Pos2::ZERO;
    let _ = ctx.run(raw_input(events, egui::Modifiers::NONE), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            origin = app.draw_canvas(ui).rect.min;
        });
    });
    origin
}

/// Drags from one canvas point to another over three frames.
fn drag(app: &mut SeatingApp, from: (f32, f32), to: (f32, f32)) {
    let ctx = egui::Context::default();
    let origin = run_canvas(&ctx, app, vec![]);
    let at = |p: (f32, f32)| origin + egui::vec2(p.0, p.1);

    run_canvas(
        &ctx,
        app,
        vec![egui::Event::PointerMoved(at(from)), press(at(from), true)],
    );
    run_canvas(&ctx, app, vec![egui::Event::PointerMoved(at(to))]);
    run_canvas(&ctx, app, vec![press(at(to), false)]);
}

fn editor_app() -> SeatingApp {
    let mut app = SeatingApp::default();
    app.set_view(View::Editor);
    app
}

/// Types a code at the scan step and submits it.
fn check_in(app: &mut SeatingApp, code: &str) {
    app.check_in = CheckIn::Scan { code: code.into() };
    app.submit_code();
}

#[test]
fn default_app_opens_kiosk_at_scan_step() {
    let app = SeatingApp::default();
    assert_eq!(app.settings.view, View::Kiosk);
    assert!(app.require_qr());
    assert!(matches!(app.check_in, CheckIn::Scan { .. }));
    assert!(app.guest_seat.is_none());
    assert_eq!(app.layout.tables.len(), 4);
}

#[test]
fn verified_guest_gets_card_and_highlighted_seat() {
    let mut app = SeatingApp::default();
    check_in(&mut app, "js-2024");

    let guest = app.check_in.guest().expect("checked in");
    assert_eq!(guest.name, "John Smith");
    assert_eq!(guest.org.as_deref(), Some("Tech Corp"));
    assert_eq!(guest.dietary.as_deref(), Some("Vegetarian, No nuts"));
    assert_eq!(guest.seat_summary(&app.layout).as_deref(), Some("A2 at Table 1"));
    assert_eq!(app.guest_seat.as_deref(), Some("seat-2"));

    let options = app.map_options(egui::vec2(1000.0, 900.0));
    assert_eq!(options.highlight_seat_id.as_deref(), Some("seat-2"));
    assert!(!options.draggable);
    assert_eq!((options.width, options.height), (800.0, 600.0));
}

#[test]
fn rejected_codes_report_invalid_or_expired() {
    let mut app = SeatingApp::default();

    check_in(&mut app, "ML-2023");
    assert_eq!(app.check_in, CheckIn::Rejected(crate::kiosk::VerifyFailure::Expired));
    assert!(app.guest_seat.is_none());

    check_in(&mut app, "not-a-code");
    assert_eq!(app.check_in, CheckIn::Rejected(crate::kiosk::VerifyFailure::Invalid));
    assert!(app.map_options(egui::vec2(800.0, 600.0)).highlight_seat_id.is_none());
}

#[test]
fn back_to_scan_clears_the_guest_and_remounts() {
    let mut app = SeatingApp::default();
    check_in(&mut app, "JS-2024");
    drag(&mut app, (160.0, 140.0), (200.0, 170.0));
    assert_ne!(app.seat_map.viewport().offset, egui::Vec2::ZERO);

    app.back_to_scan();

    assert_eq!(app.check_in, CheckIn::Scan { code: String::new() });
    assert!(app.guest_seat.is_none());
    assert_eq!(app.seat_map.viewport().offset, egui::Vec2::ZERO);
}

#[test]
fn open_events_have_no_scan_step() {
    let mut app = SeatingApp::default();
    app.load_sample(SampleKind::FloorPlanDemo);
    assert!(!app.require_qr());
    assert_eq!(app.check_in, CheckIn::Open);

    app.back_to_scan();
    assert_eq!(app.check_in, CheckIn::Open);

    // Submitting outside the scan step does nothing.
    app.submit_code();
    assert_eq!(app.check_in, CheckIn::Open);
}

#[test]
fn kiosk_panel_renders_every_check_in_step() {
    let mut app = SeatingApp::default();
    let ctx = egui::Context::default();
    let render = |app: &mut SeatingApp| {
        let _ = ctx.run(raw_input(vec![], egui::Modifiers::NONE), |ctx| {
            egui::SidePanel::right("side").show(ctx, |ui| app.draw_kiosk_panel(ui));
        });
    };

    render(&mut app);
    check_in(&mut app, "nope");
    render(&mut app);
    check_in(&mut app, "JS-2024");
    render(&mut app);
    app.load_sample(SampleKind::FloorPlanDemo);
    render(&mut app);
    assert_eq!(app.check_in, CheckIn::Open);
}

#[test]
fn editor_drag_moves_table_and_records_undo() {
    let mut app = editor_app();

    // Grab table-1 (anchored at 100,100) near its centre.
    drag(&mut app, (160.0, 140.0), (200.0, 170.0));

    assert_eq!(app.layout.table("table-1").unwrap().position, (140.0, 130.0));
    assert_eq!(app.layout.table("table-2").unwrap().position, (300.0, 100.0));
    // Seats stay where they are.
    assert_eq!(app.layout.seat("seat-1").unwrap().position, (110.0, 80.0));
    assert!(app.undo_history.can_undo());
    assert!(app.file.has_unsaved_changes);
    assert_eq!(app.activity.front().map(String::as_str), Some("Moved Table 1 to (140, 130)"));

    app.perform_undo();
    assert_eq!(app.layout.table("table-1").unwrap().position, (100.0, 100.0));
    assert!(app.undo_history.can_redo());

    app.perform_redo();
    assert_eq!(app.layout.table("table-1").unwrap().position, (140.0, 130.0));
    assert!(!app.undo_history.can_redo());
}

#[test]
fn kiosk_drag_pans_without_moving_tables() {
    let mut app = SeatingApp::default();
    let before = app.layout.clone();

    drag(&mut app, (160.0, 140.0), (200.0, 170.0));

    assert_eq!(app.layout, before);
    assert!(!app.undo_history.can_undo());
    assert_eq!(app.seat_map.viewport().offset, egui::vec2(40.0, 30.0));
}

#[test]
fn click_without_movement_records_nothing() {
    let mut app = editor_app();
    drag(&mut app, (160.0, 140.0), (160.0, 140.0));

    assert_eq!(app.layout.table("table-1").unwrap().position, (100.0, 100.0));
    assert!(!app.undo_history.can_undo());
    assert!(app.activity.is_empty());
}

#[test]
fn switching_view_commits_drag_and_resets_viewport() {
    let mut app = editor_app();
    let ctx = egui::Context::default();
    let origin = run_canvas(&ctx, &mut app, vec![]);
    let at = |x: f32, y: f32| origin + egui::vec2(x, y);

    run_canvas(
        &ctx,
        &mut app,
        vec![egui::Event::PointerMoved(at(300.0, 100.0)), press(at(300.0, 100.0), true)],
    );
    run_canvas(&ctx, &mut app, vec![egui::Event::PointerMoved(at(320.0, 110.0))]);
    assert!(app.seat_map.is_dragging("table-2"));

    app.set_view(View::Kiosk);

    assert_eq!(app.layout.table("table-2").unwrap().position, (320.0, 110.0));
    assert!(!app.seat_map.state().is_active());
    assert_eq!(app.seat_map.viewport().scale, 1.0);
    assert_eq!(app.seat_map.viewport().offset, egui::Vec2::ZERO);
}

#[test]
fn undo_shortcut_only_applies_in_editor() {
    let mut app = editor_app();
    drag(&mut app, (160.0, 140.0), (200.0, 170.0));

    let undo_key = egui::Event::Key {
        key: egui::Key::Z,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::COMMAND,
    };

    app.settings.view = View::Kiosk;
    let ctx = egui::Context::default();
    let _ = ctx.run(raw_input(vec![undo_key.clone()], egui::Modifiers::COMMAND), |ctx| {
        app.handle_undo_redo_keys(ctx);
    });
    assert_eq!(app.layout.table("table-1").unwrap().position, (140.0, 130.0));

    app.settings.view = View::Editor;
    let _ = ctx.run(raw_input(vec![undo_key], egui::Modifiers::COMMAND), |ctx| {
        app.handle_undo_redo_keys(ctx);
    });
    assert_eq!(app.layout.table("table-1").unwrap().position, (100.0, 100.0));
}

#[test]
fn activity_feed_is_bounded() {
    let mut app = editor_app();
    for i in 0..20 {
        app.handle_map_events(vec![SeatMapEvent::TableMoved {
            id: "table-2".into(),
            from: (300.0, 100.0),
            to: (300.0 + i as f32 + 1.0, 100.0),
        }]);
    }
    assert_eq!(app.activity.len(), crate::constants::MAX_ACTIVITY_ENTRIES);
    assert_eq!(app.activity.front().map(String::as_str), Some("Moved Table 2 to (320, 100)"));
}

#[test]
fn loading_a_sample_resets_history() {
    let mut app = editor_app();
    drag(&mut app, (160.0, 140.0), (200.0, 170.0));
    assert!(app.undo_history.can_undo());

    app.load_sample(SampleKind::FloorPlanDemo);
    assert!(!app.undo_history.can_undo());
    assert!(app.activity.is_empty());
    assert!(app.guest_seat.is_none());
    assert_eq!(app.layout.tables.len(), 3);
}

#[test]
fn loaded_file_reports_skipped_entries() {
    let mut app = SeatingApp::default();
    check_in(&mut app, "JS-2024");
    let json = r#"{
        "tables": [
            { "id": "t1", "type": "round", "x": 10, "y": 10, "radius": 20 },
            { "id": "t2", "type": "round", "x": 50 },
            { "id": "t3", "type": "round", "x": "100", "y": 10, "radius": 20 }
        ],
        "seats": [{ "id": "seat-2", "x": 12, "y": 12, "label": "A2", "tableId": "t1" }]
    }"#;

    app.apply_file_result(FileOperationResult::LoadCompleted("plan.json".into(), json.into()));

    assert_eq!(app.layout.tables.len(), 1);
    assert_eq!(app.file.current_path.as_deref(), Some("plan.json"));
    assert_eq!(
        app.status.as_deref(),
        Some("Opened plan.json, skipped 2 malformed entries")
    );
    // The guest seat id still exists in the new layout.
    assert_eq!(app.guest_seat.as_deref(), Some("seat-2"));
}

#[test]
fn invalid_file_keeps_current_layout() {
    let mut app = SeatingApp::default();
    let before = app.layout.clone();

    app.apply_file_result(FileOperationResult::LoadCompleted("bad.json".into(), "{".into()));

    assert_eq!(app.layout, before);
    assert!(app.status.as_deref().unwrap_or_default().starts_with("invalid layout JSON"));
}

#[test]
fn settings_round_trip_through_json() {
    let settings = AppSettings {
        dark_mode: true,
        view: View::Editor,
        ..Default::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    let back: AppSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);

    // Missing fields fall back to defaults.
    let partial: AppSettings = serde_json::from_str(r#"{"dark_mode":true}"#).unwrap();
    assert_eq!(partial.view, View::Kiosk);
    assert!(partial.show_grid);
}
