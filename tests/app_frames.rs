use egui::{Event, Key, Modifiers, PointerButton, Pos2, RawInput, Rect, pos2, vec2};
use sketch_surface::panels::geometry::{MAX_PANEL_WIDTH, MIN_PANEL_WIDTH};
use sketch_surface::{SketchApp, SketchSettings, ToolMode};

const SCREEN: egui::Vec2 = egui::Vec2::new(1280.0, 800.0);

fn input(events: Vec<Event>) -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN)),
        events,
        ..Default::default()
    }
}

fn run_frame(ctx: &egui::Context, app: &mut SketchApp, events: Vec<Event>) {
    let _ = ctx.run(input(events), |ctx| app.show(ctx));
}

fn button(pos: Pos2, button: PointerButton, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn key(key: Key, modifiers: Modifiers) -> Event {
    Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

/// Two empty frames so the canvas and the panel window have been laid out
fn mounted() -> (egui::Context, SketchApp) {
    let ctx = egui::Context::default();
    let mut app = SketchApp::new(&SketchSettings::default(), SCREEN);
    run_frame(&ctx, &mut app, Vec::new());
    run_frame(&ctx, &mut app, Vec::new());
    (ctx, app)
}

/// Press at `from`, move right in 10 px steps, release at the last point
fn drag(ctx: &egui::Context, app: &mut SketchApp, which: PointerButton, from: Pos2, steps: usize) {
    run_frame(ctx, app, vec![Event::PointerMoved(from), button(from, which, true)]);
    let mut pos = from;
    for _ in 0..steps {
        pos += vec2(10.0, 0.0);
        run_frame(ctx, app, vec![Event::PointerMoved(pos)]);
    }
    run_frame(ctx, app, vec![button(pos, which, false)]);
    run_frame(ctx, app, Vec::new());
}

fn click(ctx: &egui::Context, app: &mut SketchApp, which: PointerButton, at: Pos2) {
    run_frame(ctx, app, vec![Event::PointerMoved(at), button(at, which, true)]);
    run_frame(ctx, app, vec![button(at, which, false)]);
    run_frame(ctx, app, Vec::new());
}

#[test]
fn test_primary_drag_draws_ink_from_press_point() {
    let (ctx, mut app) = mounted();
    drag(&ctx, &mut app, PointerButton::Primary, pos2(200.0, 300.0), 9);

    let paths = app.canvas().paths();
    assert_eq!(paths.len(), 1);
    assert!(!paths[0].is_eraser());
    assert!(paths[0].points().len() >= 2);
    assert_eq!(paths[0].points()[0], pos2(200.0, 300.0));
    assert_eq!(app.controller().mode(), ToolMode::Pen);
}

#[test]
fn test_secondary_drag_erases() {
    let (ctx, mut app) = mounted();
    drag(&ctx, &mut app, PointerButton::Secondary, pos2(200.0, 300.0), 9);

    let paths = app.canvas().paths();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].is_eraser());
    assert_eq!(paths[0].width(), 10.0);
    assert!(paths[0].points().len() >= 2);
    assert_eq!(app.controller().mode(), ToolMode::Erase);
}

#[test]
fn test_click_without_drag_leaves_a_dot() {
    let (ctx, mut app) = mounted();

    click(&ctx, &mut app, PointerButton::Primary, pos2(100.0, 500.0));
    assert_eq!(app.controller().mode(), ToolMode::Pen);

    click(&ctx, &mut app, PointerButton::Secondary, pos2(400.0, 500.0));
    assert_eq!(app.controller().mode(), ToolMode::Erase);

    let paths = app.canvas().paths();
    assert_eq!(paths.len(), 2);
    assert!(!paths[0].is_eraser());
    assert_eq!(paths[0].points(), &[pos2(100.0, 500.0)]);
    assert!(paths[1].is_eraser());
    assert_eq!(paths[1].points().len(), 1);
}

#[test]
fn test_press_on_panel_does_not_reach_canvas() {
    let (ctx, mut app) = mounted();
    let on_panel = app.panel_geometry().position + vec2(40.0, 15.0);

    click(&ctx, &mut app, PointerButton::Secondary, on_panel);
    assert!(app.canvas().paths().is_empty());
    assert_eq!(app.controller().mode(), ToolMode::Pen);
    assert!(!app.canvas().is_erase_mode());
}

#[test]
fn test_undo_and_redo_shortcuts() {
    let (ctx, mut app) = mounted();
    click(&ctx, &mut app, PointerButton::Primary, pos2(100.0, 400.0));
    click(&ctx, &mut app, PointerButton::Primary, pos2(200.0, 400.0));
    assert_eq!(app.canvas().paths().len(), 2);

    run_frame(&ctx, &mut app, vec![key(Key::Z, Modifiers::COMMAND)]);
    assert_eq!(app.canvas().paths().len(), 1);

    let redo = Modifiers {
        shift: true,
        ..Modifiers::COMMAND
    };
    run_frame(&ctx, &mut app, vec![key(Key::Z, redo)]);
    assert_eq!(app.canvas().paths().len(), 2);

    run_frame(&ctx, &mut app, vec![key(Key::Z, Modifiers::COMMAND)]);
    run_frame(&ctx, &mut app, vec![key(Key::Y, Modifiers::COMMAND)]);
    assert_eq!(app.canvas().paths().len(), 2);
}

#[test]
fn test_frame_pushes_config_to_canvas() {
    let ctx = egui::Context::default();
    let mut app = SketchApp::new(&SketchSettings::default(), SCREEN);

    app.controller_mut().set_stroke_width(20);
    run_frame(&ctx, &mut app, Vec::new());

    assert_eq!(app.canvas().config().stroke_width, 20);
    assert_eq!(app.canvas().config(), &app.controller().canvas_config());
}

#[test]
fn test_panel_stays_inside_window() {
    let ctx = egui::Context::default();
    let mut app = SketchApp::new(&SketchSettings::default(), SCREEN);
    assert_eq!(app.panel_geometry().position, pos2(1030.0, 10.0));

    run_frame(&ctx, &mut app, Vec::new());
    run_frame(&ctx, &mut app, Vec::new());

    let geometry = app.panel_geometry();
    assert!((MIN_PANEL_WIDTH..=MAX_PANEL_WIDTH).contains(&geometry.width));
    assert!(geometry.position.x >= 0.0);
    assert!(geometry.position.x + geometry.width <= SCREEN.x);
    assert!(geometry.position.y >= 0.0);
}

#[test]
fn test_secondary_press_on_canvas_selects_eraser() {
    let ctx = egui::Context::default();
    let mut app = SketchApp::new(&SketchSettings::default(), SCREEN);

    // First frame lays out the widgets so the press can be hit-tested
    run_frame(&ctx, &mut app, Vec::new());

    let pos = pos2(300.0, 400.0);
    run_frame(
        &ctx,
        &mut app,
        vec![
            Event::PointerMoved(pos),
            Event::PointerButton {
                pos,
                button: PointerButton::Secondary,
                pressed: true,
                modifiers: Modifiers::NONE,
            },
        ],
    );

    assert_eq!(app.controller().mode(), ToolMode::Erase);
    assert!(app.canvas().is_erase_mode());
}

#[test]
fn test_reset_keeps_tool_state() {
    let mut app = SketchApp::new(&SketchSettings::default(), vec2(800.0, 600.0));
    app.select_erase_tool();
    app.controller_mut().set_eraser_width(42);

    app.reset();
    assert_eq!(app.controller().mode(), ToolMode::Erase);
    assert_eq!(app.controller().state().eraser_width(), 42);
    assert!(app.canvas().paths().is_empty());
}
