//! A full-surface freehand sketch widget.
//!
//! The canvas owns every path ever drawn and its own undo/redo history. The rest of
//! the app never looks at that data: it pushes a [`CanvasConfig`] each frame and talks
//! to the canvas through [`CanvasHandle`].

pub mod history;
pub mod path;

use egui::{Context, Key, KeyboardShortcut, Modifiers, Painter, PointerButton, Pos2, Rect, Response, Sense, Ui};

use crate::color::HexColor;
pub use history::{CanvasCommand, CanvasHistory};
pub use path::{CanvasPath, PathBuilder};

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(
    Modifiers {
        shift: true,
        ..Modifiers::COMMAND
    },
    Key::Z,
);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Styling the canvas applies to paths begun from now on
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
    pub stroke_width: u32,
    pub eraser_width: u32,
    pub stroke_color: HexColor,
    pub canvas_color: HexColor,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            stroke_width: 5,
            eraser_width: 10,
            stroke_color: HexColor::WHITE,
            canvas_color: HexColor::BLACK,
        }
    }
}

/// Imperative commands the rest of the app may issue to a canvas
pub trait CanvasHandle {
    /// Makes the next path an eraser path (`true`) or a pen path (`false`)
    fn set_erase_mode(&mut self, erase: bool);

    /// Removes every path and forgets the undo/redo history
    fn reset_canvas(&mut self);
}

#[derive(Debug, Default)]
pub struct SketchCanvas {
    config: CanvasConfig,
    erase_mode: bool,
    paths: Vec<CanvasPath>,
    history: CanvasHistory,
    // Transient state: the path being drawn (if any)
    current: Option<PathBuilder>,
}

impl SketchCanvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn configure(&mut self, config: CanvasConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn is_erase_mode(&self) -> bool {
        self.erase_mode
    }

    pub fn paths(&self) -> &[CanvasPath] {
        &self.paths
    }

    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.paths)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.paths)
    }

    /// Removes every path as a single undoable step
    pub fn clear_canvas(&mut self) {
        if self.paths.is_empty() {
            return;
        }
        self.history
            .execute(CanvasCommand::Clear { removed: Vec::new() }, &mut self.paths);
    }

    /// Starts a path at a canvas-local position using the current mode and config
    pub fn begin_path(&mut self, start: Pos2) {
        let (width, color) = if self.erase_mode {
            (self.config.eraser_width, self.config.canvas_color)
        } else {
            (self.config.stroke_width, self.config.stroke_color)
        };
        self.current = Some(PathBuilder::begin(
            start,
            width as f32,
            color.color32(),
            self.erase_mode,
        ));
    }

    pub fn extend_path(&mut self, point: Pos2) {
        if let Some(current) = &mut self.current {
            current.extend(point);
        }
    }

    /// Commits the path being drawn, if any
    pub fn end_path(&mut self) {
        if let Some(current) = self.current.take() {
            let path = current.finish();
            log::debug!(
                "Committed {} path with {} points",
                if path.is_eraser() { "eraser" } else { "pen" },
                path.points().len()
            );
            self.history.execute(CanvasCommand::AddPath(path), &mut self.paths);
        }
    }

    /// Reserves the whole remaining area of `ui` for drawing.
    ///
    /// Split from [`Self::interact`] so pointer presses can be routed before a path begins.
    pub fn allocate(&self, ui: &mut Ui) -> Response {
        let (_rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        response
    }

    /// Turns pointer activity on the canvas into paths
    pub fn interact(&mut self, ctx: &Context, response: &Response) {
        let origin = response.rect.min.to_vec2();
        let started = response.drag_started_by(PointerButton::Primary)
            || response.drag_started_by(PointerButton::Secondary);

        if started {
            let press = ctx.input(|i| i.pointer.press_origin());
            if let Some(start) = press.or(response.interact_pointer_pos()) {
                self.begin_path(start - origin);
            }
        }

        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.extend_path(pos - origin);
            }
        }

        if response.drag_stopped() {
            self.end_path();
        } else if (response.clicked() || response.secondary_clicked()) && !self.is_drawing() {
            // A click without a drag leaves a dot
            if let Some(pos) = response.interact_pointer_pos() {
                self.begin_path(pos - origin);
                self.end_path();
            }
        }
    }

    pub fn handle_shortcuts(&mut self, ctx: &Context) {
        // Check the shift variant first, since consume_shortcut ignores extra modifiers
        let (redo, undo) = ctx.input_mut(|i| {
            let redo = i.consume_shortcut(&REDO) || i.consume_shortcut(&REDO_ALT);
            let undo = i.consume_shortcut(&UNDO);
            (redo, undo)
        });
        if redo && self.redo() {
            log::info!("Redo");
        }
        if undo && self.undo() {
            log::info!("Undo");
        }
    }

    pub fn paint(&self, painter: &Painter, rect: Rect) {
        let canvas_color = self.config.canvas_color.color32();
        painter.rect_filled(rect, 0.0, canvas_color);

        let origin = rect.min.to_vec2();
        let preview = self.current.as_ref().map(PathBuilder::preview);
        for path in self.paths.iter().chain(preview.as_ref()) {
            painter.extend(path.shapes(origin, canvas_color));
        }
    }
}

impl CanvasHandle for SketchCanvas {
    fn set_erase_mode(&mut self, erase: bool) {
        if self.erase_mode != erase {
            log::debug!("Canvas erase mode: {erase}");
        }
        self.erase_mode = erase;
    }

    fn reset_canvas(&mut self) {
        self.current = None;
        self.paths.clear();
        self.history.clear();
        log::info!("Canvas reset");
    }
}
