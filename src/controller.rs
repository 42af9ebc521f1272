use egui::PointerButton;

use crate::canvas::{CanvasConfig, CanvasHandle};
use crate::color::HexColor;
use crate::tool::{ToolMode, ToolState};

/// What a pointer press on the canvas was turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDispatch {
    Pen,
    Erase,
    Ignored,
}

impl PointerDispatch {
    /// A secondary press draws with the eraser, so it must not also open a context menu
    pub fn suppresses_context_menu(self) -> bool {
        self == PointerDispatch::Erase
    }
}

/// Owns the tool parameters and forwards mode changes to a canvas.
///
/// Every operation that needs the canvas takes it as an argument, so the controller
/// never holds on to the canvas or reads its paths.
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: ToolState,
    canvas_color: HexColor,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(ToolState::default(), HexColor::BLACK)
    }
}

impl InteractionController {
    pub fn new(state: ToolState, canvas_color: HexColor) -> Self {
        Self { state, canvas_color }
    }

    pub fn state(&self) -> &ToolState {
        &self.state
    }

    pub fn mode(&self) -> ToolMode {
        self.state.mode()
    }

    /// The configuration the canvas receives on the next frame
    pub fn canvas_config(&self) -> CanvasConfig {
        CanvasConfig {
            stroke_width: self.state.stroke_width(),
            eraser_width: self.state.eraser_width(),
            stroke_color: self.state.stroke_color(),
            canvas_color: self.canvas_color,
        }
    }

    /// Primary presses switch to the pen, secondary presses to the eraser.
    ///
    /// The displayed mode follows, so the highlighted tool always matches the canvas.
    pub fn on_pointer_down(&mut self, button: PointerButton, canvas: &mut dyn CanvasHandle) -> PointerDispatch {
        let dispatch = match button {
            PointerButton::Primary => PointerDispatch::Pen,
            PointerButton::Secondary => PointerDispatch::Erase,
            _ => return PointerDispatch::Ignored,
        };
        let mode = if dispatch == PointerDispatch::Erase {
            ToolMode::Erase
        } else {
            ToolMode::Pen
        };
        self.apply_mode(mode, canvas);
        dispatch
    }

    pub fn select_pen_tool(&mut self, canvas: &mut dyn CanvasHandle) {
        self.apply_mode(ToolMode::Pen, canvas);
    }

    pub fn select_erase_tool(&mut self, canvas: &mut dyn CanvasHandle) {
        self.apply_mode(ToolMode::Erase, canvas);
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        self.state.set_stroke_width(width);
    }

    pub fn set_eraser_width(&mut self, width: u32) {
        self.state.set_eraser_width(width);
    }

    pub fn set_stroke_color(&mut self, color: HexColor) {
        if color != self.state.stroke_color() {
            log::debug!("Stroke color: {color}");
        }
        self.state.set_stroke_color(color);
    }

    /// Clears the drawing. Tool parameters are left alone.
    pub fn reset(&mut self, canvas: &mut dyn CanvasHandle) {
        canvas.reset_canvas();
    }

    fn apply_mode(&mut self, mode: ToolMode, canvas: &mut dyn CanvasHandle) {
        if mode != self.state.mode() {
            log::info!("Tool selected: {}", mode.name());
        }
        self.state.set_mode(mode);
        canvas.set_erase_mode(mode.is_erase());
    }
}
