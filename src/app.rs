use egui::{Align2, Color32, Context, FontId, PointerButton, Vec2, vec2};

use crate::canvas::SketchCanvas;
use crate::controller::{InteractionController, PointerDispatch};
use crate::panels::{PanelGeometry, tools_panel};
use crate::settings::SketchSettings;
use crate::tool::ToolState;

const ROUTED_BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// The whole drawing surface: a full-window canvas with the tool panel floating over it.
///
/// Nothing here is persisted; every launch starts from [`SketchSettings`].
pub struct SketchApp {
    controller: InteractionController,
    canvas: SketchCanvas,
    panel_geometry: PanelGeometry,
}

impl SketchApp {
    /// `viewport` is the size of the window at launch, used to place the tool panel.
    pub fn new(settings: &SketchSettings, viewport: Vec2) -> Self {
        let controller = InteractionController::new(ToolState::from_settings(settings), settings.canvas_color);
        let canvas = SketchCanvas::new(controller.canvas_config());
        Self {
            controller,
            canvas,
            panel_geometry: PanelGeometry::initial(viewport),
        }
    }

    /// Called once before the first frame.
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>, settings: &SketchSettings) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        let [width, height] = settings.window_size;
        Self::new(settings, vec2(width, height))
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut InteractionController {
        &mut self.controller
    }

    pub fn canvas(&self) -> &SketchCanvas {
        &self.canvas
    }

    pub fn panel_geometry(&self) -> PanelGeometry {
        self.panel_geometry
    }

    pub fn panel_geometry_mut(&mut self) -> &mut PanelGeometry {
        &mut self.panel_geometry
    }

    pub fn select_pen_tool(&mut self) {
        self.controller.select_pen_tool(&mut self.canvas);
    }

    pub fn select_erase_tool(&mut self) {
        self.controller.select_erase_tool(&mut self.canvas);
    }

    pub fn reset(&mut self) {
        self.controller.reset(&mut self.canvas);
    }

    /// Routes a pointer press on the canvas to the controller
    pub fn pointer_down(&mut self, button: PointerButton) -> PointerDispatch {
        let dispatch = self.controller.on_pointer_down(button, &mut self.canvas);
        if dispatch.suppresses_context_menu() {
            log::trace!("Context menu suppressed for {button:?}");
        }
        dispatch
    }

    /// Runs one frame of UI
    pub fn show(&mut self, ctx: &Context) {
        let viewport = ctx.screen_rect().size();
        tools_panel(self, ctx, viewport);

        self.canvas.configure(self.controller.canvas_config());
        self.canvas.handle_shortcuts(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let response = self.canvas.allocate(ui);

                if response.contains_pointer() {
                    let pressed = ctx.input(|i| {
                        ROUTED_BUTTONS
                            .into_iter()
                            .filter(|button| i.pointer.button_pressed(*button))
                            .collect::<Vec<_>>()
                    });
                    for button in pressed {
                        self.pointer_down(button);
                    }
                }

                self.canvas.interact(ctx, &response);

                let rect = response.rect;
                self.canvas.paint(ui.painter(), rect);
                ui.painter().text(
                    rect.min + vec2(16.0, 12.0),
                    Align2::LEFT_TOP,
                    "Canvas",
                    FontId::proportional(28.0),
                    Color32::WHITE,
                );
            });
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
