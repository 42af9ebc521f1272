use egui::{Context, Slider, Vec2};
use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::SketchApp;
use crate::color::HexColor;
use crate::components::ToolButton;
use crate::panels::geometry::{DEFAULT_PANEL_WIDTH, MAX_PANEL_WIDTH, MIN_PANEL_WIDTH};
use crate::tool::{ERASER_WIDTH_RANGE, STROKE_WIDTH_RANGE, ToolMode};

/// The floating "Tools" window. egui handles the dragging and resizing.
pub fn tools_panel(app: &mut SketchApp, ctx: &Context, viewport: Vec2) {
    let default_pos = app.panel_geometry().position;

    let shown = egui::Window::new("Tools")
        .id(egui::Id::new("tools_panel"))
        .title_bar(false)
        .collapsible(false)
        .default_pos(default_pos)
        .default_width(DEFAULT_PANEL_WIDTH)
        .min_width(MIN_PANEL_WIDTH)
        .max_width(MAX_PANEL_WIDTH)
        .resizable([true, false])
        .constrain_to(ctx.screen_rect())
        .show(ctx, |ui| {
            let content_width = ui.max_rect().width();
            ui.heading("Tools");
            ui.add_space(8.0);

            let mode = app.controller().mode();
            let button_width = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
            ui.horizontal(|ui| {
                if ToolButton::new(ToolMode::Pen, mode == ToolMode::Pen)
                    .show(ui, button_width)
                    .clicked()
                {
                    app.select_pen_tool();
                }
                if ToolButton::new(ToolMode::Erase, mode == ToolMode::Erase)
                    .show(ui, button_width)
                    .clicked()
                {
                    app.select_erase_tool();
                }
            });
            ui.add_space(8.0);

            ui.label("Stroke Width");
            let mut stroke_width = app.controller().state().stroke_width();
            if ui
                .add(Slider::new(&mut stroke_width, STROKE_WIDTH_RANGE).step_by(1.0))
                .changed()
            {
                app.controller_mut().set_stroke_width(stroke_width);
            }

            ui.label("Eraser Width");
            let mut eraser_width = app.controller().state().eraser_width();
            if ui
                .add(Slider::new(&mut eraser_width, ERASER_WIDTH_RANGE).step_by(1.0))
                .changed()
            {
                app.controller_mut().set_eraser_width(eraser_width);
            }

            ui.label("Stroke color");
            let mut color = app.controller().state().stroke_color().color32();
            ui.horizontal(|ui| {
                if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    app.controller_mut().set_stroke_color(HexColor::from_color32(color));
                }
                ui.monospace(app.controller().state().stroke_color().to_string());
            });
            ui.add_space(8.0);

            if ui
                .add_sized([ui.available_width(), 28.0], egui::Button::new("Reset"))
                .clicked()
            {
                app.reset();
            }

            content_width
        });

    if let Some(shown) = shown {
        if let Some(content_width) = shown.inner {
            app.panel_geometry_mut()
                .observe(shown.response.rect, content_width, viewport);
        }
    }
}
