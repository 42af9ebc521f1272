use egui::{Align2, Color32, FontId, Response, Sense, Stroke, Ui, vec2};

use crate::tool::ToolMode;

const BUTTON_HEIGHT: f32 = 32.0;

/// Square-cornered toggle showing an icon and the tool's name; filled when active
pub struct ToolButton {
    pub mode: ToolMode,
    pub icon: &'static str,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(mode: ToolMode, selected: bool) -> Self {
        let icon = match mode {
            ToolMode::Pen => "✏",
            ToolMode::Erase => "⌫",
        };
        Self { mode, icon, selected }
    }

    pub fn show(&self, ui: &mut Ui, width: f32) -> Response {
        let (rect, response) = ui.allocate_exact_size(vec2(width, BUTTON_HEIGHT), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                Color32::from_gray(60)
            } else {
                Color32::from_gray(45)
            };
            let text_color = if self.selected { Color32::BLACK } else { Color32::WHITE };

            ui.painter().rect_filled(rect, 4.0, bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                format!("{} {}", self.icon, self.mode.name()),
                FontId::proportional(16.0),
                text_color,
            );

            if self.selected {
                ui.painter()
                    .rect_stroke(rect, 4.0, Stroke::new(2.0, Color32::from_rgb(33, 150, 243)));
            }
        }

        response.on_hover_text(match self.mode {
            ToolMode::Pen => "Draw (left mouse button)",
            ToolMode::Erase => "Erase (right mouse button)",
        })
    }
}
