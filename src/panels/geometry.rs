use egui::{Pos2, Rect, Vec2, pos2, vec2};

pub const DEFAULT_PANEL_WIDTH: f32 = 250.0;
pub const MIN_PANEL_WIDTH: f32 = 150.0;
pub const MAX_PANEL_WIDTH: f32 = 300.0;
pub const PANEL_TOP_OFFSET: f32 = 10.0;

/// Where the floating tool panel sits.
///
/// `position` is the top-left of the whole window, frame included. `width` is the
/// content width, the quantity egui's `min_width`/`max_width` limit. Height follows
/// the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub position: Pos2,
    pub width: f32,
}

impl PanelGeometry {
    /// Top-right placement for a viewport of the given size
    pub fn initial(viewport: Vec2) -> Self {
        let geometry = Self {
            position: pos2(viewport.x - DEFAULT_PANEL_WIDTH, PANEL_TOP_OFFSET),
            width: DEFAULT_PANEL_WIDTH,
        };
        geometry.constrain_to(viewport, vec2(DEFAULT_PANEL_WIDTH, 0.0))
    }

    pub fn clamp_width(width: f32) -> f32 {
        width.clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH)
    }

    /// Clamps the width and moves the panel so a window of `outer_size` stays inside the viewport
    pub fn constrain_to(self, viewport: Vec2, outer_size: Vec2) -> Self {
        let width = Self::clamp_width(self.width);
        let max_x = (viewport.x - outer_size.x.max(width)).max(0.0);
        let max_y = (viewport.y - outer_size.y).max(0.0);
        Self {
            position: pos2(self.position.x.clamp(0.0, max_x), self.position.y.clamp(0.0, max_y)),
            width,
        }
    }

    /// Records where the window ended up after the user dragged or resized it.
    ///
    /// `outer` is the full window rect; `content_width` excludes the frame margins.
    pub fn observe(&mut self, outer: Rect, content_width: f32, viewport: Vec2) {
        *self = Self {
            position: outer.min,
            width: content_width,
        }
        .constrain_to(viewport, outer.size());
    }
}
