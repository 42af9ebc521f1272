use std::ops::RangeInclusive;

use crate::color::HexColor;
use crate::settings::SketchSettings;

pub const STROKE_WIDTH_RANGE: RangeInclusive<u32> = 1..=30;
pub const ERASER_WIDTH_RANGE: RangeInclusive<u32> = 1..=100;

/// Which kind of path the canvas lays down next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Pen,
    Erase,
}

impl ToolMode {
    pub fn is_erase(self) -> bool {
        self == ToolMode::Erase
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolMode::Pen => "Pen",
            ToolMode::Erase => "Eraser",
        }
    }
}

/// Tool parameters shown in the panel. Lives as long as the app and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    mode: ToolMode,
    /// Pen line thickness, within [`STROKE_WIDTH_RANGE`]
    stroke_width: u32,
    /// Eraser line thickness, within [`ERASER_WIDTH_RANGE`]
    eraser_width: u32,
    stroke_color: HexColor,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_settings(&SketchSettings::default())
    }
}

impl ToolState {
    pub fn from_settings(settings: &SketchSettings) -> Self {
        let mut state = Self {
            mode: ToolMode::Pen,
            stroke_width: *STROKE_WIDTH_RANGE.start(),
            eraser_width: *ERASER_WIDTH_RANGE.start(),
            stroke_color: settings.stroke_color,
        };
        state.set_stroke_width(settings.stroke_width);
        state.set_eraser_width(settings.eraser_width);
        state
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    pub fn eraser_width(&self) -> u32 {
        self.eraser_width
    }

    pub fn stroke_color(&self) -> HexColor {
        self.stroke_color
    }

    pub(crate) fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
    }

    pub(crate) fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = clamp(width, &STROKE_WIDTH_RANGE);
    }

    pub(crate) fn set_eraser_width(&mut self, width: u32) {
        self.eraser_width = clamp(width, &ERASER_WIDTH_RANGE);
    }

    pub(crate) fn set_stroke_color(&mut self, color: HexColor) {
        self.stroke_color = color;
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
