use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::{SketchError, SketchResult};

/// Startup defaults for the sketch surface.
///
/// Only read once at launch. Tool state changed at runtime is never written back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to their defaults
pub struct SketchSettings {
    pub stroke_width: u32,
    pub eraser_width: u32,
    pub stroke_color: HexColor,
    pub canvas_color: HexColor,
    /// Initial inner size of the native window, in points
    pub window_size: [f32; 2],
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            stroke_width: 5,
            eraser_width: 10,
            stroke_color: HexColor::WHITE,
            canvas_color: HexColor::BLACK,
            window_size: [1280.0, 800.0],
        }
    }
}

impl SketchSettings {
    pub fn from_json(json: &str) -> SketchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> SketchResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SketchError::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Loads from `path` if given, logging and falling back to defaults on any error.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path.map(Self::load) {
            Some(Ok(settings)) => settings,
            Some(Err(err)) => {
                log::warn!("Using default settings: {err}");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_mount_state() {
        let settings = SketchSettings::default();
        assert_eq!(settings.stroke_width, 5);
        assert_eq!(settings.eraser_width, 10);
        assert_eq!(settings.stroke_color.to_string(), "#FFFFFF");
        assert_eq!(settings.canvas_color, HexColor::BLACK);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let settings = SketchSettings::from_json(r##"{ "stroke_color": "#FF0000" }"##).unwrap();
        assert_eq!(settings.stroke_color, HexColor::from_rgb(255, 0, 0));
        assert_eq!(settings.stroke_width, 5);
        assert_eq!(settings.window_size, [1280.0, 800.0]);
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let err = SketchSettings::from_json(r#"{ "canvas_color": "black" }"#).unwrap_err();
        assert!(matches!(err, SketchError::ParseSettings(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = Path::new("/definitely/not/here/sketch.json");
        assert!(matches!(
            SketchSettings::load(path),
            Err(SketchError::ReadSettings { .. })
        ));
        assert_eq!(SketchSettings::load_or_default(Some(path)), SketchSettings::default());
        assert_eq!(SketchSettings::load_or_default(None), SketchSettings::default());
    }
}
