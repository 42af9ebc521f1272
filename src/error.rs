use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading settings or parsing user-supplied values
#[derive(Debug, Error)]
pub enum SketchError {
    /// A color string was not of the form `#RRGGBB`
    #[error("invalid hex color {0:?}, expected #RRGGBB")]
    InvalidHexColor(String),

    /// The settings file could not be read
    #[error("failed to read settings from {path}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file was not valid JSON for [`crate::SketchSettings`]
    #[error("failed to parse settings")]
    ParseSettings(#[from] serde_json::Error),
}

pub type SketchResult<T> = Result<T, SketchError>;
