#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod components;
pub mod controller;
pub mod error;
pub mod panels;
pub mod settings;
pub mod tool;

pub use app::SketchApp;
pub use canvas::{CanvasConfig, CanvasHandle, SketchCanvas};
pub use color::HexColor;
pub use controller::{InteractionController, PointerDispatch};
pub use error::{SketchError, SketchResult};
pub use settings::SketchSettings;
pub use tool::{ToolMode, ToolState};
