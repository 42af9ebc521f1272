pub mod geometry;
mod tools_panel;

pub use geometry::PanelGeometry;
pub use tools_panel::tools_panel;
