//! GUI module - User interface components

mod app;
mod control_panel;
mod result_viewer;

pub use app::InsightsApp;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use result_viewer::ResultViewer;
