// Text rendering of a dashboard view
pub mod config;
pub mod text_panels;
pub mod utils;

pub use config::{UI_CONFIG, UI_TEXT};
pub use text_panels::{render_dashboard, render_presets};
