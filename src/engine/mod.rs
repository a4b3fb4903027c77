pub mod core;
pub mod state;

// Re-export key components
pub use core::{DashboardEngine, EngineSettings};
pub use state::DashboardView;
