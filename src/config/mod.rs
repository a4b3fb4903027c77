//! Configuration module for the ticker dashboard.

pub mod analysis;
pub mod market;

pub(crate) mod debug; // Files use crate::config::debug::FLAG behind cfg(debug_assertions)

pub mod persistence;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use market::MARKET;
pub use persistence::{
    DEFAULT_DATA_DIR, HISTORICAL_PRICES_FILENAME, PERSISTENCE, RECENT_PRICES_FILENAME,
};
