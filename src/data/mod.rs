// Data loading, caching, and export
pub mod export;
pub mod prices;

// Re-export commonly used types
pub use export::{export_to_path, write_csv};
pub use prices::{PriceSource, SeriesCache, default_sources, load_cached, load_combined};
