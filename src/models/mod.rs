// Domain models for price analytics
// These modules contain pure data types independent of loading and rendering

pub mod price_series;
pub mod report;

// Re-export key types for convenience
pub use price_series::PriceSeries;
pub use report::{DailyOutcome, DailyReport, LatestPrice, Report};
