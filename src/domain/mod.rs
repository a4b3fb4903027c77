// Domain types and value objects
pub mod price_point;
pub mod time_range;

// Re-export commonly used types
pub use price_point::PricePoint;
pub use time_range::{ParseRangeError, RangePreset, TimeRange};
