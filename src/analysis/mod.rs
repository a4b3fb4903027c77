// Price series analytics: pure functions over an immutable snapshot
pub mod daily_report;
pub mod moving_average;
pub mod range_filter;
pub mod summary;

// Re-export commonly used functions
pub use daily_report::{WeekendPolicy, daily_report, todays_report};
pub use moving_average::rolling_mean;
pub use range_filter::{filter_range, filter_since, filter_time_range};
pub use summary::{latest_change, summarize};
