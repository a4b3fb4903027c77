use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::TimeRange;
use crate::models::{DailyOutcome, LatestPrice, PriceSeries, Report};

/// Everything one dashboard refresh produces. Rebuilt from scratch each time.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DashboardView {
    pub ticker: String,
    pub generated_at: DateTime<Utc>,
    pub range: TimeRange,

    /// Points inside the selected range, for plotting and export
    pub series: PriceSeries,
    /// SMA overlay aligned index-for-index with `series`
    pub sma: Vec<f64>,
    pub sma_window: usize,

    /// `None` when the selected range holds no data
    pub range_report: Option<Report>,
    /// Newest point across all data, regardless of the range filter
    pub latest: Option<LatestPrice>,
    pub daily: DailyOutcome,
}

impl DashboardView {
    pub fn has_data(&self) -> bool {
        self.latest.is_some()
    }
}
