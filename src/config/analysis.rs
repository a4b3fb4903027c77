//! Analysis and refresh configuration

use crate::utils::TimeUtils;

/// Moving-average overlay drawn on top of the price line
pub struct MovingAverageConfig {
    // Number of observations in the simple moving average window
    pub default_window: usize,
}

/// Settings for the data snapshot cache
pub struct CacheSettings {
    // A snapshot younger than this is re-used instead of re-reading the files.
    // Matches the scraper's append period.
    pub ttl_secs: i64,
}

/// Settings for the end-of-day report
pub struct DailyReportSettings {
    // Local hour (market time zone) from which the daily report is published
    pub publish_hour: u32,
    // Walk back to the previous trading day when asked for a weekend date
    pub weekend_rollback: bool,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    // `--watch` redraw period; kept below `cache.ttl_secs`
    pub refresh_interval_secs: i64,

    // Sub-groups
    pub moving_average: MovingAverageConfig,
    pub cache: CacheSettings,
    pub daily: DailyReportSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    refresh_interval_secs: TimeUtils::SECS_IN_MIN,

    moving_average: MovingAverageConfig { default_window: 20 },

    cache: CacheSettings {
        ttl_secs: TimeUtils::SECS_IN_5_MIN,
    },

    daily: DailyReportSettings {
        publish_hour: 20,
        weekend_rollback: false,
    },
};
