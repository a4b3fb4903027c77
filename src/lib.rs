#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Refresh loop tying loading, caching and analytics together
pub mod engine;

use std::path::PathBuf;

use chrono::NaiveDate;

// Re-export commonly used types
pub use analysis::WeekendPolicy;
pub use data::{PriceSource, SeriesCache, default_sources};
pub use domain::{PricePoint, RangePreset, TimeRange};
pub use engine::{DashboardEngine, DashboardView, EngineSettings};
pub use models::{DailyOutcome, PriceSeries, Report};
pub use utils::app_time;

use crate::config::{ANALYSIS, DEFAULT_DATA_DIR};
use crate::utils::SystemClock;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the historical and recent price CSVs
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Time range to analyse: all, ytd, 5y, 6mo, 2w, 10m, ...
    #[arg(long, default_value = "ytd")]
    pub range: TimeRange,

    /// Moving-average window, in points
    #[arg(long, default_value_t = ANALYSIS.moving_average.default_window)]
    pub sma_window: usize,

    /// On a weekend with no data, report the last trading day instead
    #[arg(long, default_value_t = ANALYSIS.daily.weekend_rollback)]
    pub weekend_rollback: bool,

    /// Show today's daily report before the publish hour
    #[arg(long, default_value_t = false)]
    pub ignore_publish_hour: bool,

    /// Report this market date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Print the view as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write the filtered series to this CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Keep refreshing every `refresh_interval_secs` until interrupted
    #[arg(long, default_value_t = false)]
    pub watch: bool,

    /// List the range presets and exit
    #[arg(long, default_value_t = false)]
    pub list_ranges: bool,
}

impl Cli {
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            sma_window: self.sma_window,
            weekend_policy: WeekendPolicy::from_flag(self.weekend_rollback),
            publish_hour: (!self.ignore_publish_hour).then_some(ANALYSIS.daily.publish_hour),
            report_date: self.date,
            ..EngineSettings::default()
        }
    }
}

/// Engine reading the CSVs under `cli.data_dir` against the system clock.
pub fn build_engine(cli: &Cli) -> DashboardEngine {
    DashboardEngine::new(
        default_sources(&cli.data_dir),
        Box::new(SystemClock),
        cli.engine_settings(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["ticker-dashboard"]);
        assert_eq!(cli.range, TimeRange::YearToDate);
        assert_eq!(cli.data_dir, PathBuf::from(DEFAULT_DATA_DIR));

        let settings = cli.engine_settings();
        assert_eq!(settings.weekend_policy, WeekendPolicy::Strict);
        assert_eq!(settings.publish_hour, Some(ANALYSIS.daily.publish_hour));
        assert_eq!(settings.report_date, None);
    }

    #[test]
    fn cli_overrides() {
        let cli = Cli::parse_from([
            "ticker-dashboard",
            "--range",
            "6mo",
            "--sma-window",
            "5",
            "--weekend-rollback",
            "--ignore-publish-hour",
            "--date",
            "2025-04-05",
        ]);
        assert_eq!(cli.range, TimeRange::Months(6));

        let settings = cli.engine_settings();
        assert_eq!(settings.sma_window, 5);
        assert_eq!(settings.weekend_policy, WeekendPolicy::RollBack);
        assert_eq!(settings.publish_hour, None);
        assert_eq!(settings.report_date, NaiveDate::from_ymd_opt(2025, 4, 5));
    }

    #[test]
    fn bad_range_is_rejected() {
        assert!(Cli::try_parse_from(["ticker-dashboard", "--range", "3q"]).is_err());
    }
}
