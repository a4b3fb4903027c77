use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::analysis::{
    WeekendPolicy, daily_report, filter_time_range, latest_change, rolling_mean, summarize,
    todays_report,
};
use crate::config::{ANALYSIS, MARKET};
use crate::data::{PriceSource, SeriesCache, load_cached};
use crate::domain::TimeRange;
use crate::utils::Clock;

use super::state::DashboardView;

/// Runtime knobs, seeded from the compile-time config and overridden by the CLI.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub ticker: String,
    pub time_zone: Tz,
    pub sma_window: usize,
    pub weekend_policy: WeekendPolicy,
    /// Local hour the daily report appears. `None` shows it at any time.
    pub publish_hour: Option<u32>,
    /// Report this date instead of "today"
    pub report_date: Option<NaiveDate>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            ticker: MARKET.ticker.to_string(),
            time_zone: MARKET.time_zone,
            sma_window: ANALYSIS.moving_average.default_window,
            weekend_policy: WeekendPolicy::from_flag(ANALYSIS.daily.weekend_rollback),
            publish_hour: Some(ANALYSIS.daily.publish_hour),
            report_date: None,
        }
    }
}

pub struct DashboardEngine {
    sources: Vec<Box<dyn PriceSource>>,
    clock: Box<dyn Clock>,
    pub settings: EngineSettings,
    cache: SeriesCache,
}

impl DashboardEngine {
    pub fn new(
        sources: Vec<Box<dyn PriceSource>>,
        clock: Box<dyn Clock>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            sources,
            clock,
            settings,
            cache: SeriesCache::default(),
        }
    }

    /// Drop the snapshot so the next refresh re-reads the sources.
    pub fn invalidate(&mut self) {
        self.cache = std::mem::take(&mut self.cache).invalidate();
    }

    /// One dashboard tick: load (through the cache), filter, derive.
    pub async fn refresh(&mut self, range: TimeRange) -> DashboardView {
        let now = self.clock.now();
        let tz = self.settings.time_zone;

        let cache = std::mem::take(&mut self.cache);
        let (series, cache) = load_cached(cache, self.clock.as_ref(), &self.sources).await;
        self.cache = cache;

        let filtered = filter_time_range(&series, range, now, tz);
        let sma = rolling_mean(&filtered.prices(), self.settings.sma_window);
        let range_report = summarize(&filtered);
        let latest = latest_change(&series);

        let daily = match self.settings.report_date {
            Some(date) => daily_report(&series, date, tz, self.settings.weekend_policy),
            None => todays_report(
                &series,
                now,
                tz,
                self.settings.weekend_policy,
                self.settings.publish_hour,
            ),
        };

        log::debug!(
            "Refreshed {} ({}): {} of {} points in range",
            self.settings.ticker,
            range,
            filtered.len(),
            series.len()
        );

        DashboardView {
            ticker: self.settings.ticker.clone(),
            generated_at: now,
            range,
            series: filtered,
            sma,
            sma_window: self.settings.sma_window.max(1),
            range_report,
            latest,
            daily,
        }
    }
}
