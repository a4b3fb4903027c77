//! End-of-day report
//!
//! Summarises the points of one local calendar day in the market time zone.
//! Optionally rolls a weekend request back to the last day that has data, and
//! is held back until the configured publish hour.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_DAILY_ROLLBACK;
use crate::models::{DailyOutcome, DailyReport, PriceSeries};
use crate::utils::time_utils::{local_midnight, market_date};

use super::summary::summarize;

/// What to do when the requested day has no data and is a weekend day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekendPolicy {
    /// Report "no data" for that day.
    #[default]
    Strict,
    /// Report the most recent earlier day with data, flagged as market closed.
    RollBack,
}

impl WeekendPolicy {
    pub fn from_flag(roll_back: bool) -> Self {
        if roll_back {
            WeekendPolicy::RollBack
        } else {
            WeekendPolicy::Strict
        }
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Points of the local day `date`, i.e. stamped in `[midnight, next midnight)`.
pub fn points_on_date(series: &PriceSeries, date: NaiveDate, tz: Tz) -> PriceSeries {
    let start = series.lower_bound(local_midnight(date, tz));
    let end = match date.succ_opt() {
        Some(next) => series.lower_bound(local_midnight(next, tz)),
        None => series.len(),
    };
    series.slice(start, end)
}

/// Most recent local date strictly before `date` that has at least one point.
fn previous_date_with_data(series: &PriceSeries, date: NaiveDate, tz: Tz) -> Option<NaiveDate> {
    let idx = series.lower_bound(local_midnight(date, tz));
    let previous = series.points().get(idx.checked_sub(1)?)?;
    Some(market_date(previous.timestamp, tz))
}

pub fn daily_report(
    series: &PriceSeries,
    date: NaiveDate,
    tz: Tz,
    policy: WeekendPolicy,
) -> DailyOutcome {
    if series.is_empty() {
        return DailyOutcome::NoData;
    }

    if let Some(report) = summarize(&points_on_date(series, date, tz)) {
        return DailyOutcome::Ready(DailyReport {
            requested_date: date,
            reported_date: date,
            report,
            market_closed: false,
        });
    }

    if policy == WeekendPolicy::Strict || !is_weekend(date) {
        return DailyOutcome::NoDataForDate(date);
    }

    let Some(prior) = previous_date_with_data(series, date, tz) else {
        return DailyOutcome::NoDataForDate(date);
    };

    #[cfg(debug_assertions)]
    if PRINT_DAILY_ROLLBACK {
        log::info!("Market closed on {} ({}), reporting {} instead", date, date.weekday(), prior);
    }

    match summarize(&points_on_date(series, prior, tz)) {
        Some(report) => DailyOutcome::Ready(DailyReport {
            requested_date: date,
            reported_date: prior,
            report,
            market_closed: true,
        }),
        None => DailyOutcome::NoDataForDate(date),
    }
}

/// The instant the daily report for the local day containing `now` becomes visible.
pub fn publish_time(now: DateTime<Utc>, tz: Tz, publish_hour: u32) -> DateTime<Utc> {
    let today = market_date(now, tz);
    today
        .and_hms_opt(publish_hour.min(23), 0, 0)
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| local_midnight(today, tz) + Duration::hours(i64::from(publish_hour)))
}

/// Daily report for "today" in `tz`, withheld until `publish_hour` local time.
/// `publish_hour: None` disables the gate.
pub fn todays_report(
    series: &PriceSeries,
    now: DateTime<Utc>,
    tz: Tz,
    policy: WeekendPolicy,
    publish_hour: Option<u32>,
) -> DailyOutcome {
    if let Some(hour) = publish_hour {
        let publish_at = publish_time(now, tz, hour);
        if now < publish_at {
            return DailyOutcome::NotYetPublished { publish_at };
        }
    }
    daily_report(series, market_date(now, tz), tz, policy)
}
