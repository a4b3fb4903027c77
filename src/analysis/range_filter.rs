use chrono::{DateTime, Utc};
use chrono_tz::Tz;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_RANGE_CUTOFFS;
use crate::domain::TimeRange;
use crate::models::PriceSeries;

/// Points stamped within `[start, end]`, both ends inclusive.
///
/// An empty series or an inverted range gives an empty result.
pub fn filter_range(series: &PriceSeries, start: DateTime<Utc>, end: DateTime<Utc>) -> PriceSeries {
    if start > end {
        return PriceSeries::default();
    }
    series.slice(series.lower_bound(start), series.upper_bound(end))
}

/// Points stamped at or after `cutoff`. `None` keeps the whole series.
pub fn filter_since(series: &PriceSeries, cutoff: Option<DateTime<Utc>>) -> PriceSeries {
    match cutoff {
        Some(cutoff) => series.slice(series.lower_bound(cutoff), series.len()),
        None => series.clone(),
    }
}

/// Resolve `range` against `now` in `tz` and keep what falls after the cutoff.
pub fn filter_time_range(
    series: &PriceSeries,
    range: TimeRange,
    now: DateTime<Utc>,
    tz: Tz,
) -> PriceSeries {
    let cutoff = range.cutoff(now, tz);

    #[cfg(debug_assertions)]
    if PRINT_RANGE_CUTOFFS {
        log::info!("Range {} resolved to cutoff {:?}", range, cutoff);
    }

    filter_since(series, cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use chrono::{Duration, TimeZone};
    use chrono_tz::Europe::Paris;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 4, 14, 0, 0).unwrap()
    }

    fn series_every_5_min(n: i64) -> PriceSeries {
        (0..n)
            .map(|i| PricePoint::new(base() + Duration::minutes(5 * i), 100.0 + i as f64))
            .collect()
    }

    #[test]
    fn bounds_are_inclusive() {
        let series = series_every_5_min(6);
        let out = filter_range(&series, base() + Duration::minutes(5), base() + Duration::minutes(15));
        assert_eq!(out.prices(), vec![101.0, 102.0, 103.0]);
    }

    #[test]
    fn empty_and_inverted_ranges() {
        assert!(filter_range(&PriceSeries::default(), base(), base()).is_empty());
        let series = series_every_5_min(3);
        assert!(filter_range(&series, base() + Duration::hours(1), base()).is_empty());
        assert!(
            filter_range(&series, base() + Duration::days(1), base() + Duration::days(2)).is_empty()
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let series = series_every_5_min(20);
        let (start, end) = (base() + Duration::minutes(12), base() + Duration::minutes(61));
        let once = filter_range(&series, start, end);
        let twice = filter_range(&once, start, end);
        assert_eq!(once, twice);
    }

    #[test]
    fn last_ten_minutes() {
        let series = series_every_5_min(12); // 14:00 .. 14:55
        let now = base() + Duration::minutes(55);
        let out = filter_time_range(&series, TimeRange::Minutes(10), now, Paris);
        assert_eq!(out.prices(), vec![109.0, 110.0, 111.0]);
        assert_eq!(filter_time_range(&series, TimeRange::All, now, Paris).len(), 12);
    }

    #[test]
    fn range_longer_than_the_calendar_keeps_everything() {
        let series = series_every_5_min(12);
        let range: TimeRange = "20000000w".parse().unwrap();
        assert_eq!(filter_time_range(&series, range, base(), Paris), series);
    }
}
