use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

pub struct TimeUtils;

impl TimeUtils {
    pub const SECS_IN_MIN: i64 = 60;
    pub const SECS_IN_5_MIN: i64 = Self::SECS_IN_MIN * 5;
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

    /// Naive layouts the scraper has written over time. Interpreted as UTC.
    const NAIVE_LAYOUTS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
}

/// Parse a timestamp cell from one of the price files.
///
/// Accepts RFC 3339 (`2025-01-02T00:00:00+00:00`), the space-separated variant
/// pandas writes (`2025-01-02 00:00:00+00:00`), naive date-times (taken as UTC)
/// and bare dates (midnight UTC).
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    for layout in TimeUtils::NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, TimeUtils::STANDARD_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Calendar date of `instant` as seen in the market time zone.
pub fn market_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// The UTC instant of local midnight starting `date` in `tz`.
///
/// Midnight can be skipped or repeated around DST changes in some zones; the
/// earliest valid instant of that local day is used.
pub fn local_midnight(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let naive = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    match tz.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Gap at midnight: step forward one hour into valid local time
        None => tz
            .from_local_datetime(&(naive + chrono::Duration::hours(1)))
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| naive.and_utc()),
    }
}

/// Display helper: `2025-04-04 21:55:00 CEST`.
pub fn format_market_time(instant: DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format(TimeUtils::STANDARD_TIME_FORMAT)
        .to_string()
}

pub fn how_many_seconds_ago(past: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - past).num_seconds()
}
