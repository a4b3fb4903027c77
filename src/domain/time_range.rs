//! Time-range filter vocabulary
//!
//! A `TimeRange` is resolved into a cutoff instant against "now" in the market
//! time zone. Everything stamped at or after the cutoff is kept.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::time_utils::local_midnight;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    All,
    Years(u32),
    Months(u32),
    Weeks(u32),
    #[default]
    YearToDate,
    Minutes(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRangeError {
    #[error("empty time range")]
    Empty,
    #[error("invalid count in time range '{0}'")]
    InvalidCount(String),
    #[error("time range count must be at least 1, got '{0}'")]
    ZeroCount(String),
    #[error("unknown time range unit in '{0}' (expected y, mo, w or m)")]
    UnknownUnit(String),
}

/// `now - span`, or `None` when the span or the result is out of chrono's range.
fn checked_back(now: DateTime<Utc>, span: Option<Duration>) -> Option<DateTime<Utc>> {
    span.and_then(|span| now.checked_sub_signed(span))
}

impl TimeRange {
    /// Earliest instant kept by this range, or `None` when nothing is cut.
    ///
    /// A count reaching back past the earliest representable instant also
    /// gives `None`: the range then covers everything.
    pub fn cutoff(&self, now: DateTime<Utc>, tz: Tz) -> Option<DateTime<Utc>> {
        let local_now = now.with_timezone(&tz);
        match *self {
            TimeRange::All => None,
            TimeRange::Minutes(n) => checked_back(now, Duration::try_minutes(i64::from(n))),
            TimeRange::Weeks(n) => checked_back(now, Duration::try_weeks(i64::from(n))),
            TimeRange::Months(n) => local_now
                .checked_sub_months(Months::new(n))
                .map(|dt| dt.with_timezone(&Utc))
                .or_else(|| checked_back(now, Duration::try_days(30 * i64::from(n)))),
            TimeRange::Years(n) => local_now
                .checked_sub_months(Months::new(n.saturating_mul(12)))
                .map(|dt| dt.with_timezone(&Utc))
                .or_else(|| checked_back(now, Duration::try_days(365 * i64::from(n)))),
            TimeRange::YearToDate => {
                let jan_first = NaiveDate::from_ymd_opt(local_now.year(), 1, 1)?;
                Some(local_midnight(jan_first, tz))
            }
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::All => write!(f, "all"),
            TimeRange::YearToDate => write!(f, "ytd"),
            TimeRange::Years(n) => write!(f, "{}y", n),
            TimeRange::Months(n) => write!(f, "{}mo", n),
            TimeRange::Weeks(n) => write!(f, "{}w", n),
            TimeRange::Minutes(n) => write!(f, "{}m", n),
        }
    }
}

impl FromStr for TimeRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        match text.as_str() {
            "" => return Err(ParseRangeError::Empty),
            "all" => return Ok(TimeRange::All),
            "ytd" | "year" => return Ok(TimeRange::YearToDate),
            _ => {}
        }

        let split_at = text
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| ParseRangeError::UnknownUnit(s.to_string()))?;
        let (digits, unit) = text.split_at(split_at);
        let count: u32 = digits
            .parse()
            .map_err(|_| ParseRangeError::InvalidCount(s.to_string()))?;
        if count == 0 {
            return Err(ParseRangeError::ZeroCount(s.to_string()));
        }

        match unit {
            "y" => Ok(TimeRange::Years(count)),
            "mo" => Ok(TimeRange::Months(count)),
            "w" => Ok(TimeRange::Weeks(count)),
            "m" | "min" => Ok(TimeRange::Minutes(count)),
            _ => Err(ParseRangeError::UnknownUnit(s.to_string())),
        }
    }
}

/// Entries of the dashboard's range dropdown.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::EnumIter,
)]
pub enum RangePreset {
    LastTenMinutes,
    LastHour,
    #[default]
    YearToDate,
    All,
}

impl RangePreset {
    pub fn label(&self) -> &'static str {
        match self {
            RangePreset::LastTenMinutes => "Last 10 minutes",
            RangePreset::LastHour => "Last hour",
            RangePreset::YearToDate => "Year to date",
            RangePreset::All => "All",
        }
    }

    pub fn range(&self) -> TimeRange {
        match self {
            RangePreset::LastTenMinutes => TimeRange::Minutes(10),
            RangePreset::LastHour => TimeRange::Minutes(60),
            RangePreset::YearToDate => TimeRange::YearToDate,
            RangePreset::All => TimeRange::All,
        }
    }
}
