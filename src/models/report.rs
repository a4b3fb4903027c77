use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Summary statistics over a sub-range of a price series.
///
/// Volatility here is the high/low spread relative to the mean, not a
/// standard deviation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub open: f64,
    pub close: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// (max - min) / mean * 100
    pub volatility_pct: f64,
    /// (close - open) / open * 100
    pub change_pct: f64,
    pub samples: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Open: ${:.2}, Close: ${:.2}, Low: ${:.2}, High: ${:.2}, Volatility: {:.2}%, Change: {:+.2}%",
            self.open, self.close, self.min, self.max, self.volatility_pct, self.change_pct
        )
    }
}

/// Most recent observation and its move against the one before it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatestPrice {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub change_pct: f64,
}

impl fmt::Display for LatestPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2} ({:+.2}%)", self.price, self.change_pct)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DailyReport {
    /// The date that was asked for
    pub requested_date: NaiveDate,
    /// The date whose data is summarised (earlier than requested after a weekend rollback)
    pub reported_date: NaiveDate,
    pub report: Report,
    /// Set when the requested date was a closed-market day and an earlier one was used
    pub market_closed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum DailyOutcome {
    Ready(DailyReport),
    NoDataForDate(NaiveDate),
    NoData,
    NotYetPublished { publish_at: DateTime<Utc> },
}

impl DailyOutcome {
    pub fn report(&self) -> Option<&DailyReport> {
        match self {
            DailyOutcome::Ready(daily) => Some(daily),
            _ => None,
        }
    }
}

impl fmt::Display for DailyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DailyOutcome::Ready(daily) => {
                write!(f, "DAILY REPORT {}: {}", daily.reported_date, daily.report)?;
                if daily.market_closed {
                    write!(
                        f,
                        " (market closed on {}, showing last trading day)",
                        daily.requested_date
                    )?;
                }
                Ok(())
            }
            DailyOutcome::NoDataForDate(date) => write!(f, "No data for {}.", date),
            DailyOutcome::NoData => write!(f, "No data available for the daily report."),
            DailyOutcome::NotYetPublished { publish_at } => {
                write!(f, "Daily report not published yet (due {}).", publish_at.to_rfc3339())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            open: 10.0,
            close: 8.0,
            min: 8.0,
            max: 12.0,
            mean: 10.0,
            volatility_pct: 40.0,
            change_pct: -20.0,
            samples: 3,
        }
    }

    #[test]
    fn report_text() {
        assert_eq!(
            sample().to_string(),
            "Open: $10.00, Close: $8.00, Low: $8.00, High: $12.00, Volatility: 40.00%, Change: -20.00%"
        );
    }

    #[test]
    fn closed_market_annotation() {
        let outcome = DailyOutcome::Ready(DailyReport {
            requested_date: NaiveDate::from_ymd_opt(2025, 4, 5).unwrap(),
            reported_date: NaiveDate::from_ymd_opt(2025, 4, 4).unwrap(),
            report: sample(),
            market_closed: true,
        });
        let text = outcome.to_string();
        assert!(text.starts_with("DAILY REPORT 2025-04-04:"));
        assert!(text.contains("market closed on 2025-04-05"));
        assert!(outcome.report().is_some());
        assert!(DailyOutcome::NoData.report().is_none());
    }
}
