use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scraped observation: the instant it was taken and the quoted price.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }

    /// Prices must be finite and strictly positive to enter a series.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn validity() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        assert!(PricePoint::new(ts, 101.5).is_valid());
        assert!(!PricePoint::new(ts, 0.0).is_valid());
        assert!(!PricePoint::new(ts, -3.0).is_valid());
        assert!(!PricePoint::new(ts, f64::NAN).is_valid());
        assert!(!PricePoint::new(ts, f64::INFINITY).is_valid());
    }
}
