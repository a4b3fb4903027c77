use crate::models::{LatestPrice, PriceSeries, Report};
use crate::utils::maths_utils::{get_min_max, mean, pct_change, safe_pct};

/// Open/close/extremes over the whole series. `None` when there is no data.
pub fn summarize(series: &PriceSeries) -> Option<Report> {
    let (first, last) = (series.first()?, series.last()?);
    let prices = series.prices();

    let (min, max) = get_min_max(&prices);
    let mean = mean(&prices);

    Some(Report {
        open: first.price,
        close: last.price,
        min,
        max,
        mean,
        volatility_pct: safe_pct(max - min, mean),
        change_pct: pct_change(first.price, last.price),
        samples: prices.len(),
    })
}

/// The newest point and its change against the previous one.
///
/// A single point reports a change of 0; an empty series gives `None`.
pub fn latest_change(series: &PriceSeries) -> Option<LatestPrice> {
    let points = series.points();
    let latest = points.last()?;
    let change_pct = match points.len() {
        0 | 1 => 0.0,
        n => pct_change(points[n - 2].price, latest.price),
    };
    Some(LatestPrice {
        timestamp: latest.timestamp,
        price: latest.price,
        change_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use chrono::{Duration, TimeZone, Utc};

    fn series(prices: &[f64]) -> PriceSeries {
        let start = Utc.with_ymd_and_hms(2025, 4, 3, 15, 30, 0).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PricePoint::new(start + Duration::minutes(5 * i as i64), p))
            .collect()
    }

    #[test]
    fn summarize_three_points() {
        let report = summarize(&series(&[10.0, 12.0, 8.0])).unwrap();
        assert_eq!(report.open, 10.0);
        assert_eq!(report.close, 8.0);
        assert_eq!(report.min, 8.0);
        assert_eq!(report.max, 12.0);
        assert!((report.mean - 10.0).abs() < 1e-12);
        assert!((report.volatility_pct - 40.0).abs() < 1e-9);
        assert!((report.change_pct + 20.0).abs() < 1e-9);
        assert_eq!(report.samples, 3);
    }

    #[test]
    fn summarize_empty_is_no_data() {
        assert!(summarize(&PriceSeries::default()).is_none());
    }

    #[test]
    fn summarize_single_point() {
        let report = summarize(&series(&[50.0])).unwrap();
        assert_eq!(report.open, report.close);
        assert_eq!(report.volatility_pct, 0.0);
        assert_eq!(report.change_pct, 0.0);
    }

    #[test]
    fn latest_change_against_previous_point() {
        let latest = latest_change(&series(&[10.0, 12.0, 9.0])).unwrap();
        assert_eq!(latest.price, 9.0);
        assert!((latest.change_pct + 25.0).abs() < 1e-9);
    }

    #[test]
    fn latest_change_single_point_is_flat() {
        let latest = latest_change(&series(&[77.0])).unwrap();
        assert_eq!(latest.price, 77.0);
        assert_eq!(latest.change_pct, 0.0);
        assert!(latest_change(&PriceSeries::default()).is_none());
    }
}
