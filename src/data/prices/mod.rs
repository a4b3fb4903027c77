pub mod csv_version;
pub mod snapshot_cache;

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::{HISTORICAL_PRICES_FILENAME, PERSISTENCE, RECENT_PRICES_FILENAME};
use crate::domain::PricePoint;
use crate::models::PriceSeries;

pub use csv_version::CsvVersion;
pub use snapshot_cache::{SeriesCache, load_cached};

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Raw rows in file order. A source with nothing to offer returns an empty vec.
    async fn load_points(&self) -> Result<Vec<PricePoint>>;

    /// A unique identifier for this implementation (for logs).
    fn signature(&self) -> &'static str;
}

/// Read every source in order and build one series from all of their rows.
///
/// Rows from earlier sources come first among equal timestamps. A failing
/// source is logged and skipped so one unreadable file never hides the other.
pub async fn load_combined(sources: &[Box<dyn PriceSource>]) -> PriceSeries {
    let mut rows: Vec<PricePoint> = Vec::new();
    for source in sources {
        match source.load_points().await {
            Ok(points) => {
                log::debug!("{}: {} rows", source.signature(), points.len());
                rows.extend(points);
            }
            Err(e) => {
                log::warn!("⚠️  Skipping {}: {:#}", source.signature(), e);
            }
        }
    }

    let (series, dropped) = PriceSeries::from_points_counted(rows);
    if dropped > 0 {
        log::debug!("Dropped {} rows with non-positive or non-finite prices", dropped);
    }
    series
}

/// The historical + recent file pair the scraper maintains inside `data_dir`.
pub fn default_sources(data_dir: &Path) -> Vec<Box<dyn PriceSource>> {
    vec![
        Box::new(CsvVersion::new(
            "Historical CSV",
            data_dir.join(HISTORICAL_PRICES_FILENAME),
            PERSISTENCE.historical,
        )),
        Box::new(CsvVersion::new(
            "Recent CSV",
            data_dir.join(RECENT_PRICES_FILENAME),
            PERSISTENCE.recent,
        )),
    ]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::{TimeZone, Utc};

    /// In-memory source for tests.
    pub(crate) struct FixedSource(pub Vec<PricePoint>);

    #[async_trait]
    impl PriceSource for FixedSource {
        async fn load_points(&self) -> Result<Vec<PricePoint>> {
            Ok(self.0.clone())
        }

        fn signature(&self) -> &'static str {
            "Fixed"
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl PriceSource for BrokenSource {
        async fn load_points(&self) -> Result<Vec<PricePoint>> {
            Err(anyhow!("disk on fire"))
        }

        fn signature(&self) -> &'static str {
            "Broken"
        }
    }

    fn at(hour: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 4, hour, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn combines_sources_in_time_order() {
        let sources: Vec<Box<dyn PriceSource>> = vec![
            Box::new(FixedSource(vec![PricePoint::new(at(10), 1.0), PricePoint::new(at(14), 3.0)])),
            Box::new(FixedSource(vec![PricePoint::new(at(12), 2.0), PricePoint::new(at(13), 0.0)])),
        ];
        let series = load_combined(&sources).await;
        assert_eq!(series.prices(), vec![1.0, 2.0, 3.0]);
    }

    #[tokio::test]
    async fn failing_source_is_skipped() {
        let sources: Vec<Box<dyn PriceSource>> = vec![
            Box::new(BrokenSource),
            Box::new(FixedSource(vec![PricePoint::new(at(10), 5.0)])),
        ];
        assert_eq!(load_combined(&sources).await.prices(), vec![5.0]);
    }

    #[tokio::test]
    async fn no_sources_is_empty() {
        assert!(load_combined(&[]).await.is_empty());
    }
}
