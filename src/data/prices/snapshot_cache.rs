use chrono::{DateTime, Duration, Utc};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_CACHE_EVENTS;
use crate::config::ANALYSIS;
use crate::models::PriceSeries;
use crate::utils::Clock;
use crate::utils::time_utils::how_many_seconds_ago;

use super::{PriceSource, load_combined};

/// Last loaded series and when it was loaded.
///
/// Passed into `load_cached` and handed back (possibly refreshed) so the
/// caller owns the only copy of the state.
#[derive(Debug, Clone)]
pub struct SeriesCache {
    snapshot: Option<(PriceSeries, DateTime<Utc>)>,
    ttl: Duration,
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::new(Duration::seconds(ANALYSIS.cache.ttl_secs))
    }
}

impl SeriesCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            snapshot: None,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot.as_ref().map(|(_, at)| *at)
    }

    /// The cached series if it is younger than the TTL at `now`.
    pub fn fresh(&self, now: DateTime<Utc>) -> Option<&PriceSeries> {
        let (series, loaded_at) = self.snapshot.as_ref()?;
        let age = now - *loaded_at;
        (age >= Duration::zero() && age < self.ttl).then_some(series)
    }

    pub fn store(self, series: PriceSeries, now: DateTime<Utc>) -> Self {
        Self {
            snapshot: Some((series, now)),
            ..self
        }
    }

    pub fn invalidate(self) -> Self {
        Self {
            snapshot: None,
            ..self
        }
    }
}

/// Re-use the cached series while it is fresh, otherwise reload every source.
pub async fn load_cached(
    cache: SeriesCache,
    clock: &dyn Clock,
    sources: &[Box<dyn PriceSource>],
) -> (PriceSeries, SeriesCache) {
    let now = clock.now();

    if let Some(series) = cache.fresh(now) {
        #[cfg(debug_assertions)]
        if PRINT_CACHE_EVENTS {
            let age = cache.loaded_at().map(|at| how_many_seconds_ago(at, now));
            log::info!("Cache hit: {} points, {:?}s old", series.len(), age);
        }
        let series = series.clone();
        return (series, cache);
    }

    if let Some(loaded_at) = cache.loaded_at() {
        log::debug!(
            "Cache stale: loaded {}s ago (limit {}s)",
            how_many_seconds_ago(loaded_at, now),
            cache.ttl().num_seconds()
        );
    }

    let series = load_combined(sources).await;

    #[cfg(debug_assertions)]
    if PRINT_CACHE_EVENTS {
        log::info!("Cache refreshed: {} points", series.len());
    }

    let cache = cache.store(series.clone(), now);
    (series, cache)
}
