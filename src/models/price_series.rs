use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::PricePoint;

// ============================================================================
// PriceSeries: validated, time-ordered price observations
// ============================================================================

/// Price observations sorted by timestamp.
///
/// Construction drops rows whose price is not finite and positive, then sorts
/// stably so points sharing a timestamp keep their arrival order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn from_points(points: impl IntoIterator<Item = PricePoint>) -> Self {
        Self::from_points_counted(points).0
    }

    /// Same as `from_points`, also returning how many rows were rejected.
    pub fn from_points_counted(points: impl IntoIterator<Item = PricePoint>) -> (Self, usize) {
        let mut dropped = 0;
        let mut points: Vec<PricePoint> = points
            .into_iter()
            .filter(|p| {
                let keep = p.is_valid();
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();
        // `sort_by_key` is stable: equal timestamps stay in arrival order
        points.sort_by_key(|p| p.timestamp);
        (Self { points }, dropped)
    }

    /// Wrap points already known to be valid and sorted (sub-slices of a series).
    fn from_sorted(points: Vec<PricePoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Index of the first point stamped at or after `instant`.
    pub fn lower_bound(&self, instant: DateTime<Utc>) -> usize {
        self.points.partition_point(|p| p.timestamp < instant)
    }

    /// Index one past the last point stamped at or before `instant`.
    pub fn upper_bound(&self, instant: DateTime<Utc>) -> usize {
        self.points.partition_point(|p| p.timestamp <= instant)
    }

    /// Copy of the points in `[start_idx, end_idx)`. Out-of-range bounds are clamped.
    pub fn slice(&self, start_idx: usize, end_idx: usize) -> PriceSeries {
        let end_idx = end_idx.min(self.points.len());
        if start_idx >= end_idx {
            return PriceSeries::default();
        }
        Self::from_sorted(self.points[start_idx..end_idx].to_vec())
    }

}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        PriceSeries::from_points(iter)
    }
}
