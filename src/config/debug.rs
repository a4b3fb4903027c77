//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. All of them are further gated by `cfg(debug_assertions)`.

/// Emit per-file load summaries (rows read, rows dropped, timings).
pub const PRINT_CSV_LOAD: bool = false;

/// Emit every dropped CSV row with the reason it was rejected.
pub const PRINT_DROPPED_ROWS: bool = false;

/// Emit snapshot cache hit/miss diagnostics.
pub const PRINT_CACHE_EVENTS: bool = false;

/// Emit the computed cutoff for every range filter.
pub const PRINT_RANGE_CUTOFFS: bool = false;

/// Emit weekend rollback decisions for the daily report.
pub const PRINT_DAILY_ROLLBACK: bool = false;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_are_off_by_default() {
        assert!(
            ![
                PRINT_CSV_LOAD,
                PRINT_DROPPED_ROWS,
                PRINT_CACHE_EVENTS,
                PRINT_RANGE_CUTOFFS,
                PRINT_DAILY_ROLLBACK,
            ]
            .contains(&true)
        );
    }
}
