use argminmax::ArgMinMax;
use statrs::statistics::Statistics;

/// Largest value of a non-empty slice. Returns 0.0 for an empty slice.
pub fn get_max(vec: &[f64]) -> f64 {
    if vec.is_empty() {
        return 0.0;
    }
    let max_index: usize = vec.argmax();
    vec[max_index]
}

/// Smallest value of a non-empty slice. Returns 0.0 for an empty slice.
pub fn get_min(vec: &[f64]) -> f64 {
    if vec.is_empty() {
        return 0.0;
    }
    let min_index: usize = vec.argmin();
    vec[min_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    (get_min(vec), get_max(vec))
}

/// Arithmetic mean. 0.0 for an empty slice (statrs would give NaN).
pub fn mean(vec: &[f64]) -> f64 {
    if vec.is_empty() {
        return 0.0;
    }
    vec.mean()
}

/// `numerator / denominator * 100`, or 0.0 when the denominator is zero
/// (or the result would not be finite).
pub fn safe_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let pct = numerator / denominator * 100.0;
    if pct.is_finite() { pct } else { 0.0 }
}

/// Percentage move from `from` to `to`.
pub fn pct_change(from: f64, to: f64) -> f64 {
    safe_pct(to - from, from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_mean() {
        let prices = [10.0, 12.0, 8.0];
        assert_eq!(get_min_max(&prices), (8.0, 12.0));
        assert!((mean(&prices) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn empty_slices_are_zero() {
        assert_eq!(get_min_max(&[]), (0.0, 0.0));
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn pct_guards_divide_by_zero() {
        assert_eq!(safe_pct(5.0, 0.0), 0.0);
        assert_eq!(pct_change(0.0, 10.0), 0.0);
        assert!((pct_change(10.0, 8.0) + 20.0).abs() < 1e-12);
    }
}
