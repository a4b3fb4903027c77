//! Simple moving average with an expanding warm-up window.

/// For each index `i`, the mean of the last `min(window, i + 1)` prices ending at `i`.
///
/// This is the usual SMA with a minimum of one period: the first values are
/// averages over however many prices exist so far. A `window` of 0 is treated
/// as 1. Runs in O(n) with a running sum.
pub fn rolling_mean(prices: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut out = Vec::with_capacity(prices.len());
    let mut sum = 0.0;

    for (i, &price) in prices.iter().enumerate() {
        sum += price;
        if i >= window {
            sum -= prices[i - window];
        }
        let count = (i + 1).min(window);
        out.push(sum / count as f64);
    }

    out
}
