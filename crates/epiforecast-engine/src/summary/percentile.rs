//! Percentiles by linear interpolation between order statistics.
//!
//! For `n` sorted values and percentile `p`, the rank is
//! `p / 100 * (n - 1)`; the result interpolates between the two
//! neighbouring order statistics. The median is `p = 50` under the same rule.

/// Percentile `p` (0-100) of an ascending slice. Returns `None` when the
/// slice is empty or `p` is not finite.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if !p.is_finite() {
        return None;
    }
    let last = sorted.len().checked_sub(1)?;
    let rank = (p.clamp(0.0, 100.0) / 100.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    let value = sorted[lo] + (sorted[hi] - sorted[lo]) * frac;
    // keep rounding from escaping the bracketing order statistics
    Some(value.min(sorted[hi]).max(sorted[lo]))
}

/// Ascending copy of `values` using the IEEE total order.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
