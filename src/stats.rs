//! Share arithmetic with compensated summation.
//!
//! Target percentages are compared against 1.0 with a tight tolerance,
//! so sums over shares use Neumaier-compensated accumulation rather than
//! a naive fold.

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use gallery_quota::stats::kahan_sum;
/// let shares = [0.1; 10];
/// assert_eq!(kahan_sum(&shares), 1.0);
/// ```
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Scales `values` so they sum to one.
///
/// # Returns
/// - `None` if the sum is zero, negative, or not finite.
///
/// # Examples
/// ```
/// use gallery_quota::stats::proportions;
/// assert_eq!(proportions(&[3.0, 1.0]), Some(vec![0.75, 0.25]));
/// assert_eq!(proportions(&[0.0, 0.0]), None);
/// ```
pub fn proportions(values: &[f64]) -> Option<Vec<f64>> {
    let total = kahan_sum(values);
    if !total.is_finite() || total <= 0.0 {
        return None;
    }
    Some(values.iter().map(|v| v / total).collect())
}

/// Returns `true` if `values` sum to one within `tolerance`.
pub fn sums_to_one(values: &[f64], tolerance: f64) -> bool {
    (kahan_sum(values) - 1.0).abs() <= tolerance
}
