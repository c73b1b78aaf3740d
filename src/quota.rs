//! Integer quotas by the Largest Remainder Method.
//!
//! Turns target shares into whole member counts that add up to the team
//! size, then deals an already-shuffled roster into consecutive groups.
//!
//! # Algorithm
//!
//! Hare quota with largest-remainder top-up:
//!
//! 1. Quota `q[i] = target[i] × M`, base count `a[i] = ⌊q[i]⌋`.
//! 2. The `M − Σa` leftover members go one each to the sections with the
//!    largest fractional remainders `q[i] − a[i]`.
//! 3. Ties between equal remainders go to the lower section index.
//!
//! When targets sum to one, every count is within one of its quota.
//!
//! Reference: Hamilton's method, see Balinski & Young (2001),
//! *Fair Representation*, ch. 2.
//!
//! # Degenerate targets
//!
//! Negative or NaN shares count as zero. If targets sum well below one the
//! top-up wraps around the ranking so every member is still placed; if they
//! sum above one, later sections come up short once the roster runs out.

use tracing::warn;

/// Computes per-section member counts for `total` members.
///
/// # Complexity
/// Time: O(n log n + total), Space: O(n)
///
/// # Examples
/// ```
/// use gallery_quota::quota::largest_remainder_counts;
/// assert_eq!(largest_remainder_counts(10, &[0.6, 0.4, 0.0, 0.0]), vec![6, 4, 0, 0]);
/// assert_eq!(largest_remainder_counts(7, &[0.5, 0.5]), vec![4, 3]);
/// ```
pub fn largest_remainder_counts(total: usize, targets: &[f64]) -> Vec<usize> {
    let n = targets.len();
    if total == 0 || n == 0 {
        return vec![0; n];
    }

    let m = total as f64;
    let quotas: Vec<f64> = targets.iter().map(|&t| (t * m).max(0.0).min(m)).collect();
    let mut counts: Vec<usize> = quotas.iter().map(|q| q.floor() as usize).collect();
    let remainders: Vec<f64> = quotas
        .iter()
        .zip(&counts)
        .map(|(&q, &a)| q - a as f64)
        .collect();

    let assigned: usize = counts.iter().sum();
    let remaining = total.saturating_sub(assigned);
    if assigned > total {
        warn!(total, assigned, "targets exceed the roster; later sections will be short");
    }
    if remaining > n {
        warn!(total, remaining, sections = n, "targets sum below one; wrapping top-up");
    }

    // sort_by is stable, so equal remainders keep index order.
    let mut ranking: Vec<usize> = (0..n).collect();
    ranking.sort_by(|&a, &b| remainders[b].total_cmp(&remainders[a]));

    for &i in ranking.iter().cycle().take(remaining) {
        counts[i] += 1;
    }
    counts
}

/// Deals a pre-shuffled roster into one group per section.
///
/// Section `i` receives the next `counts[i]` members in shuffled order,
/// where counts come from [`largest_remainder_counts`]. The caller is
/// responsible for shuffling; this function is deterministic.
///
/// # Returns
/// Exactly `targets.len()` groups, in section order. An empty roster
/// yields all-empty groups.
///
/// # Examples
/// ```
/// use gallery_quota::quota::distribute_team_members;
/// let shuffled = vec!["e", "a", "g", "c", "b", "f", "d"];
/// let groups = distribute_team_members(shuffled, &[0.5, 0.5]);
/// assert_eq!(groups, vec![vec!["e", "a", "g", "c"], vec!["b", "f", "d"]]);
/// ```
pub fn distribute_team_members<T>(shuffled: Vec<T>, targets: &[f64]) -> Vec<Vec<T>> {
    let counts = largest_remainder_counts(shuffled.len(), targets);
    if targets.is_empty() && !shuffled.is_empty() {
        warn!(members = shuffled.len(), "no sections to distribute into");
    }

    let mut members = shuffled.into_iter();
    counts
        .iter()
        .map(|&count| members.by_ref().take(count).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("m{i}")).collect()
    }

    fn sizes<T>(groups: &[Vec<T>]) -> Vec<usize> {
        groups.iter().map(Vec::len).collect()
    }

    #[test]
    fn test_exact_quotas_need_no_topup() {
        let groups = distribute_team_members(names(10), &[0.60, 0.40, 0.0, 0.0]);
        assert_eq!(sizes(&groups), vec![6, 4, 0, 0]);
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        let groups = distribute_team_members(names(7), &[0.5, 0.5]);
        assert_eq!(sizes(&groups), vec![4, 3]);
    }

    #[test]
    fn test_largest_remainder_wins() {
        // Quotas [3.3, 3.3, 3.4]: the single leftover goes to index 2.
        assert_eq!(largest_remainder_counts(10, &[0.33, 0.33, 0.34]), vec![3, 3, 4]);
    }

    #[test]
    fn test_multiple_leftovers_follow_ranking() {
        // Quotas [1.4, 1.8, 1.2, 0.6]: leftovers go to indices 1 and 3.
        assert_eq!(
            largest_remainder_counts(5, &[0.28, 0.36, 0.24, 0.12]),
            vec![1, 2, 1, 1]
        );
    }

    #[test]
    fn test_quota_just_below_integer() {
        // 0.6 from the targeter comes out as 0.5999999999999999.
        let t = [0.5999999999999999, 0.4, 0.0, 0.0];
        assert_eq!(largest_remainder_counts(10, &t), vec![6, 4, 0, 0]);
    }

    #[test]
    fn test_groups_preserve_shuffled_order() {
        let shuffled = vec!["d", "b", "a", "e", "c"];
        let groups = distribute_team_members(shuffled, &[0.4, 0.0, 0.6]);
        assert_eq!(groups, vec![vec!["d", "b"], vec![], vec!["a", "e", "c"]]);
    }

    #[test]
    fn test_empty_roster() {
        let groups: Vec<Vec<String>> = distribute_team_members(vec![], &[0.25; 4]);
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_no_sections() {
        let groups = distribute_team_members(names(3), &[]);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_all_zero_targets_still_place_everyone() {
        assert_eq!(largest_remainder_counts(5, &[0.0; 4]), vec![2, 1, 1, 1]);
    }

    #[test]
    fn test_targets_below_one_wrap_topup() {
        assert_eq!(largest_remainder_counts(10, &[0.3, 0.3]), vec![5, 5]);
    }

    #[test]
    fn test_targets_above_one_run_short() {
        let groups = distribute_team_members(names(10), &[0.8, 0.8]);
        assert_eq!(sizes(&groups), vec![8, 2]);
    }

    #[test]
    fn test_negative_and_nan_targets_count_as_zero() {
        assert_eq!(largest_remainder_counts(4, &[-0.5, f64::NAN, 1.0]), vec![0, 0, 4]);
    }

    #[test]
    fn test_single_member() {
        let groups = distribute_team_members(vec!["solo"], &[0.3, 0.7]);
        assert_eq!(groups, vec![vec![], vec!["solo"]]);
    }
}
