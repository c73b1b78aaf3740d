//! Percentage targets per gallery.
//!
//! Converts raw per-gallery item counts into target shares of the team.
//! Shares follow each gallery's fraction of the total items, except that
//! every active gallery (one with items) is guaranteed a minimum share
//! that depends on how many galleries are active.
//!
//! # Algorithm
//!
//! 1. Raw share = count / total over active galleries.
//! 2. Shares strictly below the floor are raised to it; the sum of those
//!    raises is the *deficit*.
//! 3. The deficit is taken from the remaining galleries in proportion to
//!    their *surplus* over the floor, never pushing one below the floor.
//! 4. Shares are renormalized if they drifted from 1 by more than the
//!    tolerance, then scattered back to their original positions.
//!
//! Inactive galleries always get exactly `0.0`.

use tracing::debug;

use crate::config::{FloorTable, DEFAULT_TOLERANCE};
use crate::stats::{kahan_sum, proportions};

/// Computes target shares using the default floor table and tolerance.
///
/// # Returns
/// A vector the same length as `item_counts`. Entries are `0.0` exactly
/// where the count is zero; the rest sum to 1 within `1e-9`. If every
/// count is zero the result is all zeros.
///
/// # Examples
/// ```
/// use gallery_quota::targets::calculate_target_percentages;
/// let t = calculate_target_percentages(&[95, 5, 0, 0]);
/// assert!((t[0] - 0.60).abs() < 1e-12);
/// assert!((t[1] - 0.40).abs() < 1e-12);
/// assert_eq!(&t[2..], &[0.0, 0.0]);
/// ```
pub fn calculate_target_percentages(item_counts: &[u64]) -> Vec<f64> {
    calculate_target_percentages_with(item_counts, &FloorTable::default(), DEFAULT_TOLERANCE)
}

/// Computes target shares against an explicit floor table and tolerance.
///
/// See the [module docs](self) for the algorithm.
///
/// # Complexity
/// Time: O(n), Space: O(n)
pub fn calculate_target_percentages_with(
    item_counts: &[u64],
    floors: &FloorTable,
    tolerance: f64,
) -> Vec<f64> {
    let mut targets = vec![0.0; item_counts.len()];

    let active: Vec<usize> = item_counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(i, _)| i)
        .collect();
    if active.is_empty() {
        return targets;
    }

    let floor = floors.floor_for(active.len());
    let counts: Vec<f64> = active.iter().map(|&i| item_counts[i] as f64).collect();
    let Some(raw) = proportions(&counts) else {
        return targets;
    };

    let mut adjusted = raw.clone();
    let mut raised = vec![false; raw.len()];
    let mut deficit = 0.0;
    for (i, share) in adjusted.iter_mut().enumerate() {
        if *share < floor {
            deficit += floor - *share;
            *share = floor;
            raised[i] = true;
        }
    }

    if deficit > 0.0 {
        let surplus: Vec<f64> = raw
            .iter()
            .zip(&raised)
            .map(|(&r, &was_raised)| if was_raised { 0.0 } else { (r - floor).max(0.0) })
            .collect();
        let surplus_mass = kahan_sum(&surplus);

        if surplus_mass > tolerance {
            for ((share, &s), &was_raised) in adjusted.iter_mut().zip(&surplus).zip(&raised) {
                if was_raised {
                    continue;
                }
                *share = (*share - deficit * (s / surplus_mass)).max(floor);
            }
            debug!(floor, deficit, surplus_mass, "funded floor deficit from surplus");
        } else {
            debug!(floor, deficit, "no surplus to fund floor deficit");
        }
    }

    let sum = kahan_sum(&adjusted);
    if (sum - 1.0).abs() > tolerance && sum > 0.0 {
        debug!(sum, "renormalizing target shares");
        for share in &mut adjusted {
            *share /= sum;
        }
    }

    for (&index, share) in active.iter().zip(adjusted) {
        targets[index] = share;
    }
    targets
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn targets_sum_to_one(counts in proptest::collection::vec(0_u64..10_000, 1..8)) {
            prop_assume!(counts.iter().any(|&c| c > 0));
            let t = calculate_target_percentages(&counts);
            let sum = kahan_sum(&t);
            prop_assert!((sum - 1.0).abs() <= 1e-9, "sum = {}", sum);
        }

        #[test]
        fn zero_exactly_where_count_is_zero(
            counts in proptest::collection::vec(0_u64..10_000, 1..8),
        ) {
            let t = calculate_target_percentages(&counts);
            let any_active = counts.iter().any(|&c| c > 0);
            for (&c, &share) in counts.iter().zip(&t) {
                prop_assert!(share >= 0.0);
                if c == 0 {
                    prop_assert_eq!(share, 0.0);
                } else {
                    prop_assert!(any_active && share > 0.0);
                }
            }
        }

        #[test]
        fn active_shares_respect_floor(counts in proptest::collection::vec(0_u64..10_000, 4)) {
            let active = counts.iter().filter(|&&c| c > 0).count();
            prop_assume!(active > 0);
            let floor = FloorTable::default().floor_for(active);
            let t = calculate_target_percentages(&counts);
            for (&c, &share) in counts.iter().zip(&t) {
                if c > 0 {
                    prop_assert!(share >= floor - 1e-9, "share {} below floor {}", share, floor);
                }
            }
        }
    }
}
