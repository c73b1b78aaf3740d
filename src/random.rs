//! Random permutation of the roster.
//!
//! The only nondeterminism in an allocation is the order members are
//! dealt out, drawn once per run by a uniform Fisher-Yates shuffle.
//! Everything downstream is deterministic in the shuffled order.
//!
//! # Reproducibility
//!
//! For reproducible runs, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use gallery_quota::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely, so no member keeps a bias toward their input
/// position.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use gallery_quota::random::{create_rng, shuffle};
/// let mut names = vec!["Ana", "Bia", "Caio", "Duda"];
/// let mut rng = create_rng(42);
/// shuffle(&mut names, &mut rng);
/// names.sort();
/// assert_eq!(names, vec!["Ana", "Bia", "Caio", "Duda"]);
/// ```
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
///
/// # Examples
/// ```
/// use gallery_quota::random::{create_rng, shuffled};
/// let roster = ["Ana", "Bia", "Caio"];
/// let mut rng = create_rng(7);
/// let order = shuffled(&roster, &mut rng);
/// assert_eq!(order.len(), 3);
/// assert_eq!(roster, ["Ana", "Bia", "Caio"]);
/// ```
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, rng);
    out
}

// ============================================================================
// Tests
// ============================================================================
