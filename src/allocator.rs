//! One allocation run: roster + gallery counts in, member groups out.
//!
//! The [`Allocator`] glues the pieces together in the order a run needs:
//! check the counts against the configured galleries, shuffle the roster
//! with the caller's RNG, compute target shares, and deal the shuffled
//! roster into groups.
//!
//! # Examples
//! ```
//! use gallery_quota::{random::create_rng, Allocator, Roster};
//!
//! let roster = Roster::from_inputs(["Ana", "Bia", "Caio", "Duda", "Enzo"]).unwrap();
//! let allocation = Allocator::new()
//!     .allocate(&roster, &[12, 3, 0, 9], &mut create_rng(1))
//!     .unwrap();
//!
//! assert_eq!(allocation.len(), 4);
//! assert!(allocation.section(2).unwrap().is_empty());
//! assert_eq!(allocation.sizes().iter().sum::<usize>(), 5);
//! ```

use std::fmt;

use rand::Rng;
use tracing::{debug, trace};

use crate::config::AllocationConfig;
use crate::error::{AllocationError, Result};
use crate::quota::distribute_team_members;
use crate::random::shuffled;
use crate::roster::Roster;
use crate::targets::calculate_target_percentages_with;

/// Runs allocations under a fixed configuration.
///
/// Holds no state between runs; each call to [`allocate`](Self::allocate)
/// draws its own permutation from the RNG it is given.
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    config: AllocationConfig,
}

impl Allocator {
    /// Allocator with the default four galleries and floor table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator with a custom configuration.
    ///
    /// # Errors
    /// [`AllocationError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(config: AllocationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Allocates `roster` across galleries holding `item_counts` items.
    ///
    /// # Errors
    /// [`AllocationError::SectionCountMismatch`] if `item_counts` does not
    /// have one entry per configured gallery.
    pub fn allocate<R: Rng>(
        &self,
        roster: &Roster,
        item_counts: &[u64],
        rng: &mut R,
    ) -> Result<Allocation> {
        if item_counts.len() != self.config.sections {
            return Err(AllocationError::SectionCountMismatch {
                expected: self.config.sections,
                actual: item_counts.len(),
            });
        }

        let targets =
            calculate_target_percentages_with(item_counts, &self.config.floors, self.config.tolerance);
        trace!(?item_counts, ?targets, "computed gallery targets");

        let order = shuffled(roster.names(), rng);
        let groups = distribute_team_members(order, &targets);

        let allocation = Allocation { groups };
        debug!(
            members = roster.len(),
            sizes = ?allocation.sizes(),
            "allocated team across galleries"
        );
        Ok(allocation)
    }
}

/// Members assigned to each gallery, in gallery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    groups: Vec<Vec<String>>,
}

impl Allocation {
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// Members of gallery `index` (0-based), or `None` if out of range.
    pub fn section(&self, index: usize) -> Option<&[String]> {
        self.groups.get(index).map(Vec::as_slice)
    }

    /// Number of galleries.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Member count per gallery.
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    pub fn into_groups(self) -> Vec<Vec<String>> {
        self.groups
    }
}

/// Plain-text listing, one gallery per line, numbered from 1.
///
/// ```text
/// Gallery 1: Bia – Ana
/// Gallery 2: (none)
/// ```
impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, members) in self.groups.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Gallery {}: ", i + 1)?;
            if members.is_empty() {
                write!(f, "(none)")?;
            } else {
                write!(f, "{}", members.join(" – "))?;
            }
        }
        Ok(())
    }
}
