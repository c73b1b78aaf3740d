//! # gallery-quota
//!
//! Allocates a team across a fixed set of galleries in proportion to the
//! items each gallery already holds, while guaranteeing every gallery that
//! has items a minimum share of the team.
//!
//! ## Modules
//!
//! - [`targets`]: Item counts to target shares, with minimum-share floors
//! - [`quota`]: Target shares to whole member groups (Largest Remainder Method)
//! - [`random`]: Seeded RNG and uniform Fisher-Yates shuffle
//! - [`roster`]: Trimmed, non-empty member names
//! - [`allocator`]: A full run: validate, shuffle, target, distribute
//! - [`config`]: Gallery count, floor bands and tolerance
//! - [`stats`]: Compensated summation for share arithmetic
//!
//! ## Design Philosophy
//!
//! - **Pure core**: [`calculate_target_percentages`] and
//!   [`distribute_team_members`] are deterministic and never fail
//! - **Explicit randomness**: the shuffle takes a caller-supplied RNG, so
//!   runs are reproducible under a fixed seed
//! - **Property-based testing**: sum-to-one, floor and quota invariants
//!   verified via proptest

pub mod allocator;
pub mod config;
pub mod error;
pub mod quota;
pub mod random;
pub mod roster;
pub mod stats;
pub mod targets;

pub use allocator::{Allocation, Allocator};
pub use config::{AllocationConfig, FloorTable};
pub use error::{AllocationError, Result};
pub use quota::{distribute_team_members, largest_remainder_counts};
pub use roster::Roster;
pub use targets::{calculate_target_percentages, calculate_target_percentages_with};
