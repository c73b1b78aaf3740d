//! Allocation configuration.
//!
//! Holds the number of galleries, the minimum-share floor bands and the
//! floating-point tolerance shared by the targeter. Every field has a
//! default, so a partial JSON document only overrides what it names.
//!
//! # Examples
//! ```
//! use gallery_quota::config::AllocationConfig;
//! let cfg = AllocationConfig::from_json_str(r#"{ "sections": 6 }"#).unwrap();
//! assert_eq!(cfg.sections, 6);
//! assert_eq!(cfg.floors.floor_for(2), 0.40);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AllocationError, Result};

/// Default number of galleries.
pub const DEFAULT_SECTIONS: usize = 4;

/// Default tolerance for "sums to one" and "surplus is zero" checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Minimum target share for each active section, indexed by how many
/// sections are active.
///
/// Band `i` applies when `i + 1` sections are active. Fewer active
/// sections get a larger guaranteed share, up to 100% for a single one.
/// Outside the table no minimum is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorTable {
    bands: Vec<f64>,
}

impl FloorTable {
    /// Builds a table from explicit bands (`bands[0]` is the floor for
    /// one active section).
    pub fn new(bands: Vec<f64>) -> Self {
        Self { bands }
    }

    /// Returns the floor for `active` sections, or `0.0` when the table
    /// has no band for that count.
    ///
    /// ```
    /// use gallery_quota::config::FloorTable;
    /// let table = FloorTable::default();
    /// assert_eq!(table.floor_for(1), 1.00);
    /// assert_eq!(table.floor_for(4), 0.22);
    /// assert_eq!(table.floor_for(5), 0.0);
    /// ```
    pub fn floor_for(&self, active: usize) -> f64 {
        active
            .checked_sub(1)
            .and_then(|i| self.bands.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn bands(&self) -> &[f64] {
        &self.bands
    }
}

impl Default for FloorTable {
    fn default() -> Self {
        Self::new(vec![1.00, 0.40, 0.27, 0.22])
    }
}

/// Settings for a run of the [`Allocator`](crate::allocator::Allocator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Number of galleries receiving members.
    pub sections: usize,
    /// Minimum-share floor bands.
    pub floors: FloorTable,
    /// Tolerance for the "sums to one" and "surplus is zero" checks.
    pub tolerance: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTIONS,
            floors: FloorTable::default(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl AllocationConfig {
    /// Parses a JSON document and validates the result.
    ///
    /// # Errors
    /// [`AllocationError::ConfigParse`] on malformed JSON,
    /// [`AllocationError::InvalidConfig`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that the configuration can produce a valid allocation.
    ///
    /// Rejects zero sections, non-positive tolerance, floors outside
    /// `[0, 1]`, and any band whose floor cannot be granted to every
    /// active section at once (`floor × k > 1`).
    pub fn validate(&self) -> Result<()> {
        if self.sections == 0 {
            return Err(AllocationError::InvalidConfig(
                "sections must be at least 1".into(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(AllocationError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        for (i, &floor) in self.floors.bands().iter().enumerate() {
            let active = i + 1;
            if !(0.0..=1.0).contains(&floor) {
                return Err(AllocationError::InvalidConfig(format!(
                    "floor for {active} active sections must lie in [0, 1], got {floor}"
                )));
            }
            if floor * active as f64 > 1.0 + self.tolerance {
                return Err(AllocationError::InvalidConfig(format!(
                    "floor {floor} cannot be granted to {active} active sections"
                )));
            }
        }
        Ok(())
    }
}
