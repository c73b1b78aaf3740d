//! Error type for the caller-side allocation layer.
//!
//! The two core functions ([`calculate_target_percentages`] and
//! [`distribute_team_members`]) never fail. Errors only arise when
//! assembling a run: cleaning the roster, matching counts to the
//! configured sections, and loading configuration.
//!
//! [`calculate_target_percentages`]: crate::targets::calculate_target_percentages
//! [`distribute_team_members`]: crate::quota::distribute_team_members

use thiserror::Error;

/// Errors raised while preparing or running an allocation.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// The roster has no non-blank member names.
    #[error("at least one team member name is required")]
    EmptyRoster,

    /// The number of item counts does not match the configured sections.
    #[error("expected {expected} section counts, got {actual}")]
    SectionCountMismatch { expected: usize, actual: usize },

    /// Configuration values violate an allocation constraint.
    #[error("invalid allocation config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be decoded.
    #[error("failed to parse allocation config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AllocationError>;
