//! Planner configuration.
//!
//! Typically loaded from a TOML file by the application crate (with the
//! `serde` feature) and passed to the planner.  Every field has a default so
//! a config file only needs to mention what it overrides.

use crate::{MapfError, MapfResult};

/// Default per-agent expansion budget.
pub const DEFAULT_MAX_EXPANSIONS: usize = 1_000_000;

/// Search limits and semantic options for one planning run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Latest step a search may reach.  `None` derives a horizon from the
    /// grid and the reservation table: latest committed step plus twice the
    /// number of free cells.
    pub max_steps: Option<u32>,

    /// Maximum node expansions per agent.  `None` is unbounded (the step
    /// horizon still terminates the search).
    pub max_expansions: Option<usize>,

    /// Allow the self-transition `(p, t) → (p, t + 1)` at unit cost.  Off
    /// reproduces the move-every-step behaviour.
    pub allow_wait: bool,

    /// Reject moves that swap cells with a committed agent between two
    /// consecutive steps (edge conflicts).
    pub prevent_swaps: bool,

    /// Committed agents keep their goal cell for every step after arrival,
    /// and a later agent may only finish on a cell no committed agent
    /// passes through afterwards.
    pub park_at_goal: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_steps:      None,
            max_expansions: Some(DEFAULT_MAX_EXPANSIONS),
            allow_wait:     false,
            prevent_swaps:  true,
            park_at_goal:   false,
        }
    }
}

impl PlannerConfig {
    /// Move every step, ignore swaps, release goal cells on arrival.
    pub fn reference() -> Self {
        Self { prevent_swaps: false, ..Self::default() }
    }

    /// Reject limits that would make every search fail immediately.
    pub fn validate(&self) -> MapfResult<()> {
        if self.max_steps == Some(0) {
            return Err(MapfError::Config("max_steps must be at least 1".into()));
        }
        if self.max_expansions == Some(0) {
            return Err(MapfError::Config("max_expansions must be at least 1".into()));
        }
        Ok(())
    }
}
