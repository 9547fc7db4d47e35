//! Plain data written by output backends.

use std::collections::BTreeMap;

use mapf_core::{AgentId, PlanningRequest, Position};
use mapf_grid::GridWorld;
use mapf_plan::{AgentOutcome, Path, PlanError};

/// Status string for a planned agent.  Failed agents use
/// [`PlanError::kind`].
pub const STATUS_PLANNED: &str = "planned";

/// One agent's outcome, flattened for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRecord {
    pub agent:  AgentId,
    pub status: &'static str,
    pub start:  Position,
    pub goal:   Position,
    /// `None` marks an unplanned agent.
    pub path:   Option<Vec<Position>>,
}

impl AgentRecord {
    pub fn planned(request: &PlanningRequest, path: &Path) -> Self {
        Self {
            agent:  request.agent,
            status: STATUS_PLANNED,
            start:  request.start,
            goal:   request.goal,
            path:   Some(path.cells().to_vec()),
        }
    }

    pub fn failed(request: &PlanningRequest, error: &PlanError) -> Self {
        Self {
            agent:  request.agent,
            status: error.kind(),
            start:  request.start,
            goal:   request.goal,
            path:   None,
        }
    }

    pub fn from_outcome(outcome: &AgentOutcome) -> Self {
        match &outcome.result {
            Ok(path) => Self::planned(&outcome.request, path),
            Err(e) => Self::failed(&outcome.request, e),
        }
    }

    /// Step at which the agent reaches its goal, if planned.
    pub fn arrival_step(&self) -> Option<u32> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1) as u32)
    }
}

/// Run-level parameters stored alongside the agent records.
///
/// Besides the grid size, a run carries free-form numeric parameters of the
/// surrounding fleet simulation (shelf count, fleet size, horizon, ...).
/// Keys are kept sorted so output is stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunParams {
    pub grid_width:  u32,
    pub grid_height: u32,
    pub values:      BTreeMap<String, f64>,
}

impl RunParams {
    pub fn for_grid(grid: &GridWorld) -> Self {
        Self { grid_width: grid.width(), grid_height: grid.height(), values: BTreeMap::new() }
    }

    /// Add or replace a named parameter.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }
}
