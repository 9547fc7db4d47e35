//! Planner observer trait for progress reporting and data collection.

use mapf_core::PlanningRequest;
use mapf_grid::GridWorld;

use crate::{Path, PlanError, PlanReport, SearchStats};

/// Callbacks invoked by [`SequentialPlanner::plan`][crate::SequentialPlanner::plan]
/// as it works through the agents.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: failure printer
///
/// ```rust,ignore
/// struct FailurePrinter;
///
/// impl PlanObserver for FailurePrinter {
///     fn on_agent_failed(&mut self, _req: &PlanningRequest, err: &PlanError, _stats: &SearchStats) {
///         eprintln!("{err}");
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once before the first agent is planned.
    fn on_run_start(&mut self, _grid: &GridWorld, _requests: &[PlanningRequest]) {}

    /// Called before each agent's search.
    fn on_agent_start(&mut self, _request: &PlanningRequest) {}

    /// Called after an agent's path has been committed to the reservation
    /// table.
    fn on_agent_planned(&mut self, _request: &PlanningRequest, _path: &Path, _stats: &SearchStats) {}

    /// Called when an agent is left unplanned.
    fn on_agent_failed(&mut self, _request: &PlanningRequest, _error: &PlanError, _stats: &SearchStats) {}

    /// Called once after the last agent with the complete report.
    fn on_run_end(&mut self, _report: &PlanReport) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
