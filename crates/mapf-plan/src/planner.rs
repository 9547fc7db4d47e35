//! Priority-ordered sequential planning.
//!
//! Agents are planned one at a time in request order.  Each successful path
//! is committed to the [`ReservationTable`] before the next agent's search
//! starts, so agent *i* treats the paths of agents `0..i` as hard
//! constraints.  Earlier agents never yield; a failure is recorded and
//! planning moves on without touching any earlier commitment.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use mapf_core::{AgentId, MapfResult, PlannerConfig, PlanningRequest, Position, Step};
use mapf_grid::GridWorld;

use crate::error::RequestIssue;
use crate::{
    CancelToken, NoopObserver, Path, PlanError, PlanObserver, PlanResult, ReservationTable,
    SearchStats, TimeExpandedSearch,
};

// ── Report ────────────────────────────────────────────────────────────────────

/// Result for one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOutcome {
    pub request: PlanningRequest,
    pub result:  PlanResult<Path>,
    pub stats:   SearchStats,
}

/// Kinds of inter-agent collision checked by [`PlanReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// Same cell, same step.
    Vertex,
    /// Two agents swap cells between `step` and `step + 1`.
    Edge,
}

/// A collision between two planned agents.  `pos` is the first agent's cell
/// at `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub kind:  ConflictKind,
    pub first: AgentId,
    pub other: AgentId,
    pub pos:   Position,
    pub step:  Step,
}

/// Ordered per-agent results of one planning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanReport {
    pub outcomes: Vec<AgentOutcome>,
}

impl PlanReport {
    /// Successfully planned agents, in planning order.
    pub fn planned(&self) -> impl Iterator<Item = (&PlanningRequest, &Path)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|p| (&o.request, p)))
    }

    /// Unplanned agents with their failure, in planning order.
    pub fn failed(&self) -> impl Iterator<Item = (&PlanningRequest, &PlanError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.request, e)))
    }

    pub fn planned_count(&self) -> usize {
        self.planned().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn all_planned(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// The outcome recorded for `agent`.
    pub fn outcome(&self, agent: AgentId) -> Option<&AgentOutcome> {
        self.outcomes.iter().find(|o| o.request.agent == agent)
    }

    /// The committed path of `agent`, if it was planned.
    pub fn path(&self, agent: AgentId) -> Option<&Path> {
        self.outcome(agent).and_then(|o| o.result.as_ref().ok())
    }

    /// Total node expansions across all agents.
    pub fn total_expanded(&self) -> usize {
        self.outcomes.iter().map(|o| o.stats.expanded).sum()
    }

    /// Every pair of planned agents occupying the same cell at the same step
    /// while both are en route.  Empty for any report the planner produced.
    pub fn vertex_conflicts(&self) -> Vec<Conflict> {
        let mut owner: HashMap<(Position, Step), AgentId> = HashMap::new();
        let mut conflicts = Vec::new();
        for (req, path) in self.planned() {
            for (step, pos) in path.steps() {
                if let Some(&first) = owner.get(&(pos, step)) {
                    conflicts.push(Conflict {
                        kind: ConflictKind::Vertex,
                        first,
                        other: req.agent,
                        pos,
                        step,
                    });
                } else {
                    owner.insert((pos, step), req.agent);
                }
            }
        }
        conflicts
    }

    /// Every pair of planned agents swapping cells between consecutive steps.
    pub fn edge_conflicts(&self) -> Vec<Conflict> {
        let planned: Vec<(AgentId, &Path)> = self.planned().map(|(r, p)| (r.agent, p)).collect();
        let mut conflicts = Vec::new();
        for (i, &(a, pa)) in planned.iter().enumerate() {
            for &(b, pb) in &planned[i + 1..] {
                let shared = pa.len().min(pb.len());
                for t in 0..shared.saturating_sub(1) {
                    let (a0, a1) = (pa.cells()[t], pa.cells()[t + 1]);
                    let (b0, b1) = (pb.cells()[t], pb.cells()[t + 1]);
                    if a0 != a1 && a0 == b1 && a1 == b0 {
                        conflicts.push(Conflict {
                            kind:  ConflictKind::Edge,
                            first: a,
                            other: b,
                            pos:   a0,
                            step:  Step(t as u32),
                        });
                    }
                }
            }
        }
        conflicts
    }
}

// ── SequentialPlanner ─────────────────────────────────────────────────────────

/// Plans agents one at a time against a shared, growing
/// [`ReservationTable`].
///
/// The planner owns the table for the lifetime of one run.  Use a fresh
/// planner (or [`plan_paths`]) for every independent run.
pub struct SequentialPlanner<'g> {
    grid:   &'g GridWorld,
    config: PlannerConfig,
    table:  ReservationTable,
    cancel: Option<CancelToken>,
}

impl<'g> SequentialPlanner<'g> {
    /// Validate `config` and create a planner with an empty table.
    pub fn new(grid: &'g GridWorld, config: PlannerConfig) -> MapfResult<Self> {
        config.validate()?;
        Ok(Self { grid, config, table: ReservationTable::new(), cancel: None })
    }

    /// Abort the run when `token` is cancelled.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Commitments made so far.
    pub fn table(&self) -> &ReservationTable {
        &self.table
    }

    pub fn into_table(self) -> ReservationTable {
        self.table
    }

    /// Plan every request in order, reporting progress to `observer`.
    pub fn plan<O: PlanObserver>(&mut self, requests: &[PlanningRequest], observer: &mut O) -> PlanReport {
        observer.on_run_start(self.grid, requests);

        let mut seen: HashSet<AgentId> = HashSet::with_capacity(requests.len());
        let mut report = PlanReport { outcomes: Vec::with_capacity(requests.len()) };

        for request in requests {
            observer.on_agent_start(request);
            debug!(
                agent = %request.agent,
                start = %request.start,
                goal = %request.goal,
                "planning agent"
            );

            let (result, stats) = if seen.insert(request.agent) {
                self.plan_one(request)
            } else {
                let err = PlanError::InvalidRequest {
                    agent:  request.agent,
                    reason: RequestIssue::DuplicateAgent,
                };
                (Err(err), SearchStats::default())
            };

            match &result {
                Ok(path) => {
                    debug!(
                        agent = %request.agent,
                        steps = path.arrival_step().0,
                        expanded = stats.expanded,
                        "path committed"
                    );
                    observer.on_agent_planned(request, path, &stats);
                }
                Err(e) => {
                    warn!(agent = %request.agent, kind = e.kind(), expanded = stats.expanded, "{e}");
                    observer.on_agent_failed(request, e, &stats);
                }
            }

            report.outcomes.push(AgentOutcome { request: *request, result, stats });
        }

        info!(
            agents = report.outcomes.len(),
            planned = report.planned_count(),
            failed = report.failed_count(),
            expanded = report.total_expanded(),
            "planning run complete"
        );
        observer.on_run_end(&report);
        report
    }

    /// [`plan`](Self::plan) without an observer.
    pub fn plan_all(&mut self, requests: &[PlanningRequest]) -> PlanReport {
        self.plan(requests, &mut NoopObserver)
    }

    /// Search for one agent and, on success, commit its path.
    fn plan_one(&mut self, request: &PlanningRequest) -> (PlanResult<Path>, SearchStats) {
        let report = {
            let search = TimeExpandedSearch::new(self.grid, &self.table, &self.config);
            match &self.cancel {
                Some(token) => search.with_cancel(token).run(request),
                None => search.run(request),
            }
        };

        let result = report.result.and_then(|path| {
            self.table.commit(&path, request.agent, self.config.park_at_goal)?;
            Ok(path)
        });
        (result, report.stats)
    }
}

/// Plan `requests` on `grid` with a fresh reservation table.
///
/// Running this twice on the same input yields identical reports.
pub fn plan_paths(grid: &GridWorld, requests: &[PlanningRequest], config: PlannerConfig) -> MapfResult<PlanReport> {
    let mut planner = SequentialPlanner::new(grid, config)?;
    Ok(planner.plan_all(requests))
}
