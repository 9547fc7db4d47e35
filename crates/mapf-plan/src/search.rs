//! Time-expanded A* for a single agent.
//!
//! # State space
//!
//! A node is `(position, step)`.  From `(p, t)` there is an edge to
//! `(p', t + 1)` for every free orthogonal neighbour `p'` of `p` (and to
//! `(p, t + 1)` when waiting is enabled).  Every edge costs 1, so `g` equals
//! the node's step and `h` is the Manhattan distance to the goal, which is
//! admissible and consistent on a 4-connected unit-cost grid.
//!
//! # Ordering
//!
//! The open set is a min-heap on `(f, step, seq)`:
//!
//! 1. lowest `f = g + h` first;
//! 2. on equal `f`, the earlier step;
//! 3. on equal step, the node generated first (`seq` is the node's arena
//!    index, assigned in generation order).
//!
//! The order is total, so results do not depend on heap internals.
//!
//! # Memory
//!
//! Nodes live in a growable arena (`Vec<SearchNode>`) and point to their
//! parent by index.  The whole search tree is dropped in one go when `run`
//! returns.
//!
//! # Termination
//!
//! Every search is bounded by a step horizon and (optionally) an expansion
//! budget.  Running out of either is reported as
//! [`PlanError::BudgetExceeded`], distinct from a genuinely exhausted open
//! set ([`PlanError::NoPath`]).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use mapf_core::{PlannerConfig, PlanningRequest, Position, Step};
use mapf_grid::GridWorld;

use crate::error::{Budget, PlanError, PlanResult, RequestIssue};
use crate::{CancelToken, Path, ReservationTable, StateSet};

/// Poll the cancel token once per this many expansions.
const CANCEL_POLL_INTERVAL: usize = 1_024;

// ── Stats & report ────────────────────────────────────────────────────────────

/// Counters from one search, reported for diagnostics whether or not the
/// search succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (duplicates skipped).
    pub expanded: usize,
    /// Nodes pushed onto the open set, including the root.
    pub generated: usize,
    /// Expansions whose successors were cut off by the step horizon.
    pub pruned_by_horizon: usize,
    /// The step horizon the search ran with.
    pub horizon: u32,
}

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub result: PlanResult<Path>,
    pub stats:  SearchStats,
}

// ── Arena node ────────────────────────────────────────────────────────────────

type NodeIdx = u32;

struct SearchNode {
    pos:    Position,
    step:   Step,
    parent: Option<NodeIdx>,
}

// ── Request validation ────────────────────────────────────────────────────────

/// Reject starts or goals that are off the grid or on an obstacle.
pub fn validate_request(grid: &GridWorld, request: &PlanningRequest) -> PlanResult<()> {
    let issue = if !grid.in_bounds(request.start) {
        Some(RequestIssue::StartOutOfBounds(request.start))
    } else if !grid.is_free(request.start) {
        Some(RequestIssue::StartBlocked(request.start))
    } else if !grid.in_bounds(request.goal) {
        Some(RequestIssue::GoalOutOfBounds(request.goal))
    } else if !grid.is_free(request.goal) {
        Some(RequestIssue::GoalBlocked(request.goal))
    } else {
        None
    };
    match issue {
        Some(reason) => Err(PlanError::InvalidRequest { agent: request.agent, reason }),
        None => Ok(()),
    }
}

/// Static reachability (ignores time and reservations).  A goal in another
/// connected component can never be reached, however long the search runs.
fn connected(grid: &GridWorld, from: Position, to: Position) -> bool {
    if from == to {
        return true;
    }
    let mut seen: StateSet<Position> = StateSet::default();
    let mut queue = VecDeque::new();
    seen.insert(from);
    queue.push_back(from);
    while let Some(p) = queue.pop_front() {
        for n in grid.neighbors(p) {
            if n == to {
                return true;
            }
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    false
}

// ── TimeExpandedSearch ────────────────────────────────────────────────────────

/// Single-agent A* over `(position, step)` that avoids every entry held by
/// another agent in the [`ReservationTable`].
///
/// The search only reads the table; committing the resulting path is the
/// caller's job (see [`SequentialPlanner`](crate::SequentialPlanner)).
pub struct TimeExpandedSearch<'a> {
    grid:   &'a GridWorld,
    table:  &'a ReservationTable,
    config: &'a PlannerConfig,
    cancel: Option<&'a CancelToken>,
}

impl<'a> TimeExpandedSearch<'a> {
    pub fn new(grid: &'a GridWorld, table: &'a ReservationTable, config: &'a PlannerConfig) -> Self {
        Self { grid, table, config, cancel: None }
    }

    /// Poll `token` during the search.
    pub fn with_cancel(mut self, token: &'a CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The latest step a node may reach.
    ///
    /// Without an explicit `max_steps`, every committed reservation plus
    /// two full sweeps of the free cells.
    pub fn horizon(&self) -> u32 {
        self.config.max_steps.unwrap_or_else(|| {
            let sweep = u32::try_from(self.grid.free_count().saturating_mul(2)).unwrap_or(u32::MAX);
            self.table.horizon().0.saturating_add(sweep)
        })
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(CancelToken::is_cancelled)
    }

    /// Convenience wrapper returning only the path.
    pub fn find_path(&self, request: &PlanningRequest) -> PlanResult<Path> {
        self.run(request).result
    }

    /// Search for a minimum-step path for `request`.
    pub fn run(&self, request: &PlanningRequest) -> SearchReport {
        let mut stats = SearchStats { horizon: self.horizon(), ..SearchStats::default() };
        let result = self.search(request, &mut stats);
        SearchReport { result, stats }
    }

    fn search(&self, request: &PlanningRequest, stats: &mut SearchStats) -> PlanResult<Path> {
        let agent = request.agent;
        let goal = request.goal;

        validate_request(self.grid, request)?;
        if self.is_cancelled() {
            return Err(PlanError::Cancelled { agent });
        }
        if let Some(by) = self.table.holder(request.start, Step::ZERO).filter(|&h| h != agent) {
            return Err(PlanError::StartOccupied { agent, by });
        }
        if !connected(self.grid, request.start, goal) {
            return Err(PlanError::NoPath { agent });
        }
        // Another agent parked on the goal: it can never be finished on.
        if self.config.park_at_goal && self.table.parked_by(goal).is_some_and(|h| h != agent) {
            return Err(PlanError::NoPath { agent });
        }

        let horizon = stats.horizon;
        let max_expansions = self.config.max_expansions;

        let mut arena: Vec<SearchNode> = Vec::new();
        let mut closed: StateSet<(Position, Step)> = StateSet::default();
        // Min-heap: (f, step, seq).  Reverse makes BinaryHeap (max) behave as
        // min-heap; seq doubles as the arena index.
        let mut open: BinaryHeap<Reverse<(u32, Step, NodeIdx)>> = BinaryHeap::new();

        arena.push(SearchNode { pos: request.start, step: Step::ZERO, parent: None });
        open.push(Reverse((request.start.manhattan(goal), Step::ZERO, 0)));
        stats.generated = 1;

        while let Some(Reverse((_, step, idx))) = open.pop() {
            let pos = arena[idx as usize].pos;

            if !closed.insert((pos, step)) {
                continue;
            }

            // Accepting the goal is never refused by the expansion budget.
            if pos == goal
                && !(self.config.park_at_goal && self.table.is_claimed_after(goal, step, agent))
            {
                stats.expanded += 1;
                return Ok(reconstruct(&arena, idx));
            }

            if let Some(limit) = max_expansions {
                if stats.expanded >= limit {
                    return Err(PlanError::BudgetExceeded { agent, budget: Budget::Expansions(limit) });
                }
            }
            stats.expanded += 1;
            if stats.expanded % CANCEL_POLL_INTERVAL == 0 && self.is_cancelled() {
                return Err(PlanError::Cancelled { agent });
            }

            if step.0 >= horizon {
                stats.pruned_by_horizon += 1;
                continue;
            }

            let next = step.next();
            let g = next.0;
            let wait = self.config.allow_wait.then_some(pos);
            for cand in self.grid.neighbors(pos).chain(wait) {
                if closed.contains(&(cand, next)) {
                    continue;
                }
                if self.table.is_reserved(cand, next, agent) {
                    continue;
                }
                if self.config.prevent_swaps
                    && cand != pos
                    && self.table.is_swap(pos, cand, step, agent)
                {
                    continue;
                }
                let seq = arena.len() as NodeIdx;
                arena.push(SearchNode { pos: cand, step: next, parent: Some(idx) });
                open.push(Reverse((g + cand.manhattan(goal), next, seq)));
                stats.generated += 1;
            }
        }

        if stats.pruned_by_horizon > 0 {
            Err(PlanError::BudgetExceeded { agent, budget: Budget::Steps(horizon) })
        } else {
            Err(PlanError::NoPath { agent })
        }
    }
}

/// Walk parent links from `idx` back to the root and reverse.
fn reconstruct(arena: &[SearchNode], idx: NodeIdx) -> Path {
    let mut cells = Vec::with_capacity(arena[idx as usize].step.index() + 1);
    let mut cur = Some(idx);
    while let Some(i) = cur {
        let node = &arena[i as usize];
        cells.push(node.pos);
        cur = node.parent;
    }
    cells.reverse();
    Path::from_search(cells)
}
