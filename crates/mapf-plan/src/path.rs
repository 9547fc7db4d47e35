//! Planned route of one agent.

use mapf_core::{Position, Step};

/// Ordered positions, one per step: `cells[t]` is where the agent is at
/// step `t`.  `cells[0]` is the start, the last entry the goal.
///
/// A `Path` is never empty; a search that reaches nothing produces an error
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    /// Wrap a non-empty position sequence.  Returns `None` for an empty one.
    pub fn from_cells(cells: Vec<Position>) -> Option<Self> {
        if cells.is_empty() { None } else { Some(Self { cells }) }
    }

    /// The search always reaches at least its root, so `cells` is non-empty.
    pub(crate) fn from_search(cells: Vec<Position>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of positions (arrival step + 1).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `false` for every path: a path holds at least its start.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of transitions taken.
    pub fn moves(&self) -> u32 {
        (self.cells.len() - 1) as u32
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn goal(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    /// Step at which the agent reaches its goal.
    pub fn arrival_step(&self) -> Step {
        Step(self.moves())
    }

    /// Position at `step`, or `None` after arrival.
    pub fn at(&self, step: Step) -> Option<Position> {
        self.cells.get(step.index()).copied()
    }

    /// `(step, position)` pairs from start to goal.
    pub fn steps(&self) -> impl Iterator<Item = (Step, Position)> + '_ {
        self.cells.iter().enumerate().map(|(t, &p)| (Step(t as u32), p))
    }

    /// `true` if every transition is one orthogonal move (or a stay in place
    /// when `allow_wait` is set).
    pub fn is_contiguous(&self, allow_wait: bool) -> bool {
        self.cells
            .windows(2)
            .all(|w| w[0].is_adjacent(w[1]) || (allow_wait && w[0] == w[1]))
    }
}
