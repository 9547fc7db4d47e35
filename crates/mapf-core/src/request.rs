//! Per-agent planning request.

use crate::{AgentId, Position};

/// One agent's planning input: where it starts, where it must end, and the
/// id its reservations are recorded under.
///
/// Created by the caller before planning and consumed once by the search;
/// never mutated afterwards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanningRequest {
    pub agent: AgentId,
    pub start: Position,
    pub goal:  Position,
}

impl PlanningRequest {
    #[inline]
    pub fn new(agent: AgentId, start: Position, goal: Position) -> Self {
        Self { agent, start, goal }
    }

    /// Build requests from parallel start/goal lists, numbering agents by
    /// list index (earlier index = higher priority).
    ///
    /// Extra entries in the longer list are ignored.
    pub fn from_pairs(starts: &[Position], goals: &[Position]) -> Vec<PlanningRequest> {
        starts
            .iter()
            .zip(goals)
            .enumerate()
            .map(|(i, (&start, &goal))| PlanningRequest::new(AgentId(i as u32), start, goal))
            .collect()
    }

    /// Lower bound on the number of moves: the Manhattan distance.
    #[inline]
    pub fn min_moves(&self) -> u32 {
        self.start.manhattan(self.goal)
    }
}
