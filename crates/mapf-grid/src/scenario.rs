//! Seeded random scenarios.
//!
//! The same `(grid, count, seed)` always yields the same requests, so a
//! scenario can be named by its seed in tests and on the command line.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use mapf_core::{AgentId, PlanningRequest, Position};

use crate::{GridError, GridResult, GridWorld};

/// Draw `count` requests with pairwise-distinct free starts and pairwise-
/// distinct free goals.  A start may coincide with another agent's goal.
pub fn random_requests(grid: &GridWorld, count: usize, seed: u64) -> GridResult<Vec<PlanningRequest>> {
    let mut cells: Vec<Position> = grid.free_cells().collect();
    if cells.len() < count {
        return Err(GridError::NotEnoughFreeCells { requested: count, available: cells.len() });
    }

    let mut rng = SmallRng::seed_from_u64(seed);

    cells.shuffle(&mut rng);
    let starts: Vec<Position> = cells[..count].to_vec();

    cells.shuffle(&mut rng);
    let goals = &cells[..count];

    Ok(starts
        .into_iter()
        .zip(goals)
        .enumerate()
        .map(|(i, (start, &goal))| PlanningRequest::new(AgentId(i as u32), start, goal))
        .collect())
}
