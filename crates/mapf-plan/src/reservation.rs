//! Shared record of which agent holds which `(position, step)`.
//!
//! # Lifetime
//!
//! One table lives for exactly one planning run.  Entries are only ever
//! added: a committed reservation is never evicted, overwritten, or
//! expired.  The planner owns the table; searches read it through a shared
//! borrow and only the planner writes to it, between agents.
//!
//! # Parking
//!
//! A plain reservation covers only the steps an agent is en route.  After
//! arrival its goal cell is free again, so a later agent may cross it.  When
//! the caller opts in, [`commit`](ReservationTable::commit) also *parks* the
//! agent: it holds its goal for every step from arrival on.

use mapf_core::{AgentId, Position, Step};

use crate::{Path, PlanError, PlanResult, StateMap};

#[derive(Debug, Default, Clone)]
pub struct ReservationTable {
    /// En-route reservations.
    slots: StateMap<(Position, Step), AgentId>,
    /// Goal cells held indefinitely from a step on.
    parked: StateMap<Position, (Step, AgentId)>,
    /// Last en-route step at which any agent holds a position.
    latest: StateMap<Position, Step>,
    /// Last step covered by any en-route reservation.
    horizon: Step,
}

impl ReservationTable {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The agent holding `pos` at `step`, if any.
    #[inline]
    pub fn holder(&self, pos: Position, step: Step) -> Option<AgentId> {
        if let Some(&agent) = self.slots.get(&(pos, step)) {
            return Some(agent);
        }
        match self.parked.get(&pos) {
            Some(&(since, agent)) if since <= step => Some(agent),
            _ => None,
        }
    }

    /// `true` iff an agent *other than* `agent` holds `pos` at `step`.
    #[inline]
    pub fn is_reserved(&self, pos: Position, step: Step, agent: AgentId) -> bool {
        self.holder(pos, step).is_some_and(|holder| holder != agent)
    }

    /// `true` if moving `from → to` between `step` and `step + 1` swaps cells
    /// with another agent making the opposite move over the same interval.
    #[inline]
    pub fn is_swap(&self, from: Position, to: Position, step: Step, agent: AgentId) -> bool {
        match self.holder(to, step) {
            Some(other) if other != agent => self.holder(from, step.next()) == Some(other),
            _ => false,
        }
    }

    /// `true` if another agent holds `pos` at any step after `step`,
    /// including by parking there.
    pub fn is_claimed_after(&self, pos: Position, step: Step, agent: AgentId) -> bool {
        if let Some(&(_, holder)) = self.parked.get(&pos) {
            if holder != agent {
                return true;
            }
        }
        let Some(&last) = self.latest.get(&pos) else {
            return false;
        };
        let mut t = step.next();
        while t <= last {
            if self.slots.get(&(pos, t)).is_some_and(|&h| h != agent) {
                return true;
            }
            t = t.next();
        }
        false
    }

    /// The agent parked on `pos`, if any.
    pub fn parked_by(&self, pos: Position) -> Option<AgentId> {
        self.parked.get(&pos).map(|&(_, agent)| agent)
    }

    /// Last en-route step at which any agent holds `pos`.
    pub fn latest_step(&self, pos: Position) -> Option<Step> {
        self.latest.get(&pos).copied()
    }

    /// Last step covered by any en-route reservation (`Step::ZERO` when
    /// empty).
    pub fn horizon(&self) -> Step {
        self.horizon
    }

    /// Number of en-route `(position, step)` entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty() && self.parked.is_empty()
    }

    pub fn parked_count(&self) -> usize {
        self.parked.len()
    }

    // ── Commits ───────────────────────────────────────────────────────────

    /// Reserve every `(path[t], t)` for `agent`.
    ///
    /// Fails without modifying the table if any entry is held by another
    /// agent.  In sequential planning this cannot happen: the search already
    /// excluded those entries.
    pub fn reserve(&mut self, path: &Path, agent: AgentId) -> PlanResult<()> {
        self.commit(path, agent, false)
    }

    /// Reserve `path` and, if `park` is set, also hold its goal for every
    /// step from arrival on.  All-or-nothing.
    pub fn commit(&mut self, path: &Path, agent: AgentId, park: bool) -> PlanResult<()> {
        for (step, pos) in path.steps() {
            if let Some(holder) = self.holder(pos, step).filter(|&h| h != agent) {
                return Err(PlanError::ReservationConflict { agent, holder, pos, step });
            }
        }
        if park {
            self.check_park(path.goal(), path.arrival_step(), agent)?;
        }

        for (step, pos) in path.steps() {
            self.slots.insert((pos, step), agent);
            let latest = self.latest.entry(pos).or_insert(step);
            if *latest < step {
                *latest = step;
            }
        }
        self.horizon = self.horizon.max(path.arrival_step());
        if park {
            self.parked.insert(path.goal(), (path.arrival_step(), agent));
        }
        Ok(())
    }

    /// Hold `pos` for `agent` at every step from `since` on.
    ///
    /// Fails without modifying the table if another agent holds `pos` at or
    /// after `since`, or has already parked there.
    pub fn park(&mut self, pos: Position, since: Step, agent: AgentId) -> PlanResult<()> {
        self.check_park(pos, since, agent)?;
        self.parked.insert(pos, (since, agent));
        Ok(())
    }

    fn check_park(&self, pos: Position, since: Step, agent: AgentId) -> PlanResult<()> {
        if let Some(&(step, holder)) = self.parked.get(&pos) {
            if holder != agent {
                return Err(PlanError::ReservationConflict { agent, holder, pos, step: step.max(since) });
            }
        }
        if let Some(&last) = self.latest.get(&pos) {
            let mut t = since;
            while t <= last {
                if let Some(&holder) = self.slots.get(&(pos, t)).filter(|&&h| h != agent) {
                    return Err(PlanError::ReservationConflict { agent, holder, pos, step: t });
                }
                t = t.next();
            }
        }
        Ok(())
    }
}
