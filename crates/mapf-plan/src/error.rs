//! Per-agent planning failures.
//!
//! Every variant names the agent it belongs to.  The planner records these
//! in its report instead of aborting the batch.

use thiserror::Error;

use mapf_core::{AgentId, Position, Step};

/// Why a request was rejected before any search ran.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RequestIssue {
    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Position),

    #[error("start {0} is an obstacle")]
    StartBlocked(Position),

    #[error("goal {0} is outside the grid")]
    GoalOutOfBounds(Position),

    #[error("goal {0} is an obstacle")]
    GoalBlocked(Position),

    #[error("agent id already used by an earlier request")]
    DuplicateAgent,
}

/// The search limit that cut a search short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// Time-step horizon (latest step a node may reach).
    Steps(u32),
    /// Node expansion cap.
    Expansions(usize),
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Budget::Steps(n)      => write!(f, "step horizon {n}"),
            Budget::Expansions(n) => write!(f, "{n} expansions"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("invalid request for {agent}: {reason}")]
    InvalidRequest { agent: AgentId, reason: RequestIssue },

    #[error("no path found for {agent}")]
    NoPath { agent: AgentId },

    #[error("search for {agent} exceeded {budget}")]
    BudgetExceeded { agent: AgentId, budget: Budget },

    #[error("start of {agent} is held by {by} at t0")]
    StartOccupied { agent: AgentId, by: AgentId },

    #[error("search for {agent} cancelled")]
    Cancelled { agent: AgentId },

    #[error("{agent} cannot reserve {pos} at {step}: held by {holder}")]
    ReservationConflict {
        agent:  AgentId,
        holder: AgentId,
        pos:    Position,
        step:   Step,
    },
}

impl PlanError {
    /// The agent this failure belongs to.
    pub fn agent(&self) -> AgentId {
        match *self {
            PlanError::InvalidRequest { agent, .. }
            | PlanError::NoPath { agent }
            | PlanError::BudgetExceeded { agent, .. }
            | PlanError::StartOccupied { agent, .. }
            | PlanError::Cancelled { agent }
            | PlanError::ReservationConflict { agent, .. } => agent,
        }
    }

    /// Short machine-readable label, used as the status column by output
    /// writers.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanError::InvalidRequest { .. }      => "invalid_request",
            PlanError::NoPath { .. }              => "no_path",
            PlanError::BudgetExceeded { .. }      => "budget_exceeded",
            PlanError::StartOccupied { .. }       => "start_occupied",
            PlanError::Cancelled { .. }           => "cancelled",
            PlanError::ReservationConflict { .. } => "reservation_conflict",
        }
    }

    /// `true` for failures caused by the grid or other agents' commitments
    /// rather than by a malformed request or a caller abort.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            PlanError::NoPath { .. }
                | PlanError::BudgetExceeded { .. }
                | PlanError::StartOccupied { .. }
        )
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
