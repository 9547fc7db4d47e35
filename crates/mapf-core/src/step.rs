//! Discrete time axis of the time-expanded graph.
//!
//! Every move (and, when enabled, every wait) advances an agent by exactly
//! one `Step`.  A path's index is its step: `path[0]` is the agent at
//! `Step::ZERO`.

use std::fmt;

/// An absolute time-step counter.
///
/// `u32` bounds a single planning run to ~4.3 billion steps, far beyond any
/// horizon a grid search could expand.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u32);

impl Step {
    pub const ZERO: Step = Step(0);

    /// The step immediately after `self`.
    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }

    /// Return the step `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Step {
        Step(self.0 + n)
    }

    /// The previous step, or `None` at `Step::ZERO`.
    #[inline]
    pub fn prev(self) -> Option<Step> {
        self.0.checked_sub(1).map(Step)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u32> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u32) -> Step {
        Step(self.0 + rhs)
    }
}

impl std::ops::Sub for Step {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Step) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
