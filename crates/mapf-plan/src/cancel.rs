//! Cooperative cancellation for long searches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared abort flag.  Clone it, hand one copy to the planner, and call
/// [`cancel`](Self::cancel) from anywhere (another thread, a signal
/// handler) to stop the search in progress.
///
/// Searches poll the flag periodically and fail with
/// [`PlanError::Cancelled`](crate::PlanError::Cancelled).  Once set the
/// flag stays set, so every agent not yet planned is cancelled too.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
