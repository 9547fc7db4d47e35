//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentRecord, OutputResult};

/// Trait implemented by the JSON and CSV writers.
///
/// Errors are returned to the caller; [`PlanOutputObserver`](crate::PlanOutputObserver)
/// stores them for [`take_error`](crate::PlanOutputObserver::take_error)
/// because observer callbacks cannot fail.
pub trait OutputWriter {
    /// Write (or buffer) one agent's record.
    fn write_agent(&mut self, record: &AgentRecord) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Fan out to two writers.  The first error wins; the second writer is not
/// called after the first fails.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_agent(&mut self, record: &AgentRecord) -> OutputResult<()> {
        self.0.write_agent(record)?;
        self.1.write_agent(record)
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}
