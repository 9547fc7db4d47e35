//! `PlanOutputObserver<W>`: bridges `PlanObserver` to an `OutputWriter`.

use mapf_core::PlanningRequest;
use mapf_plan::{Path, PlanError, PlanObserver, PlanReport, SearchStats};

use crate::writer::OutputWriter;
use crate::{AgentRecord, OutputError, OutputResult};

/// A [`PlanObserver`] that writes one [`AgentRecord`] per agent to any
/// [`OutputWriter`] backend and finishes the writer when the run ends.
///
/// Errors from the writer are stored internally because `PlanObserver`
/// methods have no return value.  After `planner.plan()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct PlanOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> PlanOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `planner.plan()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PlanObserver for PlanOutputObserver<W> {
    fn on_agent_planned(&mut self, request: &PlanningRequest, path: &Path, _stats: &SearchStats) {
        let result = self.writer.write_agent(&AgentRecord::planned(request, path));
        self.store_err(result);
    }

    fn on_agent_failed(&mut self, request: &PlanningRequest, error: &PlanError, _stats: &SearchStats) {
        let result = self.writer.write_agent(&AgentRecord::failed(request, error));
        self.store_err(result);
    }

    fn on_run_end(&mut self, _report: &PlanReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

/// Write every outcome of a finished run, then finish the writer.
pub fn write_report<W: OutputWriter>(writer: &mut W, report: &PlanReport) -> OutputResult<()> {
    for outcome in &report.outcomes {
        writer.write_agent(&AgentRecord::from_outcome(outcome))?;
    }
    writer.finish()
}
