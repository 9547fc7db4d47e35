//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agents.csv`: one row per agent with status and arrival step
//! - `path_steps.csv`: one row per `(agent, step)` of every planned path

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentRecord, OutputResult};

pub const AGENTS_FILE: &str = "agents.csv";
pub const PATH_STEPS_FILE: &str = "path_steps.csv";

/// Writes planning output to two CSV files.
pub struct CsvWriter {
    agents:   Writer<File>,
    steps:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut agents = Writer::from_path(dir.join(AGENTS_FILE))?;
        agents.write_record(["agent_id", "status", "start_x", "start_y", "goal_x", "goal_y", "arrival_step"])?;

        let mut steps = Writer::from_path(dir.join(PATH_STEPS_FILE))?;
        steps.write_record(["agent_id", "step", "x", "y"])?;

        Ok(Self { agents, steps, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_agent(&mut self, record: &AgentRecord) -> OutputResult<()> {
        let id = record.agent.0.to_string();
        self.agents.write_record(&[
            id.clone(),
            record.status.to_string(),
            record.start.x.to_string(),
            record.start.y.to_string(),
            record.goal.x.to_string(),
            record.goal.y.to_string(),
            // Empty for unplanned agents.
            record.arrival_step().map(|s| s.to_string()).unwrap_or_default(),
        ])?;

        for (step, pos) in record.path.iter().flatten().enumerate() {
            self.steps.write_record(&[
                id.clone(),
                step.to_string(),
                pos.x.to_string(),
                pos.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.agents.flush()?;
        self.steps.flush()?;
        Ok(())
    }
}
