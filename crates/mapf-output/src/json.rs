//! JSON run record.
//!
//! Records are buffered and written as one pretty-printed document on
//! [`finish`](OutputWriter::finish):
//!
//! ```text
//! {
//!   "grid":   { "width": 86, "height": 124 },
//!   "params": { "T": 100.0, "k": 50.0, ... },
//!   "agents": [
//!     { "id": 0, "initial_position": [0, 0], "goal": [80, 80],
//!       "status": "planned", "path": [[0, 0], [1, 0], ...] },
//!     { "id": 1, ..., "status": "no_path", "path": null }
//!   ]
//! }
//! ```
//!
//! [`JsonLayout::Fleet`] writes the layout read by the fleet simulator
//! instead: parameters at the top level, agents under `"LGVs"` with 1-based
//! ids, and `initial_position` given as `[y, x]`.  Paths stay `[x, y]`.
//!
//! ```text
//! { "T": 100.0, "b": 2.0, "k": 50.0, "n": 3.0,
//!   "LGVs": [ { "id": 1, "initial_position": [0, 0], "path": [[0, 0], ...] } ] }
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;

use mapf_core::Position;

use crate::writer::OutputWriter;
use crate::{AgentRecord, OutputResult, RunParams};

#[derive(Serialize)]
struct GridSize {
    width:  u32,
    height: u32,
}

#[derive(Serialize)]
struct AgentJson {
    id:               u32,
    initial_position: [i32; 2],
    goal:             [i32; 2],
    status:           &'static str,
    path:             Option<Vec<[i32; 2]>>,
}

#[derive(Serialize)]
struct RunDocument<'a> {
    grid:   GridSize,
    params: &'a BTreeMap<String, f64>,
    agents: &'a [AgentJson],
}

#[derive(Serialize)]
struct FleetAgentJson {
    id:               u32,
    initial_position: [i32; 2],
    path:             Option<Vec<[i32; 2]>>,
}

#[derive(Serialize)]
struct FleetDocument<'a> {
    #[serde(flatten)]
    params: &'a BTreeMap<String, f64>,
    #[serde(rename = "LGVs")]
    lgvs:   Vec<FleetAgentJson>,
}

/// Shape of the written document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonLayout {
    /// `{grid, params, agents}` with 0-based ids and status strings.
    #[default]
    Run,
    /// Flat parameters plus `"LGVs"`, as consumed by the fleet simulator.
    Fleet,
}

fn pair(p: Position) -> [i32; 2] {
    [p.x, p.y]
}

impl From<&AgentRecord> for AgentJson {
    fn from(r: &AgentRecord) -> Self {
        Self {
            id:               r.agent.0,
            initial_position: pair(r.start),
            goal:             pair(r.goal),
            status:           r.status,
            path:             r.path.as_ref().map(|cells| cells.iter().copied().map(pair).collect()),
        }
    }
}

/// Buffers agent records and writes a single JSON document.
pub struct JsonWriter {
    path:     PathBuf,
    params:   RunParams,
    agents:   Vec<AgentJson>,
    layout:   JsonLayout,
    finished: bool,
}

impl JsonWriter {
    /// The file at `path` is created on [`finish`](OutputWriter::finish).
    pub fn new(path: impl Into<PathBuf>, params: RunParams) -> Self {
        Self { path: path.into(), params, agents: Vec::new(), layout: JsonLayout::Run, finished: false }
    }

    pub fn with_layout(mut self, layout: JsonLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Serialize the buffered document to any writer.
    pub fn write_to<W: Write>(&self, out: W) -> OutputResult<()> {
        match self.layout {
            JsonLayout::Run => {
                let doc = RunDocument {
                    grid:   GridSize { width: self.params.grid_width, height: self.params.grid_height },
                    params: &self.params.values,
                    agents: &self.agents,
                };
                serde_json::to_writer_pretty(out, &doc)?;
            }
            JsonLayout::Fleet => {
                let lgvs = self
                    .agents
                    .iter()
                    .map(|a| FleetAgentJson {
                        id:               a.id + 1,
                        initial_position: [a.initial_position[1], a.initial_position[0]],
                        path:             a.path.clone(),
                    })
                    .collect();
                let doc = FleetDocument { params: &self.params.values, lgvs };
                serde_json::to_writer_pretty(out, &doc)?;
            }
        }
        Ok(())
    }
}

impl OutputWriter for JsonWriter {
    fn write_agent(&mut self, record: &AgentRecord) -> OutputResult<()> {
        self.agents.push(AgentJson::from(record));
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let mut out = BufWriter::new(File::create(&self.path)?);
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }
}
