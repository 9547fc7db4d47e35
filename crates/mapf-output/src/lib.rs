//! `mapf-output`: run records and renderings of planned paths.
//!
//! | Backend | Type          | Files created                       |
//! |---------|---------------|-------------------------------------|
//! | JSON    | `JsonWriter`  | one run document (caller-chosen)    |
//! | CSV     | `CsvWriter`   | `agents.csv`, `path_steps.csv`      |
//!
//! Both backends implement [`OutputWriter`] and can be driven live by
//! [`PlanOutputObserver`] (a `mapf_plan::PlanObserver`) or after the fact
//! with [`write_report`].  A pair `(A, B)` of writers is itself a writer.
//!
//! [`render_ascii`] draws the grid with every agent's path for quick
//! inspection in a terminal.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mapf_output::{CsvWriter, JsonWriter, PlanOutputObserver, RunParams};
//!
//! let json = JsonWriter::new(dir.join("run.json"), RunParams::for_grid(&grid));
//! let csv = CsvWriter::new(&dir)?;
//! let mut obs = PlanOutputObserver::new((json, csv));
//! let report = planner.plan(&requests, &mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod ascii;
pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod record;
pub mod writer;

#[cfg(test)]
mod tests;

pub use ascii::render_ascii;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::{JsonLayout, JsonWriter};
pub use observer::{PlanOutputObserver, write_report};
pub use record::{AgentRecord, RunParams, STATUS_PLANNED};
pub use writer::OutputWriter;
