//! Tests for mapf-output.

#[cfg(test)]
mod helpers {
    use mapf_core::{AgentId, PlannerConfig, PlanningRequest, Position};
    use mapf_grid::{GridWorld, GridWorldBuilder};
    use mapf_plan::{PlanReport, plan_paths};

    /// 5-cell corridor along x: agent 0 crosses it, agent 1 meets it head-on
    /// and fails.
    pub fn corridor_run() -> (GridWorld, Vec<PlanningRequest>, PlanReport) {
        let grid = GridWorldBuilder::new(5, 1).build();
        let requests = vec![
            PlanningRequest::new(AgentId(0), Position::new(0, 0), Position::new(4, 0)),
            PlanningRequest::new(AgentId(1), Position::new(4, 0), Position::new(0, 0)),
        ];
        let report = plan_paths(&grid, &requests, PlannerConfig::default()).unwrap();
        (grid, requests, report)
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod record {
    use mapf_core::{AgentId, Position};

    use crate::{AgentRecord, RunParams, STATUS_PLANNED};

    #[test]
    fn from_outcomes() {
        let (_, _, report) = super::helpers::corridor_run();
        let ok = AgentRecord::from_outcome(&report.outcomes[0]);
        assert_eq!(ok.agent, AgentId(0));
        assert_eq!(ok.status, STATUS_PLANNED);
        assert_eq!(ok.arrival_step(), Some(4));
        assert_eq!(ok.path.as_deref().map(<[Position]>::len), Some(5));

        let failed = AgentRecord::from_outcome(&report.outcomes[1]);
        assert_eq!(failed.status, "no_path");
        assert_eq!(failed.path, None);
        assert_eq!(failed.arrival_step(), None);
        assert_eq!(failed.start, Position::new(4, 0));
    }

    #[test]
    fn params_sorted_and_replaced() {
        let (grid, _, _) = super::helpers::corridor_run();
        let params = RunParams::for_grid(&grid).with("n", 3.0).with("k", 50.0).with("n", 4.0);
        assert_eq!((params.grid_width, params.grid_height), (5, 1));
        let keys: Vec<_> = params.values.keys().map(String::as_str).collect();
        assert_eq!(keys, ["k", "n"]);
        assert_eq!(params.values["n"], 4.0);
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{AGENTS_FILE, CsvWriter, PATH_STEPS_FILE};
    use crate::writer::OutputWriter;
    use crate::{PlanOutputObserver, write_report};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_all(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(AGENTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "status", "start_x", "start_y", "goal_x", "goal_y", "arrival_step"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(PATH_STEPS_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["agent_id", "step", "x", "y"]);
    }

    #[test]
    fn csv_report_rows() {
        let (_, _, report) = super::helpers::corridor_run();
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_report(&mut w, &report).unwrap();

        let agents = read_all(dir.path().join(AGENTS_FILE));
        assert_eq!(agents.len(), 2);
        assert_eq!(&agents[0][1], "planned");
        assert_eq!(&agents[0][6], "4");
        assert_eq!(&agents[1][1], "no_path");
        assert_eq!(&agents[1][2], "4"); // start_x
        assert_eq!(&agents[1][6], ""); // no arrival

        let steps = read_all(dir.path().join(PATH_STEPS_FILE));
        assert_eq!(steps.len(), 5);
        for (t, row) in steps.iter().enumerate() {
            assert_eq!(&row[0], "0");
            assert_eq!(row[1].parse::<usize>().unwrap(), t);
            assert_eq!(row[2].parse::<usize>().unwrap(), t); // x advances each step
            assert_eq!(&row[3], "0");
        }
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn observer_writes_during_planning() {
        use mapf_core::PlannerConfig;
        use mapf_plan::SequentialPlanner;

        let (grid, requests, _) = super::helpers::corridor_run();
        let dir = tmp();
        let mut obs = PlanOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let mut planner = SequentialPlanner::new(&grid, PlannerConfig::default()).unwrap();
        planner.plan(&requests, &mut obs);
        assert!(obs.take_error().is_none());

        assert_eq!(read_all(dir.path().join(AGENTS_FILE)).len(), 2);
        assert_eq!(read_all(dir.path().join(PATH_STEPS_FILE)).len(), 5);
    }

    #[test]
    fn missing_directory_is_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("absent")).is_err());
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use serde_json::{Value, json};

    use crate::{CsvWriter, JsonLayout, JsonWriter, OutputError, PlanOutputObserver, RunParams, write_report};
    use crate::writer::OutputWriter;

    #[test]
    fn document_shape() {
        let (grid, _, report) = super::helpers::corridor_run();
        let params = RunParams::for_grid(&grid).with("k", 50.0).with("T", 100.0);
        let mut w = JsonWriter::new("unused.json", params);
        for outcome in &report.outcomes {
            w.write_agent(&crate::AgentRecord::from_outcome(outcome)).unwrap();
        }
        let mut buf = Vec::new();
        w.write_to(&mut buf).unwrap();
        let doc: Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(doc["grid"], json!({ "width": 5, "height": 1 }));
        assert_eq!(doc["params"]["k"], json!(50.0));
        assert_eq!(doc["params"]["T"], json!(100.0));

        let agents = doc["agents"].as_array().unwrap();
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0]["id"], json!(0));
        assert_eq!(agents[0]["initial_position"], json!([0, 0]));
        assert_eq!(agents[0]["goal"], json!([4, 0]));
        assert_eq!(agents[0]["status"], json!("planned"));
        assert_eq!(agents[0]["path"], json!([[0, 0], [1, 0], [2, 0], [3, 0], [4, 0]]));
        assert_eq!(agents[1]["status"], json!("no_path"));
        assert!(agents[1]["path"].is_null());
    }

    #[test]
    fn fleet_layout() {
        let (grid, _, report) = super::helpers::corridor_run();
        let params = RunParams::for_grid(&grid).with("k", 50.0).with("b", 2.0);
        let mut w = JsonWriter::new("unused.json", params).with_layout(JsonLayout::Fleet);
        write_report_to_buffer(&mut w, &report);
        let mut buf = Vec::new();
        w.write_to(&mut buf).unwrap();
        let doc: Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(doc["k"], json!(50.0));
        assert_eq!(doc["b"], json!(2.0));
        assert!(doc.get("grid").is_none());
        assert!(doc.get("agents").is_none());

        let lgvs = doc["LGVs"].as_array().unwrap();
        assert_eq!(lgvs.len(), 2);
        assert_eq!(lgvs[0]["id"], json!(1));
        assert_eq!(lgvs[1]["id"], json!(2));
        // Start (4, 0) is written as [y, x]; paths keep [x, y].
        assert_eq!(lgvs[1]["initial_position"], json!([0, 4]));
        assert_eq!(lgvs[0]["path"][1], json!([1, 0]));
        assert!(lgvs[1]["path"].is_null());
        assert!(lgvs[0].get("status").is_none());
    }

    fn write_report_to_buffer(w: &mut JsonWriter, report: &mapf_plan::PlanReport) {
        for outcome in &report.outcomes {
            w.write_agent(&crate::AgentRecord::from_outcome(outcome)).unwrap();
        }
    }

    #[test]
    fn finish_writes_file_once() {
        let (grid, _, report) = super::helpers::corridor_run();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("run.json");
        let mut w = JsonWriter::new(&file, RunParams::for_grid(&grid));
        write_report(&mut w, &report).unwrap();
        w.finish().unwrap();

        let doc: Value = serde_json::from_reader(std::fs::File::open(&file).unwrap()).unwrap();
        assert_eq!(doc["agents"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn pair_writer_feeds_both() {
        let (grid, _, report) = super::helpers::corridor_run();
        let dir = tempfile::tempdir().unwrap();
        let json = JsonWriter::new(dir.path().join("run.json"), RunParams::for_grid(&grid));
        let csv = CsvWriter::new(dir.path()).unwrap();
        let mut both = (json, csv);
        write_report(&mut both, &report).unwrap();
        assert!(dir.path().join("run.json").exists());
        assert!(dir.path().join(crate::csv::AGENTS_FILE).exists());
    }

    #[test]
    fn observer_keeps_write_error() {
        let (grid, requests, _) = super::helpers::corridor_run();
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("absent").join("run.json");
        let mut obs = PlanOutputObserver::new(JsonWriter::new(bad, RunParams::for_grid(&grid)));
        let mut planner =
            mapf_plan::SequentialPlanner::new(&grid, mapf_core::PlannerConfig::default()).unwrap();
        planner.plan(&requests, &mut obs);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }
}

// ── ASCII ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ascii {
    use mapf_core::{AgentId, PlannerConfig, PlanningRequest, Position};
    use mapf_grid::GridWorldBuilder;
    use mapf_plan::plan_paths;

    use crate::render_ascii;

    #[test]
    fn corridor_rendering() {
        let (grid, _, report) = super::helpers::corridor_run();
        // Rows are x = 4 down to x = 0; one column (y = 0).  Agent 1 failed,
        // so only its start (B at x=4) and goal (* at x=0) are drawn, on top
        // of agent 0's path.
        assert_eq!(render_ascii(&grid, &report), "B\na\na\na\n*\n");
    }

    #[test]
    fn obstacles_and_orientation() {
        let mut b = GridWorldBuilder::new(2, 3);
        b.block(Position::new(1, 2)).unwrap();
        let grid = b.build();
        let requests = [PlanningRequest::new(AgentId(0), Position::new(0, 0), Position::new(0, 2))];
        let report = plan_paths(&grid, &requests, PlannerConfig::default()).unwrap();
        assert_eq!(render_ascii(&grid, &report), "..#\nAa*\n");
    }
}
