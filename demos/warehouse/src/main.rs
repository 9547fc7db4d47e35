//! warehouse: plans a fleet of guided vehicles across the warehouse floor.
//!
//! Four vehicles leave the loading bay at x = 0 for pick stations deep in the
//! racks.  Each is planned in turn against the commitments of the ones before
//! it, and the run is written as a JSON record, two CSV tables and an ASCII
//! rendering of the floor.
//!
//! ```text
//! warehouse [--config planner.toml] [--map floor.txt] [--random N --seed S] [--out DIR] [--render] [--fleet-json]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mapf_core::{AgentId, PlannerConfig, PlanningRequest, Position};
use mapf_grid::{GridWorld, load_grid_file, random_requests, warehouse_layout};
use mapf_output::{CsvWriter, JsonLayout, JsonWriter, PlanOutputObserver, RunParams, render_ascii};
use mapf_plan::SequentialPlanner;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;

/// `(start, goal)` per vehicle, in priority order.
const FLEET: [((i32, i32), (i32, i32)); 4] = [
    ((0, 0), (80, 80)),
    ((0, 3), (76, 80)),
    ((0, 5), (72, 80)),
    ((0, 7), (68, 80)),
];

/// Parameters of the surrounding fleet simulation, recorded with every run.
const SIM_PARAMS: [(&str, f64); 4] = [("k", 50.0), ("n", 3.0), ("T", 100.0), ("b", 2.0)];

const RUN_FILE:    &str = "run.json";
const RENDER_FILE: &str = "floor.txt";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "warehouse", about = "Plan conflict-free routes for a warehouse vehicle fleet")]
struct Args {
    /// Planner settings (TOML).  Defaults apply to every missing key.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load the floor from a 0/1 text map instead of the built-in layout.
    #[arg(long)]
    map: Option<PathBuf>,

    /// Plan N random start/goal pairs instead of the fixed fleet.
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for `--random`.
    #[arg(long, default_value_t = SEED)]
    seed: u64,

    /// Output directory.
    #[arg(long, default_value = "output/warehouse")]
    out: PathBuf,

    /// Also print the rendered floor to stdout.
    #[arg(long)]
    render: bool,

    /// Write `run.json` in the fleet simulator's layout (flat parameters,
    /// `LGVs`, 1-based ids).
    #[arg(long)]
    fleet_json: bool,
}

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        info!("using default planner configuration");
        return Ok(PlannerConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: PlannerConfig =
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    config.validate()?;
    info!(path = %path.display(), ?config, "loaded planner configuration");
    Ok(config)
}

fn load_floor(map: Option<&Path>) -> Result<GridWorld> {
    match map {
        Some(path) => load_grid_file(path).with_context(|| format!("loading map {}", path.display())),
        None => Ok(warehouse_layout()),
    }
}

fn fleet_requests() -> Vec<PlanningRequest> {
    FLEET
        .iter()
        .enumerate()
        .map(|(i, &(start, goal))| {
            PlanningRequest::new(AgentId(i as u32), Position::from(start), Position::from(goal))
        })
        .collect()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // 1. Configuration and floor.
    let config = load_config(args.config.as_deref())?;
    let grid = load_floor(args.map.as_deref())?;
    println!(
        "Floor: {} × {} cells, {} free, {} blocked",
        grid.width(),
        grid.height(),
        grid.free_count(),
        grid.cell_count() - grid.free_count()
    );

    // 2. Requests.
    let requests = match args.random {
        Some(n) => random_requests(&grid, n, args.seed)
            .with_context(|| format!("drawing {n} random requests"))?,
        None => fleet_requests(),
    };
    println!("Requests: {}", requests.len());

    // 3. Output.
    fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let params = SIM_PARAMS
        .iter()
        .fold(RunParams::for_grid(&grid), |p, &(name, value)| p.with(name, value));
    let layout = if args.fleet_json { JsonLayout::Fleet } else { JsonLayout::Run };
    let json = JsonWriter::new(args.out.join(RUN_FILE), params).with_layout(layout);
    let csv = CsvWriter::new(&args.out)?;
    let mut obs = PlanOutputObserver::new((json, csv));

    // 4. Plan.
    let mut planner = SequentialPlanner::new(&grid, config)?;
    let t0 = Instant::now();
    let report = planner.plan(&requests, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing run output");
    }

    let floor = render_ascii(&grid, &report);
    fs::write(args.out.join(RENDER_FILE), &floor)?;
    if args.render {
        print!("{floor}");
    }

    // 5. Summary.
    println!(
        "Planned {}/{} agents in {:.3} s ({} expansions)",
        report.planned_count(),
        report.outcomes.len(),
        elapsed.as_secs_f64(),
        report.total_expanded()
    );
    println!("Output written to {}", args.out.display());
    println!();
    println!("{:<12} {:<12} {:<12} {:<16} {:>8} {:>10}", "Agent", "Start", "Goal", "Status", "Steps", "Expanded");
    println!("{}", "-".repeat(75));
    for outcome in &report.outcomes {
        let r = &outcome.request;
        let (status, steps) = match &outcome.result {
            Ok(path) => ("planned", path.arrival_step().0.to_string()),
            Err(e) => (e.kind(), "-".to_string()),
        };
        println!(
            "{:<12} {:<12} {:<12} {:<16} {:>8} {:>10}",
            r.agent.to_string(),
            r.start.to_string(),
            r.goal.to_string(),
            status,
            steps,
            outcome.stats.expanded
        );
    }

    let mut conflicts = report.vertex_conflicts().len();
    if planner.config().prevent_swaps {
        conflicts += report.edge_conflicts().len();
    }
    if conflicts > 0 {
        anyhow::bail!("{conflicts} conflicts between planned agents");
    }
    Ok(())
}
