//! `mapf-plan`: priority-ordered multi-agent path planning.
//!
//! # Pipeline
//!
//! ```text
//! for request in requests (in priority order):
//!   ① Validate   start/goal in bounds and free, agent id unique.
//!   ② Search     time-expanded A* over (position, step), skipping every
//!                (position, step) already held by an earlier agent.
//!   ③ Commit     reserve every (path[t], t) under the agent's id.
//!   ④ Record     success or typed failure; earlier agents are never rolled back.
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`path`]        | `Path`: one position per step                            |
//! | [`reservation`] | `ReservationTable`                                        |
//! | [`search`]      | `TimeExpandedSearch`, `SearchStats`, `SearchReport`       |
//! | [`planner`]     | `SequentialPlanner`, `PlanReport`, `plan_paths`           |
//! | [`observer`]    | `PlanObserver`, `NoopObserver`                            |
//! | [`cancel`]      | `CancelToken`                                             |
//! | [`error`]       | `PlanError`, `RequestIssue`, `Budget`, `PlanResult<T>`    |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for state lookups.             |
//!
//! # Quick-start
//!
//! ```
//! use mapf_core::{PlannerConfig, PlanningRequest, Position};
//! use mapf_grid::GridWorldBuilder;
//! use mapf_plan::plan_paths;
//!
//! let grid = GridWorldBuilder::square(10).build();
//! let requests = PlanningRequest::from_pairs(
//!     &[Position::new(0, 0), Position::new(1, 0)],
//!     &[Position::new(0, 9), Position::new(1, 9)],
//! );
//! let report = plan_paths(&grid, &requests, PlannerConfig::default()).unwrap();
//! assert!(report.all_planned());
//! assert!(report.vertex_conflicts().is_empty());
//! ```

pub mod cancel;
pub mod error;
pub mod observer;
pub mod path;
pub mod planner;
pub mod reservation;
pub mod search;


pub use cancel::CancelToken;
pub use error::{Budget, PlanError, PlanResult, RequestIssue};
pub use observer::{NoopObserver, PlanObserver};
pub use path::Path;
pub use planner::{AgentOutcome, Conflict, ConflictKind, PlanReport, SequentialPlanner, plan_paths};
pub use reservation::ReservationTable;
pub use search::{SearchReport, SearchStats, TimeExpandedSearch, validate_request};

// ── Hashing ───────────────────────────────────────────────────────────────────

#[cfg(feature = "fx-hash")]
pub(crate) type StateMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type StateMap<K, V> = std::collections::HashMap<K, V>;

#[cfg(feature = "fx-hash")]
pub(crate) type StateSet<K> = rustc_hash::FxHashSet<K>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type StateSet<K> = std::collections::HashSet<K>;
