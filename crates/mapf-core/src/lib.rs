//! `mapf-core`: foundational types for the `mapf` multi-agent planning workspace.
//!
//! This crate is a dependency of every other `mapf-*` crate.  It intentionally
//! has no `mapf-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`position`]    | `Position`, Manhattan distance, 4-neighbourhood       |
//! | [`request`]     | `PlanningRequest`: one agent's start/goal            |
//! | [`step`]        | `Step`: the discrete time axis                       |
//! | [`config`]      | `PlannerConfig`                                       |
//! | [`error`]       | `MapfError`, `MapfResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod position;
pub mod request;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{MapfError, MapfResult};
pub use ids::AgentId;
pub use position::Position;
pub use request::PlanningRequest;
pub use step::Step;
