//! `mapf-grid`: the static occupancy map agents move over.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`world`]    | `GridWorld` (immutable 0/1 occupancy), `GridWorldBuilder`   |
//! | [`loader`]   | `load_grid_file` / `load_grid_reader` for `0`/`1` text maps |
//! | [`layout`]   | `warehouse_layout`: the 86 × 124 shelf-and-aisle floor    |
//! | [`scenario`] | `random_requests`: seeded random start/goal sets           |
//! | [`error`]    | `GridError`, `GridResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod layout;
pub mod loader;
pub mod scenario;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use layout::warehouse_layout;
pub use loader::{load_grid_file, load_grid_reader, to_map_text};
pub use scenario::random_requests;
pub use world::{GridWorld, GridWorldBuilder};
