//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `MapfError` where a
//! configuration or parse failure has to cross a crate boundary.

use thiserror::Error;

/// The top-level error type for `mapf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MapfError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `mapf-*` crates.
pub type MapfResult<T> = Result<T, MapfError>;
