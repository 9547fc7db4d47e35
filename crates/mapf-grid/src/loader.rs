//! Text map loader.
//!
//! # Format
//!
//! One line per grid row, one character per cell:
//!
//! ```text
//! 0000
//! 0110
//! 0000
//! ```
//!
//! | Char | Meaning  |
//! |------|----------|
//! | `0`  | free     |
//! | `1`  | obstacle |
//!
//! The file is written top-down, so the **last** line becomes `x = 0` and
//! the first line `x = rows - 1`.  Within a line, the character index is
//! `y`.  Blank lines (including a trailing newline) are skipped; every
//! other line must have the same length.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use mapf_core::Position;

use crate::{GridError, GridResult, GridWorld, GridWorldBuilder};

/// Load a [`GridWorld`] from a `0`/`1` text file.
pub fn load_grid_file(path: &Path) -> GridResult<GridWorld> {
    let file = std::fs::File::open(path)?;
    load_grid_reader(file)
}

/// Like [`load_grid_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded maps.
pub fn load_grid_reader<R: Read>(reader: R) -> GridResult<GridWorld> {
    // ── Parse rows ────────────────────────────────────────────────────────
    let mut rows: Vec<Vec<bool>> = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GridError::Parse {
                    line:   i + 1,
                    reason: format!("unexpected character {other:?}: expected '0' or '1'"),
                }),
            })
            .collect::<GridResult<Vec<bool>>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(GridError::Parse {
                    line:   i + 1,
                    reason: format!("row has {} cells, expected {}", row.len(), first.len()),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(GridError::EmptyMap);
    }

    // ── Flip rows into grid coordinates ───────────────────────────────────
    let width = rows.len() as u32;
    let height = rows[0].len() as u32;
    let mut builder = GridWorldBuilder::new(width, height);
    for (x, row) in rows.iter().rev().enumerate() {
        for (y, &blocked) in row.iter().enumerate() {
            if blocked {
                builder.block(Position::new(x as i32, y as i32))?;
            }
        }
    }
    Ok(builder.build())
}

/// Render a grid back into the text format accepted by [`load_grid_reader`].
pub fn to_map_text(grid: &GridWorld) -> String {
    let mut out = String::with_capacity(grid.cell_count() + grid.width() as usize);
    for x in (0..grid.width() as i32).rev() {
        for y in 0..grid.height() as i32 {
            out.push(if grid.is_blocked(Position::new(x, y)) { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}
