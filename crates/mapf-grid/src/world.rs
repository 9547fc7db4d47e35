//! Occupancy grid and builder.
//!
//! # Data layout
//!
//! Cells are stored in a flat `Vec<bool>` (`true` = blocked), row-major by
//! `y`:
//!
//! ```text
//! blocked[ y * width + x ]
//! ```
//!
//! The grid spans `x ∈ [0, width)` and `y ∈ [0, height)`.  A square `N×N`
//! map is the common case (`GridWorldBuilder::square`).  Once built the grid
//! is immutable; every query is a pure read.

use mapf_core::Position;

use crate::{GridError, GridResult};

// ── GridWorld ─────────────────────────────────────────────────────────────────

/// Static free/blocked occupancy map.
///
/// Do not construct directly; use [`GridWorldBuilder`], the text
/// [`loader`](crate::loader), or [`warehouse_layout`](crate::warehouse_layout).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWorld {
    width:      u32,
    height:     u32,
    blocked:    Vec<bool>,
    free_count: usize,
}

impl GridWorld {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, free or blocked.
    pub fn cell_count(&self) -> usize {
        self.blocked.len()
    }

    /// Number of cells an agent may occupy.
    pub fn free_count(&self) -> usize {
        self.free_count
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    /// Flat index of `pos`, or `None` if it lies outside the grid.
    #[inline]
    fn cell_index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// `true` iff `pos` is inside the grid and not an obstacle.
    #[inline]
    pub fn is_free(&self, pos: Position) -> bool {
        self.cell_index(pos).is_some_and(|i| !self.blocked[i])
    }

    /// `true` iff `pos` is inside the grid and an obstacle.
    #[inline]
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.cell_index(pos).is_some_and(|i| self.blocked[i])
    }

    /// In-bounds, free orthogonal neighbours of `pos`, in the fixed order
    /// `+x, +y, −x, −y`.  No diagonals.
    #[inline]
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Position::ORTHOGONAL
            .iter()
            .map(move |&(dx, dy)| pos.offset(dx, dy))
            .filter(|&p| self.is_free(p))
    }

    /// Every blocked cell, ascending by `y` then `x`.
    pub fn obstacles(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as usize;
        self.blocked
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(move |(i, _)| Position::new((i % width) as i32, (i / width) as i32))
    }

    /// Every free cell, ascending by `y` then `x`.
    pub fn free_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as usize;
        self.blocked
            .iter()
            .enumerate()
            .filter(|&(_, &b)| !b)
            .map(move |(i, _)| Position::new((i % width) as i32, (i / width) as i32))
    }
}

// ── GridWorldBuilder ──────────────────────────────────────────────────────────

/// Construct a [`GridWorld`] incrementally, then call [`build`](Self::build).
///
/// All cells start free.
///
/// # Example
///
/// ```
/// use mapf_core::Position;
/// use mapf_grid::GridWorldBuilder;
///
/// let mut b = GridWorldBuilder::square(3);
/// b.block(Position::new(1, 1)).unwrap();
/// let grid = b.build();
/// assert_eq!(grid.free_count(), 8);
/// assert!(!grid.is_free(Position::new(1, 1)));
/// ```
pub struct GridWorldBuilder {
    width:   u32,
    height:  u32,
    blocked: Vec<bool>,
}

impl GridWorldBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            blocked: vec![false; width as usize * height as usize],
        }
    }

    /// An `n × n` grid.
    pub fn square(n: u32) -> Self {
        Self::new(n, n)
    }

    fn index(&self, pos: Position) -> GridResult<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x as u32 >= self.width || pos.y as u32 >= self.height {
            return Err(GridError::OutOfBounds { pos, width: self.width, height: self.height });
        }
        Ok(pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Mark one cell as an obstacle.
    pub fn block(&mut self, pos: Position) -> GridResult<&mut Self> {
        let i = self.index(pos)?;
        self.blocked[i] = true;
        Ok(self)
    }

    /// Mark every cell in `x0..x1 × y0..y1` (half-open) as an obstacle.
    /// The rectangle is clipped to the grid.
    pub fn block_rect(&mut self, x0: i32, x1: i32, y0: i32, y1: i32) -> &mut Self {
        let x_range = x0.max(0)..x1.min(self.width as i32);
        let y_range = y0.max(0)..y1.min(self.height as i32);
        for y in y_range {
            for x in x_range.clone() {
                self.blocked[y as usize * self.width as usize + x as usize] = true;
            }
        }
        self
    }

    /// Clear an obstacle.
    pub fn unblock(&mut self, pos: Position) -> GridResult<&mut Self> {
        let i = self.index(pos)?;
        self.blocked[i] = false;
        Ok(self)
    }

    /// Consume the builder and produce an immutable [`GridWorld`].
    pub fn build(self) -> GridWorld {
        let free_count = self.blocked.iter().filter(|&&b| !b).count();
        GridWorld {
            width: self.width,
            height: self.height,
            blocked: self.blocked,
            free_count,
        }
    }
}
