//! Warehouse floor layout.
//!
//! The floor is 86 cells along `x` and 124 along `y`.  Four cross aisles
//! (depth 4) run the full width at `x = 0..4, 24..28, 50..54, 82..86`.
//! Between them sit three shelf bands.  Each band is a run of 4-wide shelf
//! columns alternating with 4-wide picking aisles along `y`:
//!
//! ```text
//! x 54..82   shelves from y = 4 to y = 100, then three half-depth
//!            shelves (x 54..68 only) up to y = 124
//! x 28..50   shelves from y = 4 to y = 124
//! x  4..24   shelves from y = 28 to y = 124 (loading area below y = 28)
//! ```

use crate::{GridWorld, GridWorldBuilder};

pub const WAREHOUSE_WIDTH: u32 = 86;
pub const WAREHOUSE_HEIGHT: u32 = 124;

/// Width of one shelf column and of one picking aisle, in cells.
const SHELF_PITCH: i32 = 4;

/// A rectangle of alternating shelf / aisle columns.
struct ShelfBand {
    x0: i32,
    x1: i32,
    /// First shelf column starts here.
    y0: i32,
    /// Exclusive end of the band along `y`.
    y1: i32,
}

const BANDS: [ShelfBand; 4] = [
    ShelfBand { x0: 4,  x1: 24, y0: 28,  y1: 124 },
    ShelfBand { x0: 28, x1: 50, y0: 4,   y1: 124 },
    ShelfBand { x0: 54, x1: 82, y0: 4,   y1: 100 },
    ShelfBand { x0: 54, x1: 68, y0: 100, y1: 124 },
];

impl ShelfBand {
    fn apply(&self, b: &mut GridWorldBuilder) {
        let mut y = self.y0;
        while y < self.y1 {
            b.block_rect(self.x0, self.x1, y, (y + SHELF_PITCH).min(self.y1));
            y += 2 * SHELF_PITCH;
        }
    }
}

/// Build the 86 × 124 warehouse floor.
pub fn warehouse_layout() -> GridWorld {
    let mut b = GridWorldBuilder::new(WAREHOUSE_WIDTH, WAREHOUSE_HEIGHT);
    for band in &BANDS {
        band.apply(&mut b);
    }
    b.build()
}
