//! Plain-text rendering of a grid and the planned paths on it.
//!
//! | Glyph        | Meaning                                   |
//! |--------------|-------------------------------------------|
//! | `#`          | obstacle                                  |
//! | `.`          | free cell                                 |
//! | `a`..`z`     | cell on the path of the n-th agent        |
//! | `A`..`Z`     | start of the n-th agent                   |
//! | `*`          | goal of any agent                         |
//!
//! Agents are lettered by their position in the report, wrapping after 26.
//! Rows run from the highest `x` at the top to `x = 0` at the bottom, one
//! column per `y`, the same orientation as the text map format.  Where paths
//! overlap the later agent's glyph wins; starts and goals are drawn last.

use mapf_core::Position;
use mapf_grid::GridWorld;
use mapf_plan::PlanReport;

fn letter(i: usize, upper: bool) -> char {
    let base = if upper { b'A' } else { b'a' };
    char::from(base + (i % 26) as u8)
}

pub fn render_ascii(grid: &GridWorld, report: &PlanReport) -> String {
    let (w, h) = (grid.width() as usize, grid.height() as usize);
    let mut canvas: Vec<Vec<char>> = (0..w)
        .map(|x| {
            (0..h)
                .map(|y| if grid.is_blocked(Position::new(x as i32, y as i32)) { '#' } else { '.' })
                .collect()
        })
        .collect();

    let mut put = |pos: Position, c: char| {
        if grid.in_bounds(pos) {
            canvas[pos.x as usize][pos.y as usize] = c;
        }
    };

    for (i, outcome) in report.outcomes.iter().enumerate() {
        if let Ok(path) = &outcome.result {
            for &cell in path.cells() {
                put(cell, letter(i, false));
            }
        }
    }
    for (i, outcome) in report.outcomes.iter().enumerate() {
        put(outcome.request.start, letter(i, true));
        put(outcome.request.goal, '*');
    }

    let mut out = String::with_capacity(w * (h + 1));
    for row in canvas.iter().rev() {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
