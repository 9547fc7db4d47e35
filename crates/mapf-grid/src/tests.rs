//! Unit tests for mapf-grid.
//!
//! Maps are built in code or from embedded text so no fixture files are
//! needed.

#[cfg(test)]
mod helpers {
    use mapf_core::Position;
    use crate::{GridWorld, GridWorldBuilder};

    /// 3×3 grid with the centre blocked.
    ///
    /// ```text
    ///   y→ 0 1 2
    /// x=2  . . .
    /// x=1  . # .
    /// x=0  . . .
    /// ```
    pub fn ring() -> GridWorld {
        let mut b = GridWorldBuilder::square(3);
        b.block(Position::new(1, 1)).unwrap();
        b.build()
    }
}

// ── Builder & queries ─────────────────────────────────────────────────────────

#[cfg(test)]
mod world {
    use mapf_core::Position;
    use crate::{GridError, GridWorldBuilder};

    #[test]
    fn empty_square() {
        let grid = GridWorldBuilder::square(10).build();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 10);
        assert!(grid.is_square());
        assert_eq!(grid.cell_count(), 100);
        assert_eq!(grid.free_count(), 100);
        assert_eq!(grid.obstacles().count(), 0);
    }

    #[test]
    fn bounds_are_half_open() {
        let grid = GridWorldBuilder::new(4, 2).build();
        assert!(grid.is_free(Position::new(0, 0)));
        assert!(grid.is_free(Position::new(3, 1)));
        assert!(!grid.is_free(Position::new(4, 0)));
        assert!(!grid.is_free(Position::new(0, 2)));
        assert!(!grid.is_free(Position::new(-1, 0)));
        assert!(!grid.is_blocked(Position::new(-1, 0))); // out of bounds is neither
    }

    #[test]
    fn blocked_cell_is_not_free() {
        let grid = super::helpers::ring();
        assert!(grid.is_blocked(Position::new(1, 1)));
        assert!(!grid.is_free(Position::new(1, 1)));
        assert_eq!(grid.free_count(), 8);
        assert_eq!(grid.obstacles().collect::<Vec<_>>(), [Position::new(1, 1)]);
    }

    #[test]
    fn block_out_of_bounds_errors() {
        let mut b = GridWorldBuilder::square(2);
        let err = b.block(Position::new(2, 0)).err();
        assert!(matches!(err, Some(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn block_rect_is_clipped() {
        let mut b = GridWorldBuilder::square(4);
        b.block_rect(2, 10, -3, 1);
        let grid = b.build();
        assert_eq!(grid.free_count(), 14);
        assert!(grid.is_blocked(Position::new(2, 0)));
        assert!(grid.is_blocked(Position::new(3, 0)));
        assert!(grid.is_free(Position::new(2, 1)));
    }

    #[test]
    fn unblock_restores_cell() {
        let mut b = GridWorldBuilder::square(2);
        b.block_rect(0, 2, 0, 2);
        b.unblock(Position::new(1, 1)).unwrap();
        let grid = b.build();
        assert_eq!(grid.free_cells().collect::<Vec<_>>(), [Position::new(1, 1)]);
    }
}

// ── Neighbour enumeration ─────────────────────────────────────────────────────

#[cfg(test)]
mod neighbors {
    use mapf_core::Position;
    use crate::GridWorldBuilder;

    #[test]
    fn interior_order_is_fixed() {
        let grid = GridWorldBuilder::square(3).build();
        let n: Vec<_> = grid.neighbors(Position::new(1, 1)).collect();
        assert_eq!(
            n,
            [
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(0, 1),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn corner_drops_out_of_bounds() {
        let grid = GridWorldBuilder::square(3).build();
        let n: Vec<_> = grid.neighbors(Position::new(0, 0)).collect();
        assert_eq!(n, [Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn obstacles_are_skipped() {
        let grid = super::helpers::ring();
        let n: Vec<_> = grid.neighbors(Position::new(0, 1)).collect();
        // +x is the blocked centre.
        assert_eq!(n, [Position::new(0, 2), Position::new(0, 0)]);
    }

    #[test]
    fn isolated_cell_has_none() {
        let mut b = GridWorldBuilder::square(3);
        b.block_rect(0, 3, 0, 3);
        b.unblock(Position::new(1, 1)).unwrap();
        let grid = b.build();
        assert_eq!(grid.neighbors(Position::new(1, 1)).count(), 0);
    }
}

// ── Text loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use mapf_core::Position;
    use crate::{GridError, load_grid_file, load_grid_reader, to_map_text};

    #[test]
    fn last_line_is_x_zero() {
        let text = "100\n000\n001\n";
        let grid = load_grid_reader(Cursor::new(text)).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        // Last line "001" → x = 0, blocked at y = 2.
        assert!(grid.is_blocked(Position::new(0, 2)));
        // First line "100" → x = 2, blocked at y = 0.
        assert!(grid.is_blocked(Position::new(2, 0)));
        assert_eq!(grid.free_count(), 7);
    }

    #[test]
    fn rectangular_map() {
        let grid = load_grid_reader(Cursor::new("0000\n0000\n")).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 4);
        assert!(!grid.is_square());
    }

    #[test]
    fn blank_lines_skipped() {
        let grid = load_grid_reader(Cursor::new("\n01\n\n10\n\n")).unwrap();
        assert_eq!(grid.cell_count(), 4);
    }

    #[test]
    fn bad_character_reports_line() {
        let err = load_grid_reader(Cursor::new("00\n0x\n")).unwrap_err();
        assert!(matches!(err, GridError::Parse { line: 2, .. }), "got {err}");
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = load_grid_reader(Cursor::new("000\n00\n")).unwrap_err();
        assert!(matches!(err, GridError::Parse { line: 2, .. }));
    }

    #[test]
    fn empty_map_rejected() {
        let err = load_grid_reader(Cursor::new("\n\n")).unwrap_err();
        assert!(matches!(err, GridError::EmptyMap));
    }

    #[test]
    fn text_round_trip() {
        let text = "0110\n0000\n1001\n";
        let grid = load_grid_reader(Cursor::new(text)).unwrap();
        assert_eq!(to_map_text(&grid), text);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_grid_file(std::path::Path::new("/nonexistent/map.txt")).unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }
}

// ── Warehouse layout ──────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use mapf_core::Position;
    use crate::layout::{WAREHOUSE_HEIGHT, WAREHOUSE_WIDTH};
    use crate::warehouse_layout;

    #[test]
    fn dimensions_and_obstacle_count() {
        let grid = warehouse_layout();
        assert_eq!(grid.width(), WAREHOUSE_WIDTH);
        assert_eq!(grid.height(), WAREHOUSE_HEIGHT);
        // 960 + 1320 + 1344 + 168 shelf cells.
        assert_eq!(grid.cell_count() - grid.free_count(), 3_792);
    }

    #[test]
    fn cross_aisles_are_open() {
        let grid = warehouse_layout();
        for x in [0, 3, 24, 27, 50, 53, 82, 85] {
            for y in 0..WAREHOUSE_HEIGHT as i32 {
                assert!(grid.is_free(Position::new(x, y)), "({x}, {y}) should be aisle");
            }
        }
    }

    #[test]
    fn shelf_columns_alternate() {
        let grid = warehouse_layout();
        // Middle band: shelves at y 4..8, aisle at y 8..12.
        assert!(grid.is_blocked(Position::new(30, 4)));
        assert!(grid.is_blocked(Position::new(30, 7)));
        assert!(grid.is_free(Position::new(30, 8)));
        assert!(grid.is_free(Position::new(30, 0)));
        // Lower band leaves a loading area below y = 28.
        assert!(grid.is_free(Position::new(10, 4)));
        assert!(grid.is_blocked(Position::new(10, 28)));
    }

    #[test]
    fn half_depth_shelves_at_far_end() {
        let grid = warehouse_layout();
        assert!(grid.is_blocked(Position::new(60, 100)));
        assert!(grid.is_free(Position::new(70, 100)));
        assert!(grid.is_blocked(Position::new(70, 92)));
    }

    #[test]
    fn fleet_endpoints_are_free() {
        let grid = warehouse_layout();
        for (x, y) in [(0, 0), (0, 3), (0, 5), (0, 7), (80, 80), (76, 80), (72, 80), (68, 80)] {
            assert!(grid.is_free(Position::new(x, y)), "({x}, {y})");
        }
    }
}

// ── Random scenarios ──────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario {
    use std::collections::HashSet;

    use mapf_core::AgentId;
    use crate::{GridError, GridWorldBuilder, random_requests};

    #[test]
    fn same_seed_same_requests() {
        let grid = super::helpers::ring();
        let a = random_requests(&grid, 4, 7).unwrap();
        let b = random_requests(&grid, 4, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn endpoints_free_and_distinct() {
        let grid = GridWorldBuilder::square(6).build();
        let reqs = random_requests(&grid, 10, 99).unwrap();
        assert_eq!(reqs.len(), 10);
        let starts: HashSet<_> = reqs.iter().map(|r| r.start).collect();
        let goals: HashSet<_> = reqs.iter().map(|r| r.goal).collect();
        assert_eq!(starts.len(), 10);
        assert_eq!(goals.len(), 10);
        for (i, r) in reqs.iter().enumerate() {
            assert_eq!(r.agent, AgentId(i as u32));
            assert!(grid.is_free(r.start));
            assert!(grid.is_free(r.goal));
        }
    }

    #[test]
    fn too_many_agents_rejected() {
        let grid = super::helpers::ring();
        let err = random_requests(&grid, 9, 1).unwrap_err();
        assert!(matches!(err, GridError::NotEnoughFreeCells { requested: 9, available: 8 }));
    }
}
