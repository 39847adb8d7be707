//! Terminal checker - decides Playing / Won / Lost from a grid
//!
//! Won is checked before Lost. Loss uses an adjacency scan instead of
//! simulating the four moves: a full grid can only change if two orthogonal
//! neighbours hold the same value.

use crate::grid::Grid;
use crate::types::{GameStatus, GRID_SIZE, WIN_TILE};

/// True once any tile has reached [`WIN_TILE`]
pub fn has_won(grid: &Grid) -> bool {
    grid.max_tile() >= WIN_TILE
}

/// True if at least one direction would change the grid
pub fn has_legal_move(grid: &Grid) -> bool {
    let n = GRID_SIZE as i8;
    for y in 0..n {
        for x in 0..n {
            let v = grid.get(x, y).unwrap_or(0);
            if v == 0 {
                return true;
            }
            if grid.get(x + 1, y) == Some(v) || grid.get(x, y + 1) == Some(v) {
                return true;
            }
        }
    }
    false
}

pub fn evaluate(grid: &Grid) -> GameStatus {
    if has_won(grid) {
        GameStatus::Won
    } else if !has_legal_move(grid) {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::can_move_in;
    use crate::types::Direction;

    const CHECKER: [[u32; 4]; 4] = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];

    #[test]
    fn test_checkerboard_is_lost() {
        let grid = Grid::from_rows(CHECKER).unwrap();
        assert_eq!(evaluate(&grid), GameStatus::Lost);
    }

    #[test]
    fn test_one_horizontal_pair_keeps_playing() {
        let mut rows = CHECKER;
        rows[3][3] = 4; // now equal to rows[3][2]
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(evaluate(&grid), GameStatus::Playing);
    }

    #[test]
    fn test_one_vertical_pair_keeps_playing() {
        let mut rows = CHECKER;
        rows[0][0] = 4; // now equal to rows[1][0]
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(evaluate(&grid), GameStatus::Playing);
    }

    #[test]
    fn test_win_tile_wins_even_when_stuck() {
        let mut rows = CHECKER;
        rows[1][1] = 2048;
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(evaluate(&grid), GameStatus::Won);

        let mut grid = Grid::new();
        grid.set(0, 0, 2048);
        assert_eq!(evaluate(&grid), GameStatus::Won);
    }

    #[test]
    fn test_empty_cell_keeps_playing() {
        let mut rows = CHECKER;
        rows[2][1] = 0;
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(evaluate(&grid), GameStatus::Playing);
    }

    #[test]
    fn test_adjacency_scan_matches_move_simulation() {
        let mut rng = crate::rng::SimpleRng::new(2024);
        for _ in 0..500 {
            let mut rows = [[0u32; 4]; 4];
            for row in rows.iter_mut() {
                for v in row.iter_mut() {
                    // Mostly full grids with small values so both outcomes occur.
                    *v = match rng.next_range(5) {
                        0 => 0,
                        k => 1 << k,
                    };
                }
            }
            let grid = Grid::from_rows(rows).unwrap();
            let simulated = Direction::ALL.iter().any(|&d| can_move_in(&grid, d));
            assert_eq!(has_legal_move(&grid), simulated, "grid {:?}", rows);
        }
    }
}
