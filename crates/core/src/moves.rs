//! Move engine - slides and merges tiles toward one edge
//!
//! Cells are visited in sweep order toward the target edge: for right/down
//! moves both axes are walked from index 3 down to 0, otherwise from 0 up to 3.
//! This guarantees a tile nearer the target edge has already settled before a
//! tile behind it slides into it.
//!
//! Each tile slides through empty cells until it hits the edge or another tile.
//! When the blocking tile has the same value and was not produced by a merge
//! during this move, the two combine into one tile of double value. A merge
//! destination is flagged so `[2, 2, 2, 2]` moved left becomes `[4, 4, 0, 0]`
//! rather than `[8, 0, 0, 0]`.

use crate::grid::Grid;
use crate::types::{Direction, GRID_SIZE};

/// Result of applying one move to a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Grid after sliding and merging (no spawn yet)
    pub grid: Grid,
    /// Sum of all tile values produced by merges
    pub score_delta: u32,
    /// True if any tile moved or merged
    pub moved: bool,
    /// Number of merges performed
    pub merges: u32,
}

/// Index order along one axis for the given direction
#[inline]
fn sweep_order(direction: Direction) -> [i8; GRID_SIZE] {
    if direction.toward_high_end() {
        [3, 2, 1, 0]
    } else {
        [0, 1, 2, 3]
    }
}

/// Apply a move to `grid` and return the transformed grid.
///
/// The input grid is not modified.
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut next = *grid;
    // Merge destinations produced during this move.
    let mut merged = [[false; GRID_SIZE]; GRID_SIZE];
    let (dx, dy) = direction.delta();
    let order = sweep_order(direction);

    let mut score_delta: u32 = 0;
    let mut merges: u32 = 0;
    let mut moved = false;

    for &y in &order {
        for &x in &order {
            let value = match next.get(x, y) {
                Some(v) if v != 0 => v,
                _ => continue,
            };

            // Slide through empty cells.
            let (mut cx, mut cy) = (x, y);
            while next.is_empty_at(cx + dx, cy + dy) {
                next.set(cx + dx, cy + dy, value);
                next.set(cx, cy, 0);
                cx += dx;
                cy += dy;
                moved = true;
            }

            // Merge into the blocking tile if it matches and is still fresh.
            let (tx, ty) = (cx + dx, cy + dy);
            if next.get(tx, ty) == Some(value) && !merged[ty as usize][tx as usize] {
                // Tiles placed with `Grid::set` skip validation, so never overflow.
                let combined = value.saturating_mul(2);
                next.set(tx, ty, combined);
                next.set(cx, cy, 0);
                merged[ty as usize][tx as usize] = true;
                score_delta = score_delta.saturating_add(combined);
                merges += 1;
                moved = true;
            }
        }
    }

    MoveOutcome {
        grid: next,
        score_delta,
        moved,
        merges,
    }
}

/// True if moving in `direction` would change the grid
pub fn can_move_in(grid: &Grid, direction: Direction) -> bool {
    apply_move(grid, direction).moved
}
