//! Spawner - places a new tile on a random empty cell

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{Cell, SPAWN_TWO_PERCENT};

/// A tile placed by [`spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub x: i8,
    pub y: i8,
    pub value: Cell,
}

/// Place a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
///
/// Returns None and leaves the grid untouched when it is full.
pub fn spawn_tile(grid: &mut Grid, rng: &mut SimpleRng) -> Option<SpawnedTile> {
    let empty = grid.empty_cells();
    let (x, y) = rng.choose(&empty)?;
    let value = if rng.chance_percent(SPAWN_TWO_PERCENT) {
        2
    } else {
        4
    };
    grid.set(x, y, value);
    Some(SpawnedTile { x, y, value })
}
