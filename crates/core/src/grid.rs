//! Grid module - holds the tile values
//!
//! The grid is a 4x4 array where each cell is empty (0) or a tile (a power of two >= 2).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x is the column 0..3 (left to right), y is the row 0..3
//! (top to bottom).

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, CELL_COUNT, GRID_SIZE, MAX_TILE};

/// Rejected grid construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A non-zero cell that is not a power of two in `2..=MAX_TILE`
    InvalidTile { x: u8, y: u8, value: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidTile { x, y, value } => {
                write!(f, "invalid tile {} at ({}, {})", value, x, y)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// True for 0 (empty) and powers of two from 2 up to [`MAX_TILE`]
///
/// The cap keeps every merge result well inside `u32`.
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

/// The 4x4 game grid using flat row-major storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * GRID_SIZE + x)
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub const fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a grid from rows, validating every tile
    ///
    /// `rows[y][x]` is the cell at column `x`, row `y`.
    pub fn from_rows(rows: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile {
                        x: x as u8,
                        y: y as u8,
                        value,
                    });
                }
                grid.cells[y * GRID_SIZE + x] = value;
            }
        }
        Ok(grid)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_SIZE as i8 || y < 0 || y >= GRID_SIZE as i8 {
            return None;
        }
        Some((y as usize) * GRID_SIZE + (x as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, value: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(0))
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy out as rows (`rows[y][x]`)
    pub fn rows(&self) -> [[Cell; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0; GRID_SIZE]; GRID_SIZE];
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * GRID_SIZE..(y + 1) * GRID_SIZE]);
        }
        out
    }

    /// Positions `(x, y)` of all empty cells in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(i8, i8), CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| ((i % GRID_SIZE) as i8, (i / GRID_SIZE) as i8))
            .collect()
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Largest tile on the grid (0 for an empty grid)
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Check the tile invariant over every cell
    pub fn is_well_formed(&self) -> bool {
        self.cells.iter().all(|&v| is_valid_tile(v))
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }
}
