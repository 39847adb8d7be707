//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 4x4 grid:
//!
//! - **Columns**: `x` in 0..=3 (left to right)
//! - **Rows**: `y` in 0..=3 (top to bottom)
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//! | `MAX_TILE` | 131072 | Largest tile a 4x4 game can build |
//! | `INITIAL_TILES` | 2 | Tiles spawned on start/restart |
//! | `SPAWN_TWO_PERCENT` | 90 | Chance that a spawned tile is a 2 (else 4) |
//! | `SWIPE_THRESHOLD_PX` | 30.0 | Minimum pointer travel for a swipe |
//! | `FRAME_MS` | 50 | Event poll timeout of the terminal loop |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameStatus, GRID_SIZE, WIN_TILE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("LEFT").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.delta(), (-1, 0));
//!
//! // Parse a game action
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert!(GameStatus::Won.is_terminal());
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// Grid side length (4 columns, 4 rows)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Reaching this tile value wins the game
pub const WIN_TILE: u32 = 2048;

/// Largest reachable tile: 2^17, built from sixteen cells when 4s spawn
pub const MAX_TILE: u32 = 1 << 17;

/// Number of tiles placed on a fresh grid
pub const INITIAL_TILES: usize = 2;

/// Probability (in percent) that a spawned tile is a 2 rather than a 4
pub const SPAWN_TWO_PERCENT: u32 = 90;

/// Minimum dominant-axis travel for a pointer swipe, in device-independent pixels
pub const SWIPE_THRESHOLD_PX: f32 = 30.0;

/// Minimum dominant-axis travel for a mouse drag in a terminal, in cells
///
/// Vertical travel is scaled by [`TERMINAL_CELL_ASPECT`] before comparison.
pub const MOUSE_SWIPE_THRESHOLD_CELLS: f32 = 3.0;

/// Approximate height/width ratio of a terminal glyph cell
pub const TERMINAL_CELL_ASPECT: f32 = 2.0;

/// Event poll timeout of the terminal loop in milliseconds
pub const FRAME_MS: u32 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_rule_constants() {
        assert_eq!(GRID_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(WIN_TILE, 2048);
        assert_eq!(MAX_TILE, 131072);
        assert_eq!(INITIAL_TILES, 2);
        assert_eq!(SPAWN_TWO_PERCENT, 90);
        assert_eq!(SWIPE_THRESHOLD_PX, 30.0);
    }

    #[test]
    fn direction_deltas_point_toward_edges() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn toward_high_end_only_for_right_and_down() {
        assert!(Direction::Right.toward_high_end());
        assert!(Direction::Down.toward_high_end());
        assert!(!Direction::Left.toward_high_end());
        assert!(!Direction::Up.toward_high_end());
    }

    #[test]
    fn action_strings_round_trip() {
        for action in [
            GameAction::Move(Direction::Up),
            GameAction::Move(Direction::Down),
            GameAction::Move(Direction::Left),
            GameAction::Move(Direction::Right),
            GameAction::Undo,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}

/// The four move directions
///
/// A move pushes every tile toward the named edge of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Unit step `(dx, dy)` toward the target edge
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True when the move pushes tiles toward the higher-indexed edge
    pub fn toward_high_end(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Game lifecycle status
///
/// - **Playing**: moves are accepted
/// - **Won**: a [`WIN_TILE`] exists on the grid
/// - **Lost**: the grid is full and no adjacent pair can merge
///
/// `Won` and `Lost` are terminal until restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Player-facing notice shown by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    Won,
    Lost,
    Undone,
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by keyboard and swipe input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Slide and merge all tiles toward an edge
    Move(Direction),
    /// Restore the state before the last move (one level only)
    Undo,
    /// Start a fresh game, keeping the best score
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "undo" => Some(GameAction::Undo),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Undo => "undo",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the grid
///
/// `0` is an empty cell; any other value is a tile (a power of two >= 2).
pub type Cell = u32;
