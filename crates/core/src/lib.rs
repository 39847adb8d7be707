//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has no
//! dependencies on terminal rendering or input handling, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Rules are checked against hand-built grids
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile grid with flat storage
//! - [`moves`]: Slide-and-merge move engine
//! - [`spawn`]: Random tile placement after a successful move
//! - [`status`]: Win/loss detection
//! - [`game_state`]: Game controller (score, best score, undo, restart)
//! - [`rng`]: Seedable LCG used by the spawner
//! - [`snapshot`]: Undo snapshot and the read-only view for renderers
//! - [`store`]: Best-score persistence capability
//!
//! # Game Rules
//!
//! - **Slide**: every tile moves toward the chosen edge until blocked
//! - **Merge**: two equal tiles combine once per move; the score grows by the new value
//! - **Spawn**: after a move that changed the grid, a 2 (90%) or 4 (10%) appears
//! - **Win**: a 2048 tile appears; **Loss**: the grid is full with no equal neighbours
//! - **Undo**: one level, restores grid and score
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, MemoryStore};
//! use tui_2048_types::{Direction, GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345, Box::new(MemoryStore::new()));
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! game.apply_action(GameAction::Move(Direction::Left));
//! game.apply_action(GameAction::Move(Direction::Up));
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert!(game.best() >= game.score());
//! ```

pub mod game_state;
pub mod grid;
pub mod moves;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod status;
pub mod store;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{ActionOutcome, GameState, MoveReport, UndoResult};
pub use grid::{Grid, GridError};
pub use moves::{apply_move, can_move_in, MoveOutcome};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, UndoSnapshot};
pub use spawn::{spawn_tile, SpawnedTile};
pub use store::{BestScoreStore, MemoryStore};
