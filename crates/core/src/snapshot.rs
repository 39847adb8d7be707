use crate::grid::Grid;
use crate::types::{Cell, GameStatus, Notice, GRID_SIZE};

/// State saved before a move so it can be undone (one level deep).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UndoSnapshot {
    pub grid: Grid,
    pub score: u32,
    pub moves: u32,
}

/// Read-only view of a game handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub best: u32,
    pub status: GameStatus,
    pub notice: Option<Notice>,
    pub can_undo: bool,
    pub episode_id: u32,
    pub moves: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            best: 0,
            status: GameStatus::Playing,
            notice: None,
            can_undo: false,
            episode_id: 0,
            moves: 0,
        }
    }
}
