//! Game state module - owns a single game and orchestrates each move
//!
//! A move runs as one synchronous transaction: snapshot for undo, apply the
//! move engine, and on change spawn a tile, re-evaluate the status and persist
//! a new best score. Presentation code reads [`GameSnapshot`]s and never
//! mutates the grid itself.

use log::{debug, warn};

use crate::{
    apply_move, spawn_tile, status, BestScoreStore, GameSnapshot, Grid, SimpleRng, SpawnedTile,
    UndoSnapshot,
};
use crate::types::*;

/// What happened on a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub moved: bool,
    pub score_delta: u32,
    pub merges: u32,
    pub spawned: Option<SpawnedTile>,
    pub status: GameStatus,
    /// True when this move raised the best score
    pub new_best: bool,
}

impl MoveReport {
    /// Report for a move that was refused or did not change the grid
    pub fn rejected(status: GameStatus) -> Self {
        Self {
            moved: false,
            score_delta: 0,
            merges: 0,
            spawned: None,
            status,
            new_best: false,
        }
    }
}

/// Result of an undo request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoResult {
    Restored,
    NoOp,
}

/// Result of [`GameState::apply_action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved(MoveReport),
    Undo(UndoResult),
    Restarted,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    grid: Grid,
    score: u32,
    best: u32,
    status: GameStatus,
    undo: Option<UndoSnapshot>,
    notice: Option<Notice>,
    rng: SimpleRng,
    store: Box<dyn BestScoreStore>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Successful moves in the current episode.
    moves: u32,
}

impl GameState {
    /// Start a game: load the best score and place the initial tiles.
    pub fn new(seed: u32, store: Box<dyn BestScoreStore>) -> Self {
        let best = store.load().unwrap_or(0);
        let mut state = Self {
            grid: Grid::new(),
            score: 0,
            best,
            status: GameStatus::Playing,
            undo: None,
            notice: None,
            rng: SimpleRng::new(seed),
            store,
            episode_id: 0,
            moves: 0,
        };
        state.place_initial_tiles();
        state
    }

    /// Resume from a known grid and score (no tiles are spawned).
    pub fn from_grid(grid: Grid, score: u32, seed: u32, store: Box<dyn BestScoreStore>) -> Self {
        let best = store.load().unwrap_or(0);
        let mut state = Self {
            grid,
            score,
            best,
            status: status::evaluate(&grid),
            undo: None,
            notice: None,
            rng: SimpleRng::new(seed),
            store,
            episode_id: 0,
            moves: 0,
        };
        state.update_best();
        state
    }

    fn place_initial_tiles(&mut self) {
        for _ in 0..INITIAL_TILES {
            spawn_tile(&mut self.grid, &mut self.rng);
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.grid.rows();
        out.score = self.score;
        out.best = self.best;
        out.status = self.status;
        out.notice = self.notice;
        out.can_undo = self.undo.is_some();
        out.episode_id = self.episode_id;
        out.moves = self.moves;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Slide and merge toward `direction`.
    ///
    /// Moves are rejected once the game is Won or Lost; only restart leaves a
    /// terminal state.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        if self.status.is_terminal() {
            return MoveReport::rejected(self.status);
        }

        // Overwritten on every attempt, even if nothing ends up moving.
        self.undo = Some(UndoSnapshot {
            grid: self.grid,
            score: self.score,
            moves: self.moves,
        });

        let outcome = apply_move(&self.grid, direction);
        if !outcome.moved {
            return MoveReport::rejected(self.status);
        }

        self.grid = outcome.grid;
        self.score = self.score.saturating_add(outcome.score_delta);
        self.moves = self.moves.wrapping_add(1);

        let spawned = spawn_tile(&mut self.grid, &mut self.rng);
        debug_assert!(
            spawned.is_some(),
            "a changed grid always leaves an empty cell"
        );

        self.status = status::evaluate(&self.grid);
        self.notice = match self.status {
            GameStatus::Won => Some(Notice::Won),
            GameStatus::Lost => Some(Notice::Lost),
            GameStatus::Playing => None,
        };
        let new_best = self.update_best();

        debug!(
            "move {} +{} score={} status={}",
            direction.as_str(),
            outcome.score_delta,
            self.score,
            self.status.as_str()
        );

        MoveReport {
            moved: true,
            score_delta: outcome.score_delta,
            merges: outcome.merges,
            spawned,
            status: self.status,
            new_best,
        }
    }

    /// Restore the grid, score and move count from before the last move attempt.
    ///
    /// Only one level is kept: a second undo without a move in between is a
    /// no-op. Undo is also a no-op once the game is Won or Lost.
    pub fn undo(&mut self) -> UndoResult {
        if self.status.is_terminal() {
            return UndoResult::NoOp;
        }
        let Some(prev) = self.undo.take() else {
            return UndoResult::NoOp;
        };
        self.grid = prev.grid;
        self.score = prev.score;
        self.moves = prev.moves;
        self.notice = Some(Notice::Undone);
        UndoResult::Restored
    }

    /// Start a fresh game. The best score is kept.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.status = GameStatus::Playing;
        self.undo = None;
        self.notice = None;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.place_initial_tiles();
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        match action {
            GameAction::Move(direction) => ActionOutcome::Moved(self.apply_move(direction)),
            GameAction::Undo => ActionOutcome::Undo(self.undo()),
            GameAction::Restart => {
                self.restart();
                ActionOutcome::Restarted
            }
        }
    }

    /// Raise and persist the best score if the current score beats it.
    fn update_best(&mut self) -> bool {
        if self.score <= self.best {
            return false;
        }
        self.best = self.score;
        if let Err(e) = self.store.save(self.best) {
            // Keep playing with the in-memory best.
            warn!("failed to persist best score {}: {:#}", self.best, e);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn game_with(rows: [[u32; 4]; 4], score: u32, store: MemoryStore) -> GameState {
        GameState::from_grid(Grid::from_rows(rows).unwrap(), score, 7, Box::new(store))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345, Box::new(MemoryStore::new()));

        assert_eq!(state.grid().tile_count(), 2);
        assert_eq!(state.score(), 0);
        assert_eq!(state.best(), 0);
        assert_eq!(state.status(), GameStatus::Playing);
        assert!(!state.can_undo());
        assert!(state.notice().is_none());
        assert!(state
            .grid()
            .cells()
            .iter()
            .all(|&v| v == 0 || v == 2 || v == 4));
    }

    #[test]
    fn test_new_game_loads_best() {
        let state = GameState::new(1, Box::new(MemoryStore::with_best(5000)));
        assert_eq!(state.best(), 5000);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameState::new(99, Box::new(MemoryStore::new()));
        let b = GameState::new(99, Box::new(MemoryStore::new()));
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_successful_move_spawns_and_scores() {
        let mut state = game_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0, MemoryStore::new());

        let report = state.apply_move(Direction::Left);
        assert!(report.moved);
        assert_eq!(report.score_delta, 4);
        assert_eq!(report.merges, 1);
        assert_eq!(state.score(), 4);
        assert_eq!(state.grid().get(0, 0), Some(4));
        // The merged 4 plus one spawned tile.
        assert_eq!(state.grid().tile_count(), 2);
        let spawned = report.spawned.unwrap();
        assert_eq!(state.grid().get(spawned.x, spawned.y), Some(spawned.value));
        assert_eq!(state.moves(), 1);
    }

    #[test]
    fn test_blocked_move_leaves_state_unchanged() {
        let mut state = game_with([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]], 10, MemoryStore::new());
        let before = *state.grid();

        let report = state.apply_move(Direction::Left);
        assert!(!report.moved);
        assert_eq!(report.spawned, None);
        assert_eq!(*state.grid(), before);
        assert_eq!(state.score(), 10);
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_undo_restores_exact_pre_move_state() {
        let mut state = game_with([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]], 12, MemoryStore::new());
        let before = *state.grid();

        assert!(state.apply_move(Direction::Left).moved);
        assert_ne!(*state.grid(), before);

        assert_eq!(state.undo(), UndoResult::Restored);
        assert_eq!(*state.grid(), before);
        assert_eq!(state.score(), 12);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.snapshot().moves, 0);
        assert_eq!(state.notice(), Some(Notice::Undone));

        // Depth-1 history.
        assert_eq!(state.undo(), UndoResult::NoOp);
        assert_eq!(*state.grid(), before);
    }

    #[test]
    fn test_undo_without_move_is_noop() {
        let mut state = GameState::new(3, Box::new(MemoryStore::new()));
        assert_eq!(state.undo(), UndoResult::NoOp);
    }

    #[test]
    fn test_blocked_attempt_still_replaces_snapshot() {
        // After the left move every row is free of equal neighbours, whatever spawns
        // into the single empty cell, so a second left move is blocked.
        let mut state = game_with(
            [[2, 4, 2, 4], [2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 8, 8]],
            0,
            MemoryStore::new(),
        );
        assert!(state.apply_move(Direction::Left).moved);
        assert_eq!(state.status(), GameStatus::Playing);
        let after_move = *state.grid();

        assert!(!state.apply_move(Direction::Left).moved);
        assert_eq!(state.undo(), UndoResult::Restored);
        assert_eq!(*state.grid(), after_move);
        assert_eq!(state.score(), 16);
    }

    #[test]
    fn test_win_is_terminal() {
        let mut state = game_with(
            [[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]],
            0,
            MemoryStore::new(),
        );

        let report = state.apply_move(Direction::Left);
        assert!(report.moved);
        assert_eq!(report.status, GameStatus::Won);
        assert_eq!(state.notice(), Some(Notice::Won));

        // Terminal: further moves and undo are refused.
        let before = *state.grid();
        let report = state.apply_move(Direction::Right);
        assert!(!report.moved);
        assert_eq!(report.status, GameStatus::Won);
        assert_eq!(*state.grid(), before);
        assert_eq!(state.undo(), UndoResult::NoOp);
    }

    #[test]
    fn test_loss_detected_after_move() {
        // The spawned 2 or 4 lands next to 128 and below 8, so nothing can pair up.
        let mut state = game_with(
            [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 8], [64, 16, 16, 128]],
            0,
            MemoryStore::new(),
        );
        assert_eq!(state.status(), GameStatus::Playing);

        let report = state.apply_move(Direction::Left);
        assert!(report.moved);
        assert_eq!(report.score_delta, 32);
        assert_eq!(report.status, GameStatus::Lost);
        assert_eq!(state.notice(), Some(Notice::Lost));

        for d in Direction::ALL {
            assert!(!state.apply_move(d).moved);
        }
        assert_eq!(state.undo(), UndoResult::NoOp);
    }

    #[test]
    fn test_from_grid_evaluates_status() {
        let state = game_with(
            [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]],
            0,
            MemoryStore::new(),
        );
        assert_eq!(state.status(), GameStatus::Lost);
    }

    #[test]
    fn test_best_updates_only_when_strictly_exceeded() {
        let store = MemoryStore::with_best(4);
        let mut state = game_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0, store.clone());

        // 0 + 4 == best: not strictly greater.
        let report = state.apply_move(Direction::Left);
        assert!(!report.new_best);
        assert_eq!(state.best(), 4);

        let mut state = game_with([[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]], 0, store.clone());
        let report = state.apply_move(Direction::Left);
        assert!(report.new_best);
        assert_eq!(state.best(), 8);
        assert_eq!(store.stored(), Some(8));
    }

    #[test]
    fn test_best_survives_restart() {
        let store = MemoryStore::new();
        let mut state = game_with([[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]], 0, store.clone());
        state.apply_move(Direction::Left);
        assert_eq!(state.best(), 16);

        state.restart();
        assert_eq!(state.score(), 0);
        assert_eq!(state.best(), 16);

        // A new session reading the same storage sees it too.
        let relaunched = GameState::new(5, Box::new(store));
        assert_eq!(relaunched.best(), 16);
    }

    #[test]
    fn test_failed_save_keeps_in_memory_best() {
        let mut state = game_with(
            [[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]],
            0,
            MemoryStore::failing(),
        );
        let report = state.apply_move(Direction::Left);
        assert!(report.moved);
        assert!(report.new_best);
        assert_eq!(state.best(), 16);
    }

    #[test]
    fn test_restart_resets_game() {
        let mut state = game_with(
            [[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]],
            500,
            MemoryStore::new(),
        );
        state.apply_move(Direction::Left);
        assert_eq!(state.status(), GameStatus::Won);

        state.restart();
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.grid().tile_count(), 2);
        assert!(!state.can_undo());
        assert!(state.notice().is_none());
        assert_eq!(state.episode_id(), 1);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = game_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0, MemoryStore::new());

        match state.apply_action(GameAction::Move(Direction::Left)) {
            ActionOutcome::Moved(r) => assert!(r.moved),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            state.apply_action(GameAction::Undo),
            ActionOutcome::Undo(UndoResult::Restored)
        );
        assert_eq!(
            state.apply_action(GameAction::Restart),
            ActionOutcome::Restarted
        );
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = game_with(
            [[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]],
            20,
            MemoryStore::with_best(30),
        );
        let snap = state.snapshot();
        assert_eq!(snap.board[0][0], 2);
        assert_eq!(snap.board[3][3], 4);
        assert_eq!(snap.score, 20);
        assert_eq!(snap.best, 30);
        assert!(snap.playable());
        assert!(!snap.can_undo);
    }
}
