//! Best-score persistence capability.
//!
//! The game state never touches storage directly; it is handed a
//! [`BestScoreStore`] at construction. Saving is best-effort: the caller logs
//! a failed save and keeps playing with the in-memory value.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use anyhow::{bail, Result};

/// Load/save a single best-score scalar.
pub trait BestScoreStore: fmt::Debug {
    /// Stored best score, or None when nothing was saved yet (or it is unreadable).
    fn load(&self) -> Option<u32>;

    /// Persist a new best score.
    fn save(&mut self, best: u32) -> Result<()>;
}

/// In-memory store.
///
/// Clones share the same slot, so a test can keep a handle and observe what
/// a game saved, or hand the same slot to a second game to simulate a relaunch.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<Cell<Option<u32>>>,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        let store = Self::default();
        store.slot.set(Some(best));
        store
    }

    /// A store whose saves always fail (e.g. storage quota exceeded).
    pub fn failing() -> Self {
        Self {
            slot: Rc::default(),
            fail_saves: true,
        }
    }

    pub fn stored(&self) -> Option<u32> {
        self.slot.get()
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Option<u32> {
        self.slot.get()
    }

    fn save(&mut self, best: u32) -> Result<()> {
        if self.fail_saves {
            bail!("memory store rejects writes");
        }
        self.slot.set(Some(best));
        Ok(())
    }
}
