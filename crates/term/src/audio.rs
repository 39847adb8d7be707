//! Audio cues for game events.
//!
//! A terminal has no mixer, so "playing a sound" means writing the bell
//! character. The director decides *when* a cue fires; the sink decides *how*.
//! Background music is tracked as state only and shown in the side panel.

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crate::core::ActionOutcome;
use crate::game_view::AudioStatusView;
use crate::types::GameStatus;

/// Discrete sound events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Merge,
    Loss,
    MusicStart,
    MusicStop,
}

/// Something that can play cues.
pub trait CueSink {
    fn play(&mut self, cue: Cue) -> Result<()>;
}

/// Rings the terminal bell for one-shot cues. Music start/stop is silent.
pub struct BellSink<W: Write = io::Stdout> {
    out: W,
}

impl BellSink {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CueSink for BellSink<W> {
    fn play(&mut self, cue: Cue) -> Result<()> {
        match cue {
            Cue::Merge | Cue::Loss => {
                self.out.write_all(b"\x07")?;
                self.out.flush()?;
            }
            Cue::MusicStart | Cue::MusicStop => {}
        }
        Ok(())
    }
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl CueSink for SilentSink {
    fn play(&mut self, _cue: Cue) -> Result<()> {
        Ok(())
    }
}

/// Maps game outcomes to cues and tracks the music lifecycle.
pub struct AudioDirector {
    sink: Box<dyn CueSink>,
    enabled: bool,
    music_playing: bool,
}

impl AudioDirector {
    pub fn new(sink: Box<dyn CueSink>) -> Self {
        Self {
            sink,
            enabled: true,
            music_playing: false,
        }
    }

    pub fn silent() -> Self {
        Self {
            sink: Box::new(SilentSink),
            enabled: false,
            music_playing: false,
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn status_view(&self) -> AudioStatusView {
        AudioStatusView {
            enabled: self.enabled,
            music_playing: self.music_playing,
        }
    }

    /// Call once when the first game begins.
    pub fn on_start(&mut self) {
        self.start_music();
    }

    pub fn on_outcome(&mut self, outcome: &ActionOutcome) {
        match outcome {
            ActionOutcome::Moved(report) => {
                // Rejected or blocked moves make no sound.
                if !report.moved {
                    return;
                }
                if report.merges > 0 {
                    self.emit(Cue::Merge);
                }
                match report.status {
                    GameStatus::Lost => {
                        self.emit(Cue::Loss);
                        self.stop_music();
                    }
                    GameStatus::Won => self.stop_music(),
                    GameStatus::Playing => {}
                }
            }
            ActionOutcome::Restarted => {
                self.stop_music();
                self.start_music();
            }
            ActionOutcome::Undo(_) => {}
        }
    }

    fn start_music(&mut self) {
        if !self.music_playing {
            self.emit(Cue::MusicStart);
            self.music_playing = true;
        }
    }

    fn stop_music(&mut self) {
        if self.music_playing {
            self.emit(Cue::MusicStop);
            self.music_playing = false;
        }
    }

    fn emit(&mut self, cue: Cue) {
        if let Err(e) = self.sink.play(cue) {
            // Audio is cosmetic; never let it end the game.
            debug!("cue {:?} failed: {:#}", cue, e);
        }
    }
}
