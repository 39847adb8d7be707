//! Swipe recognition.
//!
//! A swipe is a press followed by a release. The axis with the larger travel
//! wins (horizontal only when strictly larger), and that travel must exceed the
//! threshold. Shorter drags are treated as taps and ignored.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{
    Direction, GameAction, MOUSE_SWIPE_THRESHOLD_CELLS, SWIPE_THRESHOLD_PX, TERMINAL_CELL_ASPECT,
};

/// Classify a pointer displacement into a direction.
///
/// Screen coordinates: `dy > 0` points down.
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax.max(ay) <= threshold {
        return None;
    }
    if ax > ay {
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}

/// Tracks one in-flight press.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
    threshold: f32,
    /// Multiplier applied to vertical travel (terminal cells are taller than wide).
    y_scale: f32,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
            y_scale: 1.0,
        }
    }

    /// Tracker for touch/pointer input in device-independent pixels.
    pub fn for_pixels() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }

    /// Tracker for mouse drags in terminal cell coordinates.
    pub fn for_terminal() -> Self {
        Self::new(MOUSE_SWIPE_THRESHOLD_CELLS).with_y_scale(TERMINAL_CELL_ASPECT)
    }

    pub fn with_y_scale(mut self, y_scale: f32) -> Self {
        self.y_scale = y_scale;
        self
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finish the gesture. Returns None without a matching `begin` or for short drags.
    pub fn end(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (sx, sy) = self.start.take()?;
        classify_swipe(x - sx, (y - sy) * self.y_scale, self.threshold)
    }

    /// Drop an in-flight press, e.g. when the terminal is resized mid-drag.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Feed a crossterm mouse event (left button only).
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<GameAction> {
        let (x, y) = (event.column as f32, event.row as f32);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.begin(x, y);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.end(x, y).map(GameAction::Move),
            _ => None,
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::for_pixels()
    }
}
