//! Terminal 2048 runner (default binary).
//!
//! Reads configuration from the environment, then runs the game loop:
//! render when something changed, wait up to one frame for input, apply it.

use std::fs::OpenOptions;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::store::FileStore;
use tui_2048::term::{AudioDirector, BellSink, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, FRAME_MS};
use tui_2048::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file because stderr shares the screen with the game.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let seed = config.resolve_seed();
    let store = FileStore::new(&config.best_path);
    info!("starting seed={} best_path={}", seed, store.path().display());

    let mut game = GameState::new(seed, Box::new(store));
    let mut audio = if config.bell {
        AudioDirector::new(Box::new(BellSink::stdout()))
    } else {
        AudioDirector::silent()
    };
    audio.on_start();

    let view = GameView::default();
    let mut swipe = SwipeTracker::for_terminal();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            let audio_view = audio.status_view();
            view.render_into_with_audio(&snap, Some(&audio_view), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(frame)? {
            continue;
        }

        let action: Option<GameAction> = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit score={} best={}", game.score(), game.best());
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipe.handle_mouse_event(mouse),
            Event::Resize(_, _) => {
                swipe.cancel();
                term.invalidate();
                dirty = true;
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            let outcome = game.apply_action(action);
            audio.on_outcome(&outcome);
            dirty = true;
        }
    }
}
