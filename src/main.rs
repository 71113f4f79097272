//! Terminal inventory playground (default binary).
//!
//! Opens one or more inventory grids, stocks them from the item catalog and
//! lets the player shuffle items around with the keyboard. Configuration comes
//! from `STASH_*` environment variables; see `SessionConfig::from_env`.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, trace};
use tracing_subscriber::EnvFilter;

use stash_grid::core::Catalog;
use stash_grid::engine::{InventorySession, SessionConfig};
use stash_grid::input::{handle_key_event, should_quit, InputHandler};
use stash_grid::term::{FrameBuffer, InventoryView, TerminalRenderer, Viewport};
use stash_grid::types::TICK_MS;

/// Items stored in the first grid on startup.
const STARTER_ITEMS: usize = 4;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    if let Some(path) = config.log_path.as_deref() {
        init_tracing(path)?;
    }

    let catalog = match config.catalog_path.as_deref() {
        Some(path) => Catalog::load(path).with_context(|| format!("loading catalog {path}"))?,
        None => Catalog::builtin(),
    };

    let mut session = InventorySession::new(&config, catalog)?;
    for _ in 0..STARTER_ITEMS {
        session.spawn_next()?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    session.close();
    info!(value = session.total_value(), "playground closed");
    result
}

/// Logs go to a file; stdout belongs to the renderer.
fn init_tracing(path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut InventorySession) -> Result<()> {
    let view = InventoryView::default();
    let mut input_handler = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session, Viewport::new(w, h), &mut fb);
        let frame = term.draw_swap(&mut fb)?;
        if frame.full_redraw {
            trace!(bytes = frame.bytes, cells = frame.cells, "full redraw");
        }

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        if let Some(action) = input_handler.handle_key_press(key.code) {
                            session.apply_action(action);
                        } else if let Some(action) = handle_key_event(key) {
                            // Held cursor keys are repeated by the input handler.
                            if action.cursor_delta().is_none() {
                                session.apply_action(action);
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats internally.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            for action in input_handler.update(TICK_MS) {
                session.apply_action(action);
            }
        }
    }
}
