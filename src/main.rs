//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and redraws the whole grid as
//! plain text after every game event.

mod config;
mod term;

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_2048::core::GameSession;
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::types::GameAction;

use crate::config::Config;
use crate::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log.clone()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = match config.seed {
        Some(seed) => GameSession::seeded(seed),
        None => GameSession::new(),
    };
    let mut swipes = SwipeTracker::new(config.swipe_threshold);
    info!(seed = ?config.seed, "session started");

    term.draw(&session.snapshot())?;

    loop {
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(score = session.score(), "quit");
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipes.handle_mouse(mouse).map(GameAction::Move),
            Event::Resize(..) => {
                term.draw(&session.snapshot())?;
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            session.apply_action(action);
            if action == GameAction::NewGame {
                swipes.reset();
            }
        }

        // Ignored moves record no event and need no redraw.
        if let Some(event) = session.take_last_event() {
            debug!(?event, "game event");
            term.draw(&session.snapshot())?;
        }
    }
}
