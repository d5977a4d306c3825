//! Wordtiles - turn-based word game in the terminal
//!
//! Register players, form words from the shared rack, keep score.

mod app;
mod tui;

use anyhow::{Context, Result};
use app::{App, AppCoordinator};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui::Tui;
use wordtiles::Config;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    init_logging(&config.log_path())?;

    // Dictionary problems are fatal before the terminal is taken over
    let dictionary = config
        .load_dictionary()
        .context("failed to load dictionary")?;
    info!(words = dictionary.len(), seed = ?config.seed, "starting wordtiles");

    let mut coordinator = AppCoordinator::new(App::new(dictionary, config.seed));

    let mut terminal = Tui::new()?;
    terminal.enter()?;

    loop {
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        // Nothing happens between key presses, so block until one arrives
        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind == KeyEventKind::Press {
                coordinator.on_key(key);
            }
        }

        if coordinator.should_quit {
            break;
        }
    }

    info!("exiting");
    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

/// Send logs to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    }
    let log_file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
