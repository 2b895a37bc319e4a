//! Catalog loading and the terminal event loop

use std::{io, path::Path, time::Duration};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use zapwiki_config::WikiConfig;
use zapwiki_content::{builtin, ContentStore};

use crate::{browser::WikiBrowser, error::Result, render::render};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Load the catalog named by `catalog`, else by the config, else the built-in one
pub fn load_store(config: &WikiConfig, catalog: Option<&Path>) -> Result<ContentStore> {
    let path = catalog.or(config.catalog_path.as_deref());
    let store = match path {
        Some(path) => {
            tracing::info!("Loading catalog from {}", path.display());
            ContentStore::from_json_file(path, config.home_slug.as_str())?
        }
        None => ContentStore::new(builtin::zap_post_catalog(), config.home_slug.as_str())?,
    };
    Ok(store)
}

/// Run the browser in the terminal until the user quits
///
/// The terminal is restored even when entering the alternate screen or the
/// event loop fails.
pub fn run(browser: &mut WikiBrowser) -> Result<()> {
    enable_raw_mode()?;
    with_restore(|| run_in_alternate_screen(browser), restore_terminal)
}

fn run_in_alternate_screen(browser: &mut WikiBrowser) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, browser);
    let cursor = terminal.show_cursor();
    result?;
    cursor?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen);
    raw?;
    screen?;
    Ok(())
}

/// Run `body`, then `restore` regardless of the outcome; the first error wins
fn with_restore(
    body: impl FnOnce() -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let result = body();
    if let Err(e) = restore() {
        tracing::error!("Failed to restore terminal: {}", e);
        result?;
        return Err(e);
    }
    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    browser: &mut WikiBrowser,
) -> Result<()> {
    tracing::info!("Starting wiki browser at {}", browser.router().current_slug());

    while !browser.should_quit() {
        terminal.draw(|frame| render(frame, browser))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    browser.handle_key(key);
                }
                Event::Resize(_, _) => {
                    // next draw picks up the new size
                }
                _ => {}
            }
        }
    }

    tracing::info!("Wiki browser exited");
    Ok(())
}
