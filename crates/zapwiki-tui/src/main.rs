//! ZAP POST Wiki - terminal entry point

use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use zapwiki_config::{ConfigManager, WikiConfig};
use zapwiki_router::{fragment_for, MemoryLocation};
use zapwiki_search::SearchIndex;
use zapwiki_tui::{load_store, WikiBrowser};

/// Browse the ZAP POST help wiki in the terminal
#[derive(Parser, Debug)]
#[command(name = "zapwiki", version, about)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON catalog to browse instead of the built-in one
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Article to open first
    #[arg(long, value_name = "SLUG")]
    start: Option<String>,

    /// Print ranked matches for a query and exit
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = manager
        .load_config()
        .with_context(|| format!("Failed to load {}", manager.config_path().display()))?;

    init_logging(&config, args.verbose, args.search.is_none())?;

    let store = load_store(&config, args.catalog.as_deref()).context("Failed to load catalog")?;

    if let Some(query) = &args.search {
        let index = SearchIndex::build(&store);
        let hits = index.search(query);
        if hits.is_empty() {
            println!("{}", zapwiki_tui::render::NO_RESULTS);
        }
        for hit in hits {
            println!("{}\t{}\t{}", hit.score, hit.slug, hit.title);
        }
        return Ok(());
    }

    let location = match &args.start {
        Some(slug) => MemoryLocation::with_fragment(fragment_for(slug)),
        None => MemoryLocation::new(),
    };
    let mut browser = WikiBrowser::with_location(store, &config, location);

    match zapwiki_tui::run(&mut browser) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Wiki browser error: {}", e);
            Err(e.into())
        }
    }
}

/// Install the fmt subscriber
///
/// The interactive browser owns the terminal, so its logs go to a file:
/// the configured one, else `zapwiki.log` in the user cache directory.
fn init_logging(config: &WikiConfig, verbose: bool, interactive: bool) -> Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        config.logging.tracing_level().unwrap_or(tracing::Level::INFO)
    };

    let file = config.logging.file.clone().or_else(|| {
        interactive
            .then(dirs::cache_dir)
            .flatten()
            .map(|dir| dir.join("zapwiki").join("zapwiki.log"))
    });

    match file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
