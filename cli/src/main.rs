//! Shelf - interactive shell for the book catalog.
//!
//! This binary wires a [`shelf_catalog::Catalog`] to a numbered menu loop
//! on stdin/stdout. All catalog errors are reported in-loop; the only
//! fatal condition is a store that cannot be read at startup.

mod config;
mod menu;

use crate::config::Config;
use shelf_catalog::{Catalog, Error};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Shelf with store at {}", config.data_file.display());

    let catalog = Catalog::new(&config.data_file);

    // Startup probe: an unreadable store is fatal here; everything else is
    // reported per-operation by the menu loop.
    match catalog.load() {
        Ok(books) => tracing::info!("Loaded {} book(s)", books.len()),
        Err(err @ Error::Io(_)) => return Err(err.into()),
        Err(err) => tracing::warn!("store not readable yet: {err}"),
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&catalog, stdin.lock(), stdout.lock())?;

    Ok(())
}
