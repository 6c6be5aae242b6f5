//! Address Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr.

use address_book::repositories::{AddressBookRepository, JsonFileRepository};
use address_book::{Assistant, Clock, Config, ContactService, SystemClock};
use anyhow::{Context, Result};
use std::io;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can set the filter
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only to keep the conversation on stdout clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(path = %config.book_path.display(), "Starting address book");

    let repository =
        Arc::new(JsonFileRepository::new(&config.book_path)) as Arc<dyn AddressBookRepository>;
    let clock = Arc::new(SystemClock) as Arc<dyn Clock>;

    let service = match ContactService::load(repository, clock) {
        Ok(service) => service.with_window_days(config.upcoming_window_days),
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let mut assistant = Assistant::new(service).with_max_suggestions(config.max_name_suggestions);

    let stdin = io::stdin();
    let stdout = io::stdout();
    assistant
        .run(stdin.lock(), stdout.lock())
        .context("Console I/O failed")?;

    info!("Address book session finished");
    Ok(())
}
