//! Application to watch a too good to go account's favourites and report restocks.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 3, 2026

// Local modules to store the real workhorse code.
mod api;
mod auth;
mod config;
mod favorites;
mod include;
mod monitor;
mod myerrors;
mod notifier;
mod restock;
mod session;

// Local use statements.
use config::Config;
use include::{error, tokio, Result};
use monitor::Monitor;

#[tokio::main]
// And now we do the main function, wrapped with tokio so it can be async.
async fn main() -> Result<()> {
    // Reads CLI args, the RON settings and the account file, and starts the logger.
    let conf = Config::generate()?;
    // The monitor owns the session for the rest of the run.
    let mut monitor = Monitor::new(&conf)?;
    // Only comes back if something went wrong for good.
    if let Err(e) = monitor.run().await {
        error!("stopping: {}", e);
        return Err(e);
    }
    Ok(())
}
