use std::io;

use anyhow::{Context, Result};
use tracing::info;

use kchess_cli::config::LOG_ENV;
use kchess_cli::{Session, SessionConfig};

fn main() -> Result<()> {
    let env_level = std::env::var(LOG_ENV).ok();
    let config = SessionConfig::from_sources(env_level.as_deref(), std::env::args().skip(1))
        .context("bad startup options")?;

    // stdout carries the session replies
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.log_level)
        .init();
    info!(auto_draw = config.auto_draw, "kchess starting");

    let mut stdout = io::stdout().lock();
    Session::new(config).run(io::stdin().lock(), &mut stdout)?;
    Ok(())
}
