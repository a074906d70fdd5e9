//! CLI module for Esports Hub
//!
//! Provides subcommands acting as the rendering layer over the core:
//! - `standings`: ranked standings table for a tournament
//! - `access`: access decision and redirect for a route

pub mod access;
pub mod standings;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::session::FileSessionStore;

/// Esports Hub - tournament standings and route access
#[derive(Parser)]
#[command(name = "esports-hub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the standings table of a tournament
    Standings(standings::StandingsArgs),

    /// Check whether the current session may open a route
    Access(access::AccessArgs),
}

/// Load configuration and install logging
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logging::init_logging(&config.logging);

    if let Some(e) = load_error {
        tracing::warn!(error = %e, "Invalid configuration, falling back to defaults");
    }
    config
}

fn session_store(config: &AppConfig) -> FileSessionStore {
    FileSessionStore::new(&config.session.path, &config.session.key)
}
