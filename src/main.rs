//! Main entry point for the roster service.
//!
//! This module loads environment variables, parses the command line,
//! initializes logging, opens the member and order stores and serves the
//! HTTP API until the process is stopped.
//!
//! Store targets depend on where the process runs:
//! - Locally, both SQLite databases live in the working directory
//! - When `ROSTER_INSTANCE` is set, they live under `ROSTER_DATA_DIR`
//!
//! A YAML file passed with `--config` overrides either target, and
//! `--ephemeral` keeps everything in memory.

mod api;
mod cli;
mod config;
mod constants;
mod db;
mod errors;
mod schema;
mod store;
mod utils;

use api::state::AppState;
use clap::Parser;
use config::{Runtime, StoreTargets};
use constants::{DATA_DIR_ENV, DEFAULT_PORT};
use db::{Database, SqliteMemberStore, SqliteOrderStore};
use std::error::Error;
use std::sync::Arc;
use store::{Member, MemoryTable, Order};
use tracing::{error, info, warn};

/// Opens both stores as selected by the command line and environment
fn open_stores(cli: &cli::Cli) -> Result<AppState, Box<dyn Error>> {
    if cli.ephemeral {
        info!("Using in-memory stores");
        return Ok(AppState::new(
            Arc::new(MemoryTable::<Member>::new()),
            Arc::new(MemoryTable::<Order>::new()),
        ));
    }

    let runtime = Runtime::detect();
    let data_dir = std::env::var(DATA_DIR_ENV).ok();
    let mut targets = StoreTargets::for_runtime(runtime, data_dir.as_deref());
    if let Some(path) = &cli.config {
        targets = targets.with_overrides(&config::load_service_config(path)?);
    }

    info!(
        ?runtime,
        members = %targets.members,
        orders = %targets.orders,
        "Opening stores"
    );
    let members = SqliteMemberStore::open(Database::new(&targets.members, targets.pool_size)?)?;
    let orders = SqliteOrderStore::open(Database::new(&targets.orders, targets.pool_size)?)?;

    Ok(AppState::new(Arc::new(members), Arc::new(orders)))
}

/// Main entry point that initializes and runs the service.
///
/// # Initialization steps:
/// 1. Load environment variables from `.env`
/// 2. Parse CLI arguments
/// 3. Initialize logging system
/// 4. Open the stores
/// 5. Serve the HTTP API
#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_to_file);

    if let Err(e) = dotenv {
        warn!("Failed to load .env file: {}", e);
    }

    let port = cli.port.unwrap_or_else(|| {
        info!("Defaulting to port {}", DEFAULT_PORT);
        DEFAULT_PORT
    });

    let state = match open_stores(&cli) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to open stores: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting API server on port {}", port);
    if let Err(e) = api::server::launch_server(port, state).await {
        error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
