use clap::Parser;
use std::path::PathBuf;

/// Command line interface for the roster service
#[derive(Parser, Debug)]
#[command(name = "roster", about = "HTTP service for members and orders")]
pub struct Cli {
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// or any tracing filter directive
    #[arg(long, env = "RUST_LOG", default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file under `logs/`
    #[arg(long)]
    pub log_to_file: bool,

    /// YAML file overriding the store connection targets
    #[arg(long, env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep members and orders in memory instead of SQLite
    #[arg(long)]
    pub ephemeral: bool,
}
