use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "openhours", version, about = "Store opening hours from the terminal")]
struct Cli {
    /// Config file to use instead of ~/.config/openhours/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether the store is open right now
    Status {
        /// Evaluate at a local time instead of now (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        at: Option<String>,
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Re-evaluate the status periodically
    Watch {
        /// Seconds between refreshes (defaults to presenter.refresh_seconds)
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many refreshes
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        count: Option<u32>,
    },
    /// Show the weekly opening hours
    Hours {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Status { at, json } => commands::status::run(config_path, at.as_deref(), json),
        Commands::Watch { interval, count } => commands::watch::run(config_path, interval, count),
        Commands::Hours { json } => commands::hours::run(config_path, json),
        Commands::Config { action } => commands::config::run(config_path, action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
