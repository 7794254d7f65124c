mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use flood_core::timeseries::parse_hour;
use flood_core::AlertLevel;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "flood",
    about = "Village flood alert service — replay river levels and serve affected villages",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data root holding flood.yaml and the data files (default: auto-detect from flood.yaml)
    #[arg(long, global = true, env = "FLOOD_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the dataset and serve the HTTP API
    Serve {
        /// Interface to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides server.port, 0 = OS-assigned)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Show the alert for one replay hour
    Alert {
        /// Zero-based hour index; past the end holds at the last row
        #[arg(long, default_value = "0", value_parser = parse_hour)]
        hour: usize,

        /// Show the villages affected at a tier instead of replaying an hour
        #[arg(long, conflicts_with = "hour")]
        level: Option<AlertLevel>,
    },

    /// List village names in store order
    Villages,

    /// Validate the config and data files without serving
    Check,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Serve { host, port } => cmd::serve::run(&root, host, port),
        Commands::Alert { hour, level } => cmd::alert::run(&root, hour, level, cli.json),
        Commands::Villages => cmd::villages::run(&root, cli.json),
        Commands::Check => cmd::check::run(&root, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
