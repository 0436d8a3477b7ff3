//! Supperplan CLI: the main entry point.
//!
//! Commands:
//! - `serve`     Start the web server
//! - `onboard`   Write a starter config file
//! - `doctor`    Diagnose configuration
//! - `menu`      Generate menu ideas from a preferences file
//! - `cookbook`  Generate a cookbook for a chosen menu

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "supperplan",
    about = "Supperplan, an LLM-backed dinner party planner",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write a starter config file
    Onboard,

    /// Diagnose configuration
    Doctor,

    /// Generate menu ideas from a preferences JSON file (`-` for stdin)
    Menu {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate a cookbook from a chosen-menu JSON file (`-` for stdin)
    Cookbook {
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    }

    match cli.command {
        Commands::Serve { host, port } => commands::serve::run(host, port).await?,
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Doctor => commands::doctor::run().await?,
        Commands::Menu { input } => commands::generate::menu(&input).await?,
        Commands::Cookbook { input } => commands::generate::cookbook(&input).await?,
    }

    Ok(())
}
