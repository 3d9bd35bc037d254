//! Jungle CLI - convention-driven page builder and server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "jungle")]
#[command(about = "Builds page components into self-contained bundles and serves them")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a sample project in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Build every route, then serve the results
    Serve {
        /// Port or socket path to listen on (defaults to $PORT, then 3000)
        #[arg(short, long)]
        port: Option<String>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Build every route without serving
    Build,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Serve { port, no_open } => {
            commands::serve::run(port, !no_open).await?;
        }
        Commands::Build => {
            commands::build::run().await?;
        }
    }

    Ok(())
}
