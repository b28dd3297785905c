use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(
    name = "vitrine",
    version,
    about = "Locale-scoped page shell server with metadata resolution",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the shell server
    Serve {
        /// Configuration file (TOML); environment variables are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the listen host
        #[arg(long)]
        host: Option<String>,

        /// Override the listen port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Load and validate configuration, then exit
    Check {
        /// Configuration file (TOML); environment variables are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    setup_tracing(&cli.log_format, cli.verbose)?;

    match cli.command {
        Commands::Serve { config, host, port } => {
            tracing::info!(
                config = ?config,
                host = ?host,
                port = ?port,
                "Starting serve command"
            );
            commands::serve(config, host, port).await?;
        }

        Commands::Check { config } => {
            tracing::info!(config = ?config, "Starting check command");
            commands::check(config)?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("vitrine=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("vitrine=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
