use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use squad_roster::graphql::schema_sdl;
use squad_roster::server::{self, ServerConfig};
use squad_roster::store::{RecordStore, Seed};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the GraphQL API
    Serve {
        #[clap(long, default_value = "0.0.0.0")]
        host: String,
        #[clap(short, long, default_value = "5555")]
        port: u16,
        #[clap(long)]
        cors_origin: Option<String>,
        /// YAML or JSON file with initial players and positions
        #[clap(short, long, conflicts_with = "empty")]
        seed: Option<PathBuf>,
        /// Start with no players or positions
        #[clap(long)]
        empty: bool,
    },
    /// Print the GraphQL schema
    Schema {
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            host,
            port,
            cors_origin,
            seed,
            empty,
        } => {
            let store = match (seed, empty) {
                (Some(path), _) => {
                    info!("Loading seed data from {}", path.display());
                    RecordStore::from_seed(Seed::load(&path)?)?
                }
                (None, true) => RecordStore::new(),
                (None, false) => RecordStore::with_sample_data(),
            };

            let config = ServerConfig {
                host,
                port,
                cors_origin,
            };
            info!("Starting server on port {}", config.port);
            server::start_server(Arc::new(store), &config).await?;
        }
        Commands::Schema { output } => {
            let sdl = schema_sdl();
            match output {
                Some(path) => {
                    std::fs::write(&path, sdl)?;
                    info!("Wrote schema to {}", path.display());
                }
                None => println!("{}", sdl),
            }
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_deref()
        .unwrap_or("info")
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_string()))
        .with_writer(std::io::stderr)
        .init();
}
