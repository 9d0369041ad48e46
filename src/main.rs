use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_catalog_server::config::{AppConfig, CliConfig, FileConfig};
use movie_catalog_server::movie_store::SqliteMovieStore;
use movie_catalog_server::server::{run_server, RequestsLoggingLevel};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite movie database file.
    pub db_path: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3000)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to an optional TOML config file. File values override CLI values.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        db_path: cli_args.db_path,
        port: cli_args.port,
        logging_level: cli_args.logging_level,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Opening SQLite movie database at {:?}...", config.db_path);
    let movie_store = Arc::new(
        SqliteMovieStore::new(&config.db_path).context("Failed to open the movie database")?,
    );

    info!("Ready to serve at port {}!", config.port);
    run_server(movie_store, config.logging_level, config.port).await
}
