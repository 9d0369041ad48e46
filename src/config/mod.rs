mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::Result;
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that participate in config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file
    /// config. TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_path = file
            .db_path
            .map(PathBuf::from)
            .or_else(|| cli.db_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("db_path must be specified as an argument or in the config file")
            })?;

        let port = file.port.unwrap_or(cli.port);

        let logging_level = match file.logging_level {
            Some(level) => RequestsLoggingLevel::from_str(&level, true).map_err(|_| {
                anyhow::anyhow!("Invalid logging_level in config file: {}", level)
            })?,
            None => cli.logging_level.clone(),
        };

        Ok(AppConfig {
            db_path,
            port,
            logging_level,
        })
    }
}
