use crate::core::{AppError, Result};
use std::env;
use std::path::PathBuf;

pub mod database;

pub use database::DatabaseConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory receiving the report files, created on demand
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("rapport"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            app: AppConfig {
                output_dir: lookup("REPORT_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| AppConfig::default().output_dir),
            },
            database: DatabaseConfig::from_lookup(&lookup)?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.name.trim().is_empty() {
            return Err(AppError::Configuration(
                "Database name must not be empty".to_string(),
            ));
        }

        if self.database.host.trim().is_empty() {
            return Err(AppError::Configuration(
                "Database host must not be empty".to_string(),
            ));
        }

        if self.database.port == 0 {
            return Err(AppError::Configuration(
                "Database port must be greater than 0".to_string(),
            ));
        }

        if self.app.output_dir.as_os_str().is_empty() {
            return Err(AppError::Configuration(
                "Report directory must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
