//! Application configuration
//!
//! Environment variables drive the server and store settings; a JSON file
//! (`CONFIG_PATH`, falling back to the container default) supplies the
//! welcome message shown by the health endpoint.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use config::{Config, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "/app/config/config.json";

/// Which character store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterStoreBackend {
    Memory,
    Sqlite,
}

impl FromStr for CharacterStoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            other => anyhow::bail!("Unknown character store backend: {}", other),
        }
    }
}

/// Character store configuration
#[derive(Debug, Clone)]
pub struct CharacterStoreConfig {
    pub backend: CharacterStoreBackend,
    /// SQLite database file, used by the sqlite backend
    pub sqlite_path: String,
}

/// Contents of the JSON config file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    #[serde(alias = "welcomemessage")]
    pub welcome_message: String,
}

impl FileConfig {
    /// Load from `primary` if given, otherwise (or if that fails) from `fallback`
    pub fn load(primary: Option<&str>, fallback: &str) -> Result<Self> {
        if let Some(path) = primary.filter(|p| !p.is_empty()) {
            match Self::load_from(path) {
                Ok(file) => return Ok(file),
                Err(e) => tracing::warn!("Could not load config from {}: {:#}", path, e),
            }
        }
        Self::load_from(fallback)
            .with_context(|| format!("Failed to load configuration from {}", fallback))
    }

    fn load_from(path: &str) -> Result<Self> {
        Config::builder()
            .add_source(File::new(path, FileFormat::Json))
            .build()?
            .try_deserialize()
            .context("Config file is missing welcomeMessage")
    }
}

/// Application configuration loaded from environment and config file
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,
    pub store: CharacterStoreConfig,
    /// Origin allowed by CORS
    pub cors_allowed_origin: String,
    /// Message returned by the health check
    pub welcome_message: String,
}

impl AppConfig {
    /// Load configuration from environment variables and the config file
    pub fn from_env() -> Result<Self> {
        let file = FileConfig::load(env::var("CONFIG_PATH").ok().as_deref(), DEFAULT_CONFIG_PATH)?;

        Ok(Self {
            server_port: env::var("APP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("APP_PORT must be a valid port number")?,
            store: CharacterStoreConfig {
                backend: env::var("CHARACTER_STORE")
                    .unwrap_or_else(|_| "sqlite".to_string())
                    .parse()
                    .context("CHARACTER_STORE must be 'sqlite' or 'memory'")?,
                sqlite_path: env::var("DATABASE_PATH")
                    .unwrap_or_else(|_| "./data/charsheet.db".to_string()),
            },
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            welcome_message: file.welcome_message,
        })
    }
}
