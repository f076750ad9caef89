//! Character store factory - Creates the repository selected by configuration

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::infrastructure::config::{CharacterStoreBackend, CharacterStoreConfig};
use crate::infrastructure::persistence::{InMemoryCharacterRepository, SqliteCharacterRepository};

pub async fn create_character_repository(
    config: &CharacterStoreConfig,
) -> Result<Arc<dyn CharacterRepositoryPort>> {
    match config.backend {
        CharacterStoreBackend::Memory => {
            tracing::info!("Using in-memory character store");
            let repository: Arc<dyn CharacterRepositoryPort> =
                Arc::new(InMemoryCharacterRepository::new());
            Ok(repository)
        }
        CharacterStoreBackend::Sqlite => {
            if let Some(parent) = Path::new(&config.sqlite_path).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
            }

            let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", config.sqlite_path))
                .await
                .context("Failed to connect to SQLite database")?;
            let repository = SqliteCharacterRepository::new(pool)
                .await
                .context("Failed to initialize characters table")?;

            tracing::info!("Using SQLite character store at {}", config.sqlite_path);
            let repository: Arc<dyn CharacterRepositoryPort> = Arc::new(repository);
            Ok(repository)
        }
    }
}
