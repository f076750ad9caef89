//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::application::services::{CharacterSheetService, CharacterSheetServiceImpl};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{create_character_repository, default_character};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub character_service: CharacterSheetServiceImpl,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let repository = create_character_repository(&config.store).await?;
        Self::with_repository(config, repository).await
    }

    /// Build state over an existing store, seeding the default character
    pub async fn with_repository(
        config: AppConfig,
        repository: Arc<dyn CharacterRepositoryPort>,
    ) -> Result<Self> {
        let character_service = CharacterSheetServiceImpl::new(repository);
        character_service
            .ensure_character(default_character())
            .await?;

        Ok(Self {
            config,
            character_service,
        })
    }
}
