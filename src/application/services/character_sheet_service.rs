//! Character Sheet Service - Application service serving derived sheets
//!
//! Loads raw characters from the store, hands them to the domain derivation,
//! and applies client updates. The derivation itself never fails; every error
//! here comes from validation or the store.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, instrument};

use crate::application::ports::outbound::{CharacterRepositoryPort, RepositoryError};
use crate::domain::entities::{Character, CharacterSheet};
use crate::domain::services::derive_sheet;
use crate::domain::value_objects::{AbilityScores, CharacterId};

const MAX_NAME_LENGTH: usize = 255;

/// Request to overwrite a character's stored attributes
#[derive(Debug, Clone)]
pub struct UpdateCharacterRequest {
    pub name: String,
    pub class: String,
    pub race: String,
    pub alignment: String,
    pub level: i32,
    /// Stored as given; clamping happens when the sheet is derived
    pub current_hit_points: i32,
    pub ability_scores: AbilityScores,
    pub skill_proficiencies: BTreeSet<String>,
    pub saving_throw_proficiencies: BTreeSet<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SheetServiceError {
    #[error("Invalid character: {0}")]
    Validation(String),
    #[error("Character not found: {0}")]
    NotFound(CharacterId),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for SheetServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => SheetServiceError::NotFound(id),
            other => SheetServiceError::Repository(other),
        }
    }
}

/// Character sheet use cases
#[async_trait]
pub trait CharacterSheetService: Send + Sync {
    /// Load a character and derive its sheet
    async fn get_sheet(&self, id: &CharacterId) -> Result<CharacterSheet, SheetServiceError>;

    /// Store new raw attributes and return the re-derived sheet
    async fn update_character(
        &self,
        id: &CharacterId,
        request: UpdateCharacterRequest,
    ) -> Result<CharacterSheet, SheetServiceError>;

    /// Seed `character` if nothing is stored under its id yet
    async fn ensure_character(&self, character: Character) -> Result<(), SheetServiceError>;
}

/// Default implementation of CharacterSheetService over a repository port
pub struct CharacterSheetServiceImpl {
    repository: Arc<dyn CharacterRepositoryPort>,
}

impl CharacterSheetServiceImpl {
    pub fn new(repository: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { repository }
    }

    /// Validate an update request. Proficiency names are deliberately not
    /// checked; unknown ones are stored and ignored by the derivation.
    fn validate_update_request(request: &UpdateCharacterRequest) -> Result<(), SheetServiceError> {
        if request.name.trim().is_empty() {
            return Err(SheetServiceError::Validation(
                "Character name cannot be empty".to_string(),
            ));
        }
        if request.name.chars().count() > MAX_NAME_LENGTH {
            return Err(SheetServiceError::Validation(format!(
                "Character name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        if request.level < 1 {
            return Err(SheetServiceError::Validation(
                "Character level must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CharacterSheetService for CharacterSheetServiceImpl {
    #[instrument(skip(self))]
    async fn get_sheet(&self, id: &CharacterId) -> Result<CharacterSheet, SheetServiceError> {
        debug!(character_id = %id, "Fetching character sheet");
        let character = self
            .repository
            .get(id)
            .await
            .inspect_err(|e| error!(character_id = %id, "Failed to load character: {}", e))?
            .ok_or_else(|| SheetServiceError::NotFound(id.clone()))?;

        Ok(derive_sheet(&character))
    }

    #[instrument(skip(self, request), fields(name = %request.name, level = request.level))]
    async fn update_character(
        &self,
        id: &CharacterId,
        request: UpdateCharacterRequest,
    ) -> Result<CharacterSheet, SheetServiceError> {
        Self::validate_update_request(&request)?;

        let character = Character {
            id: id.clone(),
            name: request.name,
            class: request.class,
            race: request.race,
            alignment: request.alignment,
            level: request.level,
            current_hit_points: request.current_hit_points,
            ability_scores: request.ability_scores,
            skill_proficiencies: request.skill_proficiencies,
            saving_throw_proficiencies: request.saving_throw_proficiencies,
        };

        self.repository
            .save(&character)
            .await
            .inspect_err(|e| error!(character_id = %id, "Failed to update character: {}", e))?;

        info!(character_id = %id, "Updated character: {}", character.name);
        self.get_sheet(id).await
    }

    #[instrument(skip(self, character), fields(character_id = %character.id))]
    async fn ensure_character(&self, character: Character) -> Result<(), SheetServiceError> {
        if self.repository.insert_if_absent(&character).await? {
            info!("Seeded character: {}", character.name);
        } else {
            debug!("Character already stored");
        }
        Ok(())
    }
}
