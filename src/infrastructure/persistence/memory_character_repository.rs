use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::{CharacterRepositoryPort, RepositoryError};
use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;

/// Process-local character store; contents are lost on restart
#[derive(Default)]
pub struct InMemoryCharacterRepository {
    characters: RwLock<HashMap<CharacterId, Character>>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CharacterRepositoryPort for InMemoryCharacterRepository {
    async fn get(&self, id: &CharacterId) -> Result<Option<Character>, RepositoryError> {
        Ok(self.characters.read().await.get(id).cloned())
    }

    async fn save(&self, character: &Character) -> Result<(), RepositoryError> {
        let mut characters = self.characters.write().await;
        match characters.get_mut(&character.id) {
            Some(stored) => {
                *stored = character.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(character.id.clone())),
        }
    }

    async fn insert_if_absent(&self, character: &Character) -> Result<bool, RepositoryError> {
        let mut characters = self.characters.write().await;
        if characters.contains_key(&character.id) {
            return Ok(false);
        }
        characters.insert(character.id.clone(), character.clone());
        Ok(true)
    }
}
