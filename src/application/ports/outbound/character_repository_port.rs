use async_trait::async_trait;

use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Character not found: {0}")]
    NotFound(CharacterId),
}

/// Storage for raw character records. Any backend qualifies as long as
/// every field round-trips unchanged.
#[async_trait]
pub trait CharacterRepositoryPort: Send + Sync {
    async fn get(&self, id: &CharacterId) -> Result<Option<Character>, RepositoryError>;

    /// Overwrite an existing record. Fails with `NotFound` when there is none.
    async fn save(&self, character: &Character) -> Result<(), RepositoryError>;

    /// Store `character` unless its id is taken. Returns whether it was inserted.
    async fn insert_if_absent(&self, character: &Character) -> Result<bool, RepositoryError>;
}
