use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::dto::AbilityScoresDto;
use crate::application::ports::outbound::{CharacterRepositoryPort, RepositoryError};
use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;

type CharacterRow = (
    String,
    String,
    String,
    String,
    String,
    i32,
    i32,
    String,
    String,
    String,
);

pub struct SqliteCharacterRepository {
    pool: SqlitePool,
}

impl SqliteCharacterRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        // Create table if not exists
        sqlx::query(r#"
            CREATE TABLE IF NOT EXISTS characters (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                class TEXT NOT NULL,
                race TEXT NOT NULL,
                alignment TEXT NOT NULL,
                level INTEGER NOT NULL,
                current_hit_points INTEGER NOT NULL,
                ability_scores TEXT NOT NULL,
                skill_proficiencies TEXT NOT NULL,
                saving_throw_proficiencies TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#).execute(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// JSON columns of a character
struct EncodedColumns {
    ability_scores: String,
    skill_proficiencies: String,
    saving_throw_proficiencies: String,
}

fn encode(character: &Character) -> Result<EncodedColumns, RepositoryError> {
    let to_json = |value: serde_json::Result<String>| {
        value.map_err(|e| RepositoryError::Serialization(e.to_string()))
    };
    Ok(EncodedColumns {
        ability_scores: to_json(serde_json::to_string(&AbilityScoresDto::from(
            character.ability_scores,
        )))?,
        skill_proficiencies: to_json(serde_json::to_string(&character.skill_proficiencies))?,
        saving_throw_proficiencies: to_json(serde_json::to_string(
            &character.saving_throw_proficiencies,
        ))?,
    })
}

fn decode(row: CharacterRow) -> Result<Character, RepositoryError> {
    let (
        id,
        name,
        class,
        race,
        alignment,
        level,
        current_hit_points,
        ability_scores,
        skill_proficiencies,
        saving_throw_proficiencies,
    ) = row;

    let ability_scores: AbilityScoresDto = serde_json::from_str(&ability_scores)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
    let skill_proficiencies: BTreeSet<String> = serde_json::from_str(&skill_proficiencies)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
    let saving_throw_proficiencies: BTreeSet<String> =
        serde_json::from_str(&saving_throw_proficiencies)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    Ok(Character {
        id: CharacterId::new(id),
        name,
        class,
        race,
        alignment,
        level,
        current_hit_points,
        ability_scores: ability_scores.into(),
        skill_proficiencies,
        saving_throw_proficiencies,
    })
}

#[async_trait]
impl CharacterRepositoryPort for SqliteCharacterRepository {
    async fn get(&self, id: &CharacterId) -> Result<Option<Character>, RepositoryError> {
        let row: Option<CharacterRow> = sqlx::query_as(
            "SELECT id, name, class, race, alignment, level, current_hit_points, ability_scores, skill_proficiencies, saving_throw_proficiencies FROM characters WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(decode).transpose()
    }

    async fn save(&self, character: &Character) -> Result<(), RepositoryError> {
        let columns = encode(character)?;

        let result = sqlx::query(
            "UPDATE characters SET name = ?, class = ?, race = ?, alignment = ?, level = ?, current_hit_points = ?, ability_scores = ?, skill_proficiencies = ?, saving_throw_proficiencies = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(&character.name)
        .bind(&character.class)
        .bind(&character.race)
        .bind(&character.alignment)
        .bind(character.level)
        .bind(character.current_hit_points)
        .bind(columns.ability_scores)
        .bind(columns.skill_proficiencies)
        .bind(columns.saving_throw_proficiencies)
        .bind(character.id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(character.id.clone()));
        }
        Ok(())
    }

    async fn insert_if_absent(&self, character: &Character) -> Result<bool, RepositoryError> {
        let columns = encode(character)?;

        let result = sqlx::query(
            "INSERT OR IGNORE INTO characters (id, name, class, race, alignment, level, current_hit_points, ability_scores, skill_proficiencies, saving_throw_proficiencies) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(character.id.as_str())
        .bind(&character.name)
        .bind(&character.class)
        .bind(&character.race)
        .bind(&character.alignment)
        .bind(character.level)
        .bind(character.current_hit_points)
        .bind(columns.ability_scores)
        .bind(columns.skill_proficiencies)
        .bind(columns.saving_throw_proficiencies)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AbilityScores;
    use crate::infrastructure::persistence::default_character;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn repository() -> SqliteCharacterRepository {
        // One connection, otherwise each pooled connection gets its own in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteCharacterRepository::new(pool).await.unwrap()
    }

    #[tokio::test]
    async fn test_round_trips_every_field() {
        let repo = repository().await;
        let character = default_character()
            .with_skill_proficiency("Basket Weaving")
            .with_hit_points(-3);

        assert!(repo.insert_if_absent(&character).await.unwrap());
        let loaded = repo.get(&character.id).await.unwrap().unwrap();
        assert_eq!(loaded, character);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = repository().await;
        assert!(repo.get(&CharacterId::from("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_if_absent_keeps_existing() {
        let repo = repository().await;
        let original = default_character();
        assert!(repo.insert_if_absent(&original).await.unwrap());

        let other = Character::new(original.id.clone(), "Someone Else", 2);
        assert!(!repo.insert_if_absent(&other).await.unwrap());
        assert_eq!(repo.get(&original.id).await.unwrap().unwrap(), original);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let repo = repository().await;
        let mut character = default_character();
        repo.insert_if_absent(&character).await.unwrap();

        character.level = 9;
        character.ability_scores = AbilityScores::new(8, 8, 8, 8, 8, 8);
        character.saving_throw_proficiencies.clear();
        repo.save(&character).await.unwrap();

        assert_eq!(repo.get(&character.id).await.unwrap().unwrap(), character);
    }

    #[tokio::test]
    async fn test_save_missing_is_not_found() {
        let repo = repository().await;
        let err = repo
            .save(&Character::new("99", "Ghost", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(id) if id.as_str() == "99"));
    }

    #[tokio::test]
    async fn test_corrupt_json_is_serialization_error() {
        let repo = repository().await;
        repo.insert_if_absent(&default_character()).await.unwrap();
        sqlx::query("UPDATE characters SET ability_scores = 'not json'")
            .execute(repo.pool())
            .await
            .unwrap();

        let err = repo.get(&default_character().id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }
}
