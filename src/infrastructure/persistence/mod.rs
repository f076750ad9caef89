//! Character persistence adapters
//!
//! Implementations of the character repository port: SQLite for durable
//! storage and an in-memory map for ephemeral runs.

mod factory;
mod memory_character_repository;
mod seed;
mod sqlite_character_repository;

pub use factory::create_character_repository;
pub use memory_character_repository::InMemoryCharacterRepository;
pub use seed::{default_character, DEFAULT_CHARACTER_ID};
pub use sqlite_character_repository::SqliteCharacterRepository;
