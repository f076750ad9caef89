//! Domain layer - Core rules with no external dependencies
//!
//! This layer contains:
//! - Entities: Character (stored form), CharacterSheet (derived form)
//! - Value Objects: abilities, skills, hit points, identifiers
//! - Domain Services: the pure sheet derivation

pub mod entities;
pub mod services;
pub mod value_objects;
