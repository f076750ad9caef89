//! Domain entities - Core business objects

mod character;
mod character_sheet;

pub use character::Character;
pub use character_sheet::CharacterSheet;
