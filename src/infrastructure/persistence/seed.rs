//! The single character the service exposes

use crate::domain::entities::Character;
use crate::domain::value_objects::AbilityScores;

/// Id of the one character served by `/api/character`
pub const DEFAULT_CHARACTER_ID: &str = "1";

/// Record stored on first start when the store has no character yet
pub fn default_character() -> Character {
    Character::new(DEFAULT_CHARACTER_ID, "Aelar", 8)
        .with_class("Ranger")
        .with_race("Wood Elf")
        .with_alignment("Chaotic Good")
        .with_hit_points(65)
        .with_ability_scores(AbilityScores::new(13, 20, 15, 17, 17, 14))
        .with_skill_proficiency("Acrobatics")
        .with_skill_proficiency("Perception")
        .with_skill_proficiency("Stealth")
        .with_skill_proficiency("Survival")
        .with_saving_throw_proficiency("dexterity")
        .with_saving_throw_proficiency("wisdom")
}
