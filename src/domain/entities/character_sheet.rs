//! Character sheet - the fully computed, read-ready view of a character

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::Character;
use crate::domain::value_objects::{Ability, AbilityScores, CharacterId, HitPoints, Skill};

/// Copy-through fields of a [`Character`] plus everything derived from them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSheet {
    pub name: String,
    pub class: String,
    pub race: String,
    pub alignment: String,
    pub level: i32,
    pub proficiency_bonus: i32,
    pub hit_points: HitPoints,
    pub armor_class: i32,
    pub initiative: i32,
    pub ability_scores: AbilityScores,
    pub ability_modifiers: AbilityScores,
    /// Always holds all six abilities
    pub saving_throws: BTreeMap<Ability, i32>,
    /// Always holds every skill of the reference table
    pub skills: BTreeMap<Skill, i32>,
    pub skill_map: &'static BTreeMap<Skill, Ability>,
    pub skill_proficiencies: BTreeSet<String>,
    pub saving_throw_proficiencies: BTreeSet<String>,
}

impl CharacterSheet {
    pub fn saving_throw(&self, ability: Ability) -> i32 {
        self.saving_throws.get(&ability).copied().unwrap_or_default()
    }

    pub fn skill(&self, skill: Skill) -> i32 {
        self.skills.get(&skill).copied().unwrap_or_default()
    }

    /// Rebuild the raw record from the copy-through fields.
    ///
    /// The sheet does not carry an id, so the caller supplies it. Stored hit
    /// points become the already-clamped current value.
    pub fn to_character(&self, id: impl Into<CharacterId>) -> Character {
        Character {
            id: id.into(),
            name: self.name.clone(),
            class: self.class.clone(),
            race: self.race.clone(),
            alignment: self.alignment.clone(),
            level: self.level,
            current_hit_points: self.hit_points.current,
            ability_scores: self.ability_scores,
            skill_proficiencies: self.skill_proficiencies.clone(),
            saving_throw_proficiencies: self.saving_throw_proficiencies.clone(),
        }
    }
}
