//! Character entity - the raw attributes a sheet is derived from

use std::collections::BTreeSet;

use crate::domain::value_objects::{AbilityScores, CharacterId};

/// A player character as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub class: String,
    pub race: String,
    pub alignment: String,
    pub level: i32,
    /// Stored value; may sit above the derived maximum until a sheet clamps it
    pub current_hit_points: i32,
    pub ability_scores: AbilityScores,
    /// Skill names. Names outside the reference table are kept but grant nothing.
    pub skill_proficiencies: BTreeSet<String>,
    /// Lowercase ability keys
    pub saving_throw_proficiencies: BTreeSet<String>,
}

impl Character {
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>, level: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class: String::new(),
            race: String::new(),
            alignment: String::new(),
            level,
            current_hit_points: 0,
            ability_scores: AbilityScores::default(),
            skill_proficiencies: BTreeSet::new(),
            saving_throw_proficiencies: BTreeSet::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = race.into();
        self
    }

    pub fn with_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.alignment = alignment.into();
        self
    }

    pub fn with_hit_points(mut self, current: i32) -> Self {
        self.current_hit_points = current;
        self
    }

    pub fn with_ability_scores(mut self, scores: AbilityScores) -> Self {
        self.ability_scores = scores;
        self
    }

    pub fn with_skill_proficiency(mut self, skill: impl Into<String>) -> Self {
        self.skill_proficiencies.insert(skill.into());
        self
    }

    pub fn with_saving_throw_proficiency(mut self, ability: impl Into<String>) -> Self {
        self.saving_throw_proficiencies.insert(ability.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiencies_are_deduplicated() {
        let character = Character::new("1", "Vex", 3)
            .with_skill_proficiency("Stealth")
            .with_skill_proficiency("Stealth")
            .with_saving_throw_proficiency("dexterity");

        assert_eq!(character.skill_proficiencies.len(), 1);
        assert!(character.saving_throw_proficiencies.contains("dexterity"));
    }
}
