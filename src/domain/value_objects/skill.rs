//! Skills and the fixed skill-to-ability reference table

use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::Ability;

/// A named competency governed by exactly one ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Skill {
    Acrobatics,
    /// Also known as "Analysis/Investigation"; named "Investigation" on the wire
    Investigation,
    Athletics,
    Perception,
    Survival,
    Performance,
    Intimidation,
    History,
    SleightOfHand,
    Arcana,
    Medicine,
    Deception,
    Nature,
    Insight,
    Stealth,
    Persuasion,
    AnimalHandling,
}

impl Skill {
    pub const ALL: [Skill; 17] = [
        Skill::Acrobatics,
        Skill::Investigation,
        Skill::Athletics,
        Skill::Perception,
        Skill::Survival,
        Skill::Performance,
        Skill::Intimidation,
        Skill::History,
        Skill::SleightOfHand,
        Skill::Arcana,
        Skill::Medicine,
        Skill::Deception,
        Skill::Nature,
        Skill::Insight,
        Skill::Stealth,
        Skill::Persuasion,
        Skill::AnimalHandling,
    ];

    /// Canonical name; proficiencies are matched against it exactly
    pub fn name(self) -> &'static str {
        match self {
            Skill::Acrobatics => "Acrobatics",
            Skill::Investigation => "Investigation",
            Skill::Athletics => "Athletics",
            Skill::Perception => "Perception",
            Skill::Survival => "Survival",
            Skill::Performance => "Performance",
            Skill::Intimidation => "Intimidation",
            Skill::History => "History",
            Skill::SleightOfHand => "Sleight of Hand",
            Skill::Arcana => "Arcana",
            Skill::Medicine => "Medicine",
            Skill::Deception => "Deception",
            Skill::Nature => "Nature",
            Skill::Insight => "Insight",
            Skill::Stealth => "Stealth",
            Skill::Persuasion => "Persuasion",
            Skill::AnimalHandling => "Animal Handling",
        }
    }

    /// The ability this skill draws its base modifier from
    pub fn ability(self) -> Ability {
        match self {
            Skill::Athletics => Ability::Strength,
            Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Ability::Dexterity,
            Skill::Investigation | Skill::History | Skill::Arcana | Skill::Nature => {
                Ability::Intelligence
            }
            Skill::Perception
            | Skill::Survival
            | Skill::Medicine
            | Skill::Insight
            | Skill::AnimalHandling => Ability::Wisdom,
            Skill::Performance | Skill::Intimidation | Skill::Deception | Skill::Persuasion => {
                Ability::Charisma
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Skill> {
        Skill::ALL.into_iter().find(|skill| skill.name() == name)
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

static SKILL_MAP: LazyLock<BTreeMap<Skill, Ability>> = LazyLock::new(|| {
    Skill::ALL
        .into_iter()
        .map(|skill| (skill, skill.ability()))
        .collect()
});

/// Process-wide skill reference table, built once and shared read-only
pub fn skill_map() -> &'static BTreeMap<Skill, Ability> {
    &SKILL_MAP
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_seventeen_unique_skills() {
        let names: HashSet<&str> = Skill::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), 17);
        assert_eq!(skill_map().len(), 17);
    }

    #[test]
    fn test_governing_abilities() {
        let expected = [
            ("Acrobatics", Ability::Dexterity),
            ("Investigation", Ability::Intelligence),
            ("Athletics", Ability::Strength),
            ("Perception", Ability::Wisdom),
            ("Survival", Ability::Wisdom),
            ("Performance", Ability::Charisma),
            ("Intimidation", Ability::Charisma),
            ("History", Ability::Intelligence),
            ("Sleight of Hand", Ability::Dexterity),
            ("Arcana", Ability::Intelligence),
            ("Medicine", Ability::Wisdom),
            ("Deception", Ability::Charisma),
            ("Nature", Ability::Intelligence),
            ("Insight", Ability::Wisdom),
            ("Stealth", Ability::Dexterity),
            ("Persuasion", Ability::Charisma),
            ("Animal Handling", Ability::Wisdom),
        ];

        for (name, ability) in expected {
            let skill = Skill::from_name(name).unwrap();
            assert_eq!(skill.ability(), ability, "{name}");
            assert_eq!(skill_map()[&skill], ability);
        }
    }

    #[test]
    fn test_from_name_is_exact_match() {
        assert_eq!(Skill::from_name("Stealth"), Some(Skill::Stealth));
        assert_eq!(Skill::from_name("stealth"), None);
        assert_eq!(Skill::from_name("Sleight Of Hand"), None);
    }

    #[test]
    fn test_investigation_uses_standard_name() {
        assert_eq!(Skill::Investigation.name(), "Investigation");
        assert_eq!(Skill::from_name("Investigation"), Some(Skill::Investigation));
        assert_eq!(Skill::from_name("Analysis/Investigation"), None);
    }

    #[test]
    fn test_skill_map_is_shared() {
        assert!(std::ptr::eq(skill_map(), skill_map()));
    }
}
