//! Sheet derivation - turns a stored character into its computed sheet
//!
//! Everything here is pure and total over `i32` input: no I/O, no shared
//! mutable state, no panics. Out-of-range levels or scores are computed
//! through the same formulas rather than rejected.

use std::collections::BTreeMap;

use crate::domain::entities::{Character, CharacterSheet};
use crate::domain::value_objects::{skill_map, Ability, HitPoints};

/// `2 + (level - 1) / 4`, with truncating division
pub fn proficiency_bonus(level: i32) -> i32 {
    2 + level.saturating_sub(1) / 4
}

/// `floor((score - 10) / 2)`. Score 9 gives -1, not 0.
pub fn ability_modifier(score: i32) -> i32 {
    // Widened so `score - 10` cannot overflow; the halved result always fits.
    (i64::from(score) - 10).div_euclid(2) as i32
}

fn bonus_if(proficient: bool, proficiency_bonus: i32) -> i32 {
    if proficient {
        proficiency_bonus
    } else {
        0
    }
}

/// Linear house rule, not a hit-die roll: `8 + con_mod * level`
pub fn max_hit_points(constitution_modifier: i32, level: i32) -> i32 {
    // Widened and clamped once, so results past either bound saturate exactly.
    (8 + i64::from(constitution_modifier) * i64::from(level))
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Derive the full sheet for `character`
pub fn derive_sheet(character: &Character) -> CharacterSheet {
    let proficiency_bonus = proficiency_bonus(character.level);
    let modifiers = character.ability_scores.map(ability_modifier);

    let saving_throws: BTreeMap<_, _> = Ability::ALL
        .into_iter()
        .map(|ability| {
            let proficient = character
                .saving_throw_proficiencies
                .contains(ability.key());
            (
                ability,
                modifiers.get(ability) + bonus_if(proficient, proficiency_bonus),
            )
        })
        .collect();

    // Proficiency names not in the table never match and contribute nothing.
    let skills: BTreeMap<_, _> = skill_map()
        .iter()
        .map(|(&skill, &ability)| {
            let proficient = character.skill_proficiencies.contains(skill.name());
            (
                skill,
                modifiers.get(ability) + bonus_if(proficient, proficiency_bonus),
            )
        })
        .collect();

    let max_hp = max_hit_points(modifiers.constitution, character.level);

    CharacterSheet {
        name: character.name.clone(),
        class: character.class.clone(),
        race: character.race.clone(),
        alignment: character.alignment.clone(),
        level: character.level,
        proficiency_bonus,
        hit_points: HitPoints::clamped(character.current_hit_points, max_hp),
        armor_class: 10 + modifiers.dexterity,
        initiative: modifiers.dexterity,
        ability_scores: character.ability_scores,
        ability_modifiers: modifiers,
        saving_throws,
        skills,
        skill_map: skill_map(),
        skill_proficiencies: character.skill_proficiencies.clone(),
        saving_throw_proficiencies: character.saving_throw_proficiencies.clone(),
    }
}
