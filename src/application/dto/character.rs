use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::services::UpdateCharacterRequest;
use crate::domain::entities::CharacterSheet;
use crate::domain::value_objects::{AbilityScores, HitPoints};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScoresDto {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl From<AbilityScores> for AbilityScoresDto {
    fn from(value: AbilityScores) -> Self {
        Self {
            strength: value.strength,
            dexterity: value.dexterity,
            constitution: value.constitution,
            intelligence: value.intelligence,
            wisdom: value.wisdom,
            charisma: value.charisma,
        }
    }
}

impl From<AbilityScoresDto> for AbilityScores {
    fn from(value: AbilityScoresDto) -> Self {
        Self {
            strength: value.strength,
            dexterity: value.dexterity,
            constitution: value.constitution,
            intelligence: value.intelligence,
            wisdom: value.wisdom,
            charisma: value.charisma,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPointsDto {
    pub current: i32,
    /// Ignored on input; the maximum is always derived
    #[serde(default)]
    pub max: i32,
}

impl From<HitPoints> for HitPointsDto {
    fn from(value: HitPoints) -> Self {
        Self {
            current: value.current,
            max: value.max,
        }
    }
}

/// Fully computed sheet as returned by the API. The id is not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheetDto {
    pub name: String,
    pub class: String,
    pub race: String,
    pub alignment: String,
    pub level: i32,
    pub proficiency_bonus: i32,
    pub hit_points: HitPointsDto,
    pub armor_class: i32,
    pub initiative: i32,
    pub ability_scores: AbilityScoresDto,
    pub ability_modifiers: AbilityScoresDto,
    pub saving_throws: BTreeMap<String, i32>,
    pub skills: BTreeMap<String, i32>,
    pub skill_map: BTreeMap<String, String>,
    pub skill_proficiencies: Vec<String>,
    pub saving_throw_proficiencies: Vec<String>,
}

impl From<CharacterSheet> for CharacterSheetDto {
    fn from(sheet: CharacterSheet) -> Self {
        Self {
            name: sheet.name,
            class: sheet.class,
            race: sheet.race,
            alignment: sheet.alignment,
            level: sheet.level,
            proficiency_bonus: sheet.proficiency_bonus,
            hit_points: sheet.hit_points.into(),
            armor_class: sheet.armor_class,
            initiative: sheet.initiative,
            ability_scores: sheet.ability_scores.into(),
            ability_modifiers: sheet.ability_modifiers.into(),
            saving_throws: sheet
                .saving_throws
                .into_iter()
                .map(|(ability, bonus)| (ability.key().to_string(), bonus))
                .collect(),
            skills: sheet
                .skills
                .into_iter()
                .map(|(skill, bonus)| (skill.name().to_string(), bonus))
                .collect(),
            skill_map: sheet
                .skill_map
                .iter()
                .map(|(skill, ability)| (skill.name().to_string(), ability.name().to_string()))
                .collect(),
            skill_proficiencies: sheet.skill_proficiencies.into_iter().collect(),
            saving_throw_proficiencies: sheet.saving_throw_proficiencies.into_iter().collect(),
        }
    }
}

/// Body of `POST /api/character`. Unknown fields are ignored, so a client
/// may post back a whole sheet it received earlier.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacterRequestDto {
    pub name: String,
    pub class: String,
    pub race: String,
    pub alignment: String,
    pub level: i32,
    pub hit_points: HitPointsDto,
    pub ability_scores: AbilityScoresDto,
    /// Absent or `null` means no proficiencies
    #[serde(default)]
    pub skill_proficiencies: Option<Vec<String>>,
    #[serde(default)]
    pub saving_throw_proficiencies: Option<Vec<String>>,
}

impl From<UpdateCharacterRequestDto> for UpdateCharacterRequest {
    fn from(dto: UpdateCharacterRequestDto) -> Self {
        Self {
            name: dto.name,
            class: dto.class,
            race: dto.race,
            alignment: dto.alignment,
            level: dto.level,
            current_hit_points: dto.hit_points.current,
            ability_scores: dto.ability_scores.into(),
            skill_proficiencies: dto.skill_proficiencies.unwrap_or_default().into_iter().collect(),
            saving_throw_proficiencies: dto
                .saving_throw_proficiencies
                .unwrap_or_default()
                .into_iter()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponseDto {
    pub status: String,
    pub message: String,
}

impl HealthResponseDto {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }
}
