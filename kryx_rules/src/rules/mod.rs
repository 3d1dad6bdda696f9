//! The rules table: every constant the engine consults.
//!
//! A [`RulesTable`] is built once (from the built-in Kryx values or a TOML
//! file) and passed by reference into every computation. It is never mutated
//! after construction.

mod encumbrance;
mod experience;
mod proficiency;
mod progression;
mod variants;

pub use encumbrance::*;
pub use experience::*;
pub use proficiency::*;
pub use progression::*;
pub use variants::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::error::{RulesError, RulesResult};
use crate::mechanics::AbilityId;

/// All constants the engine reads. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesTable {
    pub version: String,
    pub health_dice: HealthDiceMode,
    /// Cumulative XP thresholds by level.
    pub class_experience: ExperienceTable,
    /// Skill id -> controlling ability.
    pub skill_abilities: BTreeMap<String, AbilityId>,
    pub proficiency: ProficiencyRules,
    pub resource_progression: ResourceProgressionTable,
    pub resource_naming: ResourceNaming,
    pub challenge_experience: ChallengeExperience,
    pub encumbrance: EncumbranceConfig,
    pub second_wind: SecondWindRule,
    pub npc_level: NpcLevelRule,
}

impl Default for RulesTable {
    fn default() -> Self {
        Self::kryx()
    }
}

impl RulesTable {
    /// The built-in Kryx RPG ruleset.
    pub fn kryx() -> Self {
        Self {
            version: "kryx-rpg".to_string(),
            health_dice: HealthDiceMode::default(),
            class_experience: ExperienceTable::default(),
            skill_abilities: default_skill_abilities(),
            proficiency: ProficiencyRules::default(),
            resource_progression: ResourceProgressionTable::default(),
            resource_naming: ResourceNaming::default(),
            challenge_experience: ChallengeExperience::default(),
            encumbrance: EncumbranceConfig::default(),
            second_wind: SecondWindRule::default(),
            npc_level: NpcLevelRule::default(),
        }
    }

    /// Parse a rules table from TOML. Missing sections fall back to the built-in values.
    pub fn from_toml_str(content: &str) -> RulesResult<Self> {
        let rules: RulesTable = toml::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load a rules table from a TOML file.
    pub fn load(path: &Path) -> RulesResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RulesError::InvalidRules(format!("cannot read {}: {}", path.display(), e))
        })?;
        let rules = Self::from_toml_str(&content)?;
        info!(path = %path.display(), version = %rules.version, "loaded rules table");
        Ok(rules)
    }

    /// Write the table in the same TOML format [`RulesTable::from_toml_str`] reads.
    pub fn to_toml_string(&self) -> RulesResult<String> {
        toml::to_string(self).map_err(|e| RulesError::InvalidRules(e.to_string()))
    }

    /// Reject tables the engine cannot compute with.
    pub fn validate(&self) -> RulesResult<()> {
        if self.class_experience.is_empty() {
            return Err(RulesError::InvalidRules(
                "class experience table is empty".to_string(),
            ));
        }
        if self.proficiency.levels_per_tier == 0 {
            return Err(RulesError::InvalidRules(
                "levels per tier must be positive".to_string(),
            ));
        }
        if self.proficiency.npc_cr_divisor <= 0.0 {
            return Err(RulesError::InvalidRules(
                "NPC proficiency divisor must be positive".to_string(),
            ));
        }
        if self.encumbrance.threshold.denominator == 0.0 {
            return Err(RulesError::InvalidRules(
                "encumbrance threshold denominator is zero".to_string(),
            ));
        }
        if !self.encumbrance.base_capacity.is_finite()
            || !self.encumbrance.strength_multiplier.is_finite()
        {
            return Err(RulesError::InvalidRules(
                "encumbrance capacity must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_skill_abilities() -> BTreeMap<String, AbilityId> {
    use AbilityId::*;

    [
        ("alchemy", Int),
        ("arcana", Int),
        ("athletics", Str),
        ("brawn", Str),
        ("coercion", Cha),
        ("acrobatics", Dex),
        ("deception", Cha),
        ("divinity", Wis),
        ("engineering", Int),
        ("insight", Wis),
        ("medicine", Wis),
        ("occult", Int),
        ("perception", Wis),
        ("performance", Cha),
        ("persuasion", Cha),
        ("primal", Wis),
        ("psionics", Int),
        ("skulduggery", Dex),
        ("stealth", Dex),
        ("streetwise", Cha),
        ("wilderness", Wis),
    ]
    .into_iter()
    .map(|(skill, ability)| (skill.to_string(), ability))
    .collect()
}
