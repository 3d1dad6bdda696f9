//! Component definitions shared by characters and NPCs.

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::mechanics::{AbilityId, ActorSize};

/// Ability scores. Kryx uses the score itself as the modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Abilities {
    #[serde(rename = "str", default, deserialize_with = "lenient::integer")]
    pub strength: i32,
    #[serde(rename = "dex", default, deserialize_with = "lenient::integer")]
    pub dexterity: i32,
    #[serde(rename = "con", default, deserialize_with = "lenient::integer")]
    pub constitution: i32,
    #[serde(rename = "int", default, deserialize_with = "lenient::integer")]
    pub intelligence: i32,
    #[serde(rename = "wis", default, deserialize_with = "lenient::integer")]
    pub wisdom: i32,
    #[serde(rename = "cha", default, deserialize_with = "lenient::integer")]
    pub charisma: i32,
}

impl Abilities {
    pub fn new(str: i32, dex: i32, con: i32, int: i32, wis: i32, cha: i32) -> Self {
        Self {
            strength: str,
            dexterity: dex,
            constitution: con,
            intelligence: int,
            wisdom: wis,
            charisma: cha,
        }
    }

    /// Look up a score by ability id.
    pub fn get(&self, ability: AbilityId) -> i32 {
        match ability {
            AbilityId::Str => self.strength,
            AbilityId::Dex => self.dexterity,
            AbilityId::Con => self.constitution,
            AbilityId::Int => self.intelligence,
            AbilityId::Wis => self.wisdom,
            AbilityId::Cha => self.charisma,
        }
    }
}

/// Proficiency multipliers for the three saves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SaveProficiencies {
    #[serde(default, deserialize_with = "lenient::number")]
    pub fortitude: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub reflex: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub will: f64,
}

/// Proficiency multiplier for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(default, deserialize_with = "lenient::number")]
    pub proficiency: f64,
}

impl SkillEntry {
    pub fn new(proficiency: f64) -> Self {
        Self { proficiency }
    }
}

/// Descriptive traits that affect derived values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Traits {
    #[serde(default)]
    pub size: ActorSize,
}

/// Hit points. Temporary health absorbs damage first and `tempmax` raises the
/// ceiling healing can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Health {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub value: i32,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub max: i32,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub temp: i32,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub tempmax: i32,
}

impl Health {
    pub fn new(value: i32, max: i32) -> Self {
        Self {
            value,
            max,
            temp: 0,
            tempmax: 0,
        }
    }

    /// The most health healing can restore.
    pub fn ceiling(&self) -> i32 {
        self.max.saturating_add(self.tempmax)
    }
}

/// A sheet resource outside the two main pools, such as ki or rage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtraResource {
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub value: i32,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub max: i32,
    /// Refilled by a short rest.
    #[serde(default)]
    pub sr: bool,
    /// Refilled by a long rest.
    #[serde(default)]
    pub lr: bool,
}

impl ExtraResource {
    pub fn new(label: impl Into<String>, max: i32) -> Self {
        Self {
            label: label.into(),
            value: max,
            max,
            sr: false,
            lr: false,
        }
    }

    pub fn per_short_rest(mut self) -> Self {
        self.sr = true;
        self
    }

    pub fn per_long_rest(mut self) -> Self {
        self.lr = true;
        self
    }
}

/// Which abilities drive the spell and maneuver DCs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastingAttributes {
    #[serde(default = "default_spellcasting_ability")]
    pub spellcasting_ability: AbilityId,
    #[serde(default = "default_maneuver_ability")]
    pub maneuver_ability: AbilityId,
}

fn default_spellcasting_ability() -> AbilityId {
    AbilityId::Int
}

fn default_maneuver_ability() -> AbilityId {
    AbilityId::Str
}

impl Default for CastingAttributes {
    fn default() -> Self {
        Self {
            spellcasting_ability: default_spellcasting_ability(),
            maneuver_ability: default_maneuver_ability(),
        }
    }
}

/// Situational bonuses, already resolved to numbers by the host's formula evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonuses {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub initiative: i32,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub spell_dc: i32,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub maneuver_dc: i32,
}

/// Optional per-actor rule toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorFlags {
    #[serde(default)]
    pub only_count_equipped_item_weight: bool,
}

/// Points left in one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemainingPoints {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub remaining: i32,
}

/// The persisted part of the resource pools: only `remaining` survives a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MainResourcesRecord {
    #[serde(default)]
    pub mana: RemainingPoints,
    #[serde(default)]
    pub stamina: RemainingPoints,
}

/// Resource points carried over from the previous state of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarriedResources {
    pub mana_remaining: i32,
    pub stamina_remaining: i32,
}

impl From<MainResourcesRecord> for CarriedResources {
    fn from(record: MainResourcesRecord) -> Self {
        Self {
            mana_remaining: record.mana.remaining,
            stamina_remaining: record.stamina.remaining,
        }
    }
}
