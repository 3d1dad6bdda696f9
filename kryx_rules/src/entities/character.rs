//! Player character and NPC specific record data.

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::mechanics::ProgressionKind;

/// Class information for a player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub archetype: String,
    #[serde(default)]
    pub progression: ProgressionKind,
    #[serde(default = "default_level", deserialize_with = "lenient::unsigned")]
    pub level: u32,
    /// Dice spent or dice remaining, depending on the ruleset's health dice mode.
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub health_dice_used: u32,
    #[serde(default = "default_health_dice")]
    pub health_dice: String,
}

fn default_level() -> u32 {
    1
}

fn default_health_dice() -> String {
    "d8".to_string()
}

impl Default for ClassInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            archetype: String::new(),
            progression: ProgressionKind::None,
            level: default_level(),
            health_dice_used: 0,
            health_dice: default_health_dice(),
        }
    }
}

impl ClassInfo {
    pub fn new(
        name: impl Into<String>,
        archetype: impl Into<String>,
        progression: ProgressionKind,
        level: u32,
    ) -> Self {
        Self {
            name: name.into(),
            archetype: archetype.into(),
            progression,
            level,
            ..Default::default()
        }
    }
}

/// Player character specific record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDetails {
    #[serde(default)]
    pub class: ClassInfo,
    /// Current experience points.
    #[serde(default, deserialize_with = "lenient::unsigned_u64")]
    pub exp: u64,
    #[serde(default = "default_second_wind")]
    pub second_wind_available: bool,
}

fn default_second_wind() -> bool {
    true
}

impl CharacterDetails {
    pub fn new(class: ClassInfo) -> Self {
        Self {
            class,
            exp: 0,
            second_wind_available: true,
        }
    }
}

/// Max/limit for an NPC pool; NPC stat blocks state these directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolCaps {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub max: i32,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub limit: i32,
}

/// Mana and stamina caps from an NPC stat block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NpcResourceCaps {
    #[serde(default)]
    pub mana: PoolCaps,
    #[serde(default)]
    pub stamina: PoolCaps,
}

/// NPC specific record data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcDetails {
    /// Challenge rating; fractional values below 1 are common.
    #[serde(default, deserialize_with = "lenient::number")]
    pub cr: f64,
    #[serde(default)]
    pub resources: NpcResourceCaps,
    #[serde(default)]
    pub spellcasting: bool,
    #[serde(default)]
    pub spell_level: Option<u32>,
}

impl NpcDetails {
    pub fn new(cr: f64) -> Self {
        Self {
            cr,
            resources: NpcResourceCaps::default(),
            spellcasting: false,
            spell_level: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_defaults() {
        let class: ClassInfo = serde_json::from_str(r#"{"name": "Mage"}"#).unwrap();
        assert_eq!(class.level, 1);
        assert_eq!(class.progression, ProgressionKind::None);
        assert_eq!(class.health_dice, "d8");
    }

    #[test]
    fn test_character_details_json() {
        let details: CharacterDetails = serde_json::from_str(
            r#"{"class": {"name": "Warrior", "archetype": "Berserker", "progression": "fullMartial",
                "level": "7", "healthDiceUsed": 2}, "exp": 23500}"#,
        )
        .unwrap();
        assert_eq!(details.class.level, 7);
        assert_eq!(details.class.health_dice_used, 2);
        assert_eq!(details.class.progression, ProgressionKind::FullMartial);
        assert_eq!(details.exp, 23500);
        assert!(details.second_wind_available);
    }

    #[test]
    fn test_npc_details_json() {
        let details: NpcDetails = serde_json::from_str(
            r#"{"cr": 0.25, "resources": {"mana": {"max": 6, "limit": 2}}, "spellcasting": true}"#,
        )
        .unwrap();
        assert_eq!(details.cr, 0.25);
        assert_eq!(details.resources.mana.max, 6);
        assert_eq!(details.resources.stamina, PoolCaps::default());
        assert!(details.spellcasting);
        assert_eq!(details.spell_level, None);
    }
}
