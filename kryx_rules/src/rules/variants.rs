//! Rules that changed between ruleset versions, kept selectable.

use serde::{Deserialize, Serialize};

use crate::mechanics::ActionCost;

/// What the record's `healthDiceUsed` field counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthDiceMode {
    /// Dice spent so far; remaining is `level - used`.
    #[default]
    Used,
    /// Dice still available.
    Remaining,
}

impl HealthDiceMode {
    pub fn remaining(&self, level: u32, recorded: u32) -> u32 {
        match self {
            HealthDiceMode::Used => level.saturating_sub(recorded),
            HealthDiceMode::Remaining => recorded,
        }
    }
}

/// A class that uses its second wind faster from some level on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondWindOverride {
    pub class: String,
    pub min_level: u32,
    pub action: ActionCost,
}

/// How long using a second wind takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondWindRule {
    pub default_action: ActionCost,
    /// First matching override wins.
    pub overrides: Vec<SecondWindOverride>,
}

impl Default for SecondWindRule {
    fn default() -> Self {
        Self {
            default_action: ActionCost::Action,
            overrides: vec![SecondWindOverride {
                class: "Warrior".to_string(),
                min_level: 2,
                action: ActionCost::FreeAction,
            }],
        }
    }
}

impl SecondWindRule {
    pub fn action_for(&self, class_name: &str, level: u32) -> ActionCost {
        self.overrides
            .iter()
            .find(|o| o.class == class_name && level >= o.min_level)
            .map(|o| o.action)
            .unwrap_or(self.default_action)
    }
}

/// Effective level of an NPC, used for cantrip scaling and pool sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcLevelRule {
    pub cr_multiplier: f64,
}

impl Default for NpcLevelRule {
    fn default() -> Self {
        Self { cr_multiplier: 1.25 }
    }
}

impl NpcLevelRule {
    /// `max(1, round(cr * multiplier))`
    pub fn level_for(&self, cr: f64) -> u32 {
        let level = (cr * self.cr_multiplier + 0.5).floor();
        level.max(1.0) as u32
    }
}
