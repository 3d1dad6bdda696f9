//! Proficiency bonus scaling for characters and NPCs.

use serde::{Deserialize, Serialize};

/// How proficiency bonuses scale with level and CR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProficiencyRules {
    /// Character levels per tier band.
    pub levels_per_tier: u32,
    /// Proficiency bonus is tier plus this.
    pub bonus_over_tier: i32,
    pub npc_cr_offset: f64,
    pub npc_cr_divisor: f64,
    /// Proficiency multipliers a player may pick for a skill or save.
    pub player_levels: Vec<f64>,
    /// NPC stat blocks allow a wider range.
    pub npc_levels: Vec<f64>,
}

impl Default for ProficiencyRules {
    fn default() -> Self {
        Self {
            levels_per_tier: 5,
            bonus_over_tier: 1,
            npc_cr_offset: 7.0,
            npc_cr_divisor: 4.0,
            player_levels: vec![0.0, 0.5, 1.0],
            npc_levels: vec![0.0, 0.5, 1.0, 1.5],
        }
    }
}

impl ProficiencyRules {
    /// `floor(level / levels_per_tier) + 1`
    pub fn tier_for_level(&self, level: u32) -> i32 {
        (level / self.levels_per_tier.max(1)) as i32 + 1
    }

    pub fn bonus_for_tier(&self, tier: i32) -> i32 {
        tier + self.bonus_over_tier
    }

    /// `floor((max(cr, 1) + offset) / divisor)`
    pub fn npc_bonus(&self, cr: f64) -> i32 {
        ((cr.max(1.0) + self.npc_cr_offset) / self.npc_cr_divisor).floor() as i32
    }

    /// Check if a skill proficiency multiplier is one the sheet allows.
    pub fn is_allowed(&self, proficiency: f64, npc: bool) -> bool {
        let levels = if npc {
            &self.npc_levels
        } else {
            &self.player_levels
        };
        levels.iter().any(|level| *level == proficiency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        let rules = ProficiencyRules::default();
        assert_eq!(rules.tier_for_level(1), 1);
        assert_eq!(rules.tier_for_level(4), 1);
        assert_eq!(rules.tier_for_level(5), 2);
        assert_eq!(rules.tier_for_level(19), 4);
        assert_eq!(rules.tier_for_level(20), 5);
        assert_eq!(rules.bonus_for_tier(2), 3);
    }

    #[test]
    fn test_npc_bonus() {
        let rules = ProficiencyRules::default();
        assert_eq!(rules.npc_bonus(0.25), 2);
        assert_eq!(rules.npc_bonus(1.0), 2);
        assert_eq!(rules.npc_bonus(5.0), 3);
        assert_eq!(rules.npc_bonus(9.0), 4);
        assert_eq!(rules.npc_bonus(30.0), 9);
    }

    #[test]
    fn test_allowed_levels() {
        let rules = ProficiencyRules::default();
        assert!(rules.is_allowed(0.5, false));
        assert!(!rules.is_allowed(1.5, false));
        assert!(rules.is_allowed(1.5, true));
        assert!(!rules.is_allowed(2.0, true));
    }
}
