//! Experience tables: level thresholds for characters, kill rewards for NPCs.

use serde::{Deserialize, Serialize};

/// Cumulative XP thresholds; index 0 is the level 1 threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperienceTable(pub Vec<u64>);

impl Default for ExperienceTable {
    fn default() -> Self {
        Self(vec![
            0, 300, 900, 2700, 6500, 14000, 23000, 34000, 48000, 64000, 85000, 100000, 120000,
            140000, 165000, 195000, 225000, 265000, 305000, 355000,
        ])
    }
}

impl ExperienceTable {
    /// The threshold at `index`, clamped to the last entry.
    pub fn threshold(&self, index: u32) -> u64 {
        let last = self.0.len().saturating_sub(1);
        self.0
            .get((index as usize).min(last))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// XP granted for defeating a creature, by challenge rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeExperience {
    /// Reward for each whole CR starting at 0.
    pub table: Vec<u64>,
    /// Below CR 1 the reward is `max(cr * fractional_multiplier, fractional_minimum)`.
    pub fractional_multiplier: f64,
    pub fractional_minimum: f64,
}

impl Default for ChallengeExperience {
    fn default() -> Self {
        Self {
            table: vec![
                10, 200, 450, 700, 1100, 1800, 2300, 2900, 3900, 5000, 5900, 7200, 8400, 10000,
                11500, 13000, 15000, 18000, 20000, 22000, 25000, 33000, 41000, 50000, 62000,
                75000, 90000, 105000, 120000, 135000, 155000,
            ],
            fractional_multiplier: 200.0,
            fractional_minimum: 10.0,
        }
    }
}

impl ChallengeExperience {
    /// Kill XP for `cr`, or `None` when the CR has no table entry.
    pub fn reward(&self, cr: f64) -> Option<f64> {
        if cr < 1.0 {
            return Some((cr * self.fractional_multiplier).max(self.fractional_minimum));
        }
        if cr.fract() != 0.0 {
            return None;
        }
        self.table.get(cr as usize).map(|xp| *xp as f64)
    }
}
