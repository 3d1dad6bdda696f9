//! Carrying capacity configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::mechanics::ActorSize;

/// A fraction kept as numerator/denominator so thresholds like 2/3 stay exact in config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
    pub numerator: f64,
    pub denominator: f64,
}

/// Carrying capacity constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncumbranceConfig {
    pub base_capacity: f64,
    pub strength_multiplier: f64,
    /// Size name -> capacity multiplier. Missing sizes count as 1.
    pub size_multipliers: BTreeMap<String, f64>,
    /// Fraction of capacity above which an actor is encumbered.
    pub threshold: Ratio,
}

impl Default for EncumbranceConfig {
    fn default() -> Self {
        let size_multipliers = [
            ("tiny", 0.5),
            ("small", 1.0),
            ("medium", 1.0),
            ("large", 2.0),
            ("huge", 4.0),
            ("gargantuan", 8.0),
        ]
        .into_iter()
        .map(|(size, multiplier)| (size.to_string(), multiplier))
        .collect();

        Self {
            base_capacity: 150.0,
            strength_multiplier: 30.0,
            size_multipliers,
            threshold: Ratio {
                numerator: 2.0,
                denominator: 3.0,
            },
        }
    }
}

impl EncumbranceConfig {
    pub fn size_multiplier(&self, size: &ActorSize) -> Option<f64> {
        self.size_multipliers.get(size.as_str()).copied()
    }

    /// The encumbrance threshold as a percentage of capacity.
    pub fn threshold_pct(&self) -> f64 {
        100.0 * self.threshold.numerator / self.threshold.denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_multipliers() {
        let config = EncumbranceConfig::default();
        assert_eq!(config.size_multiplier(&ActorSize::Tiny), Some(0.5));
        assert_eq!(config.size_multiplier(&ActorSize::Gargantuan), Some(8.0));
        assert_eq!(config.size_multiplier(&ActorSize::Unknown("colossal".into())), None);
    }

    #[test]
    fn test_threshold_pct() {
        let config = EncumbranceConfig::default();
        assert_eq!(config.threshold_pct(), 200.0 / 3.0);
    }
}
