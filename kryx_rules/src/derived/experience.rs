//! Progress towards the next level and kill rewards.

use tracing::warn;

use super::math::round_half_up;
use super::ExperienceProgress;
use crate::rules::RulesTable;

pub(crate) fn class_progress(exp: u64, level: u32, rules: &RulesTable) -> ExperienceProgress {
    let table = &rules.class_experience;
    let max = table.threshold(level);
    let min = table.threshold(level.saturating_sub(1));
    let required = max as f64 - min as f64;

    let pct = if required <= 0.0 {
        100.0
    } else {
        round_half_up((exp as f64 - min as f64) * 100.0 / required).clamp(0.0, 100.0)
    };

    ExperienceProgress {
        value: exp,
        min,
        max,
        pct: pct as u32,
    }
}

pub(crate) fn kill_experience(actor: &str, cr: f64, rules: &RulesTable) -> Option<f64> {
    let reward = rules.challenge_experience.reward(cr);
    if reward.is_none() {
        warn!(actor, cr, "challenge rating has no experience reward");
    }
    reward
}
