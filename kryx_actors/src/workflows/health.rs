//! Damage and healing.

use kryx_rules::Health;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ActorResult;
use crate::store::{ActorId, ActorStore};

/// What a damage or healing roll did to an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageOutcome {
    /// Damage after the multiplier; negative for healing.
    pub amount: i32,
    pub temp_absorbed: i32,
    pub health: i32,
    pub temp: i32,
}

/// Temporary health soaks damage first. Health ends up in `[0, max + tempmax]`.
fn apply(health: &mut Health, amount: i32) -> i32 {
    let absorbed = if amount > 0 {
        health.temp.max(0).min(amount)
    } else {
        0
    };
    let value = health.value.saturating_sub(amount - absorbed);

    health.temp -= absorbed;
    health.value = value.min(health.ceiling()).max(0);
    absorbed
}

impl ActorStore {
    /// Apply `amount` damage scaled by `multiplier`, rounded down. Negative
    /// amounts heal.
    pub fn apply_damage(
        &mut self,
        id: ActorId,
        amount: i32,
        multiplier: f64,
    ) -> ActorResult<DamageOutcome> {
        let amount = (f64::from(amount) * multiplier).floor() as i32;

        let (name, outcome) = self.update(id, |record| {
            let temp_absorbed = apply(&mut record.health, amount);
            let outcome = DamageOutcome {
                amount,
                temp_absorbed,
                health: record.health.value,
                temp: record.health.temp,
            };
            (record.name.clone(), outcome)
        })?;

        info!(
            actor = %name,
            amount,
            health = outcome.health,
            temp = outcome.temp,
            "damage applied"
        );
        Ok(outcome)
    }
}
