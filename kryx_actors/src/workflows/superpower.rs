//! Spending mana, stamina and limited item uses.

use kryx_rules::{augment_steps, can_augment, resource_for, ActorRecord, ResourceKind};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ActorError, ActorResult};
use crate::store::{ActorId, ActorStore};

/// What a superpower use cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperpowerUse {
    pub resource: ResourceKind,
    pub spent_cost: u32,
    /// Points spent above the base cost.
    pub augment_steps: u32,
    pub remaining: i32,
    /// Uses left on the item; `None` when its uses are not limited.
    pub uses_left: Option<u32>,
}

fn remaining_mut(record: &mut ActorRecord, resource: ResourceKind) -> &mut i32 {
    match resource {
        ResourceKind::Mana => &mut record.main_resources.mana.remaining,
        ResourceKind::Stamina => &mut record.main_resources.stamina.remaining,
    }
}

/// Take one use from a limited item, never going below zero.
fn take_use(record: &mut ActorRecord, item_index: usize) -> Option<u32> {
    let item = record.items.get_mut(item_index)?;
    let uses = item.uses.as_mut().filter(|uses| uses.is_limited())?;
    if uses.value == 0 {
        warn!(actor = %record.name, item = %item.name, "item has no uses left");
    }
    uses.value = uses.value.saturating_sub(1);
    Some(uses.value)
}

/// `max(remaining - cost, 0)`
fn spend(record: &mut ActorRecord, resource: ResourceKind, cost: u32) -> i32 {
    let remaining = remaining_mut(record, resource);
    let cost = i32::try_from(cost).unwrap_or(i32::MAX);
    *remaining = remaining.saturating_sub(cost).max(0);
    *remaining
}

impl ActorStore {
    /// Spend points from a pool, never going below zero. Returns the new remaining value.
    pub fn spend_resource(
        &mut self,
        id: ActorId,
        resource: ResourceKind,
        cost: u32,
    ) -> ActorResult<i32> {
        self.update(id, |record| spend(record, resource, cost))
    }

    /// Use the superpower at `item_index`, paying `spent_cost` (the item's base
    /// cost when `None`) from the pool the superpower draws on.
    pub fn use_superpower(
        &mut self,
        id: ActorId,
        item_index: usize,
        spent_cost: Option<u32>,
    ) -> ActorResult<SuperpowerUse> {
        let doc = self.document(id)?;
        let item = doc
            .record()
            .items
            .get(item_index)
            .ok_or_else(|| ActorError::ItemNotFound {
                name: doc.name().to_string(),
                index: item_index,
            })?;

        let resource = resource_for(item)?;
        let base_cost = item.cost;
        let spent_cost = spent_cost.unwrap_or(base_cost);
        let limit = doc.overlay().main_resources.get(resource).limit;
        let steps = augment_steps(base_cost, spent_cost);

        if steps > 0 && !can_augment(base_cost, limit) {
            warn!(
                actor = %doc.name(),
                item = %item.name,
                base_cost,
                spent_cost,
                limit,
                "superpower augmented past what its cost allows"
            );
        }
        info!(
            actor = %doc.name(),
            item = %item.name,
            %resource,
            spent_cost,
            "superpower used"
        );

        let (remaining, uses_left) = self.update(id, |record| {
            let remaining = spend(record, resource, spent_cost);
            (remaining, take_use(record, item_index))
        })?;
        Ok(SuperpowerUse {
            resource,
            spent_cost,
            augment_steps: steps,
            remaining,
            uses_left,
        })
    }
}
