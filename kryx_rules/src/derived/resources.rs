//! Mana and stamina pools.
//!
//! Characters get their caps from the class progression; NPC stat blocks state
//! them directly. `remaining` always comes from the carried state.

use tracing::warn;

use super::math::round_half_up;
use super::{superpower_dc, MainResources, ResourcePool};
use crate::entities::{ActorRecord, ActorVariant, CarriedResources, ClassInfo};
use crate::mechanics::ProgressionKind;
use crate::rules::{ProgressionMultipliers, ResourceLabels, RulesTable};

/// Max and limit of both pools before DCs and carried points are attached.
#[derive(Debug, Clone, PartialEq)]
struct PoolSizes {
    mana_max: i32,
    mana_limit: i32,
    stamina_max: i32,
    stamina_limit: i32,
    mana_labels: ResourceLabels,
}

pub(crate) fn main_resources(
    record: &ActorRecord,
    carried: CarriedResources,
    prof: i32,
    rules: &RulesTable,
) -> MainResources {
    let caps = match &record.variant {
        ActorVariant::Character(character) => class_caps(&record.name, &character.class, rules),
        ActorVariant::Npc(npc) => PoolSizes {
            mana_max: npc.resources.mana.max,
            mana_limit: npc.resources.mana.limit,
            stamina_max: npc.resources.stamina.max,
            stamina_limit: npc.resources.stamina.limit,
            mana_labels: rules.resource_naming.mana.clone(),
        },
    };

    let abilities = &record.abilities;
    let attributes = &record.attributes;
    let bonuses = &record.bonuses;

    MainResources {
        mana: ResourcePool {
            remaining: carried.mana_remaining,
            value: carried.mana_remaining,
            max: caps.mana_max,
            limit: caps.mana_limit,
            dc: superpower_dc(
                abilities.get(attributes.spellcasting_ability),
                prof,
                bonuses.spell_dc,
            ),
            labels: caps.mana_labels,
        },
        stamina: ResourcePool {
            remaining: carried.stamina_remaining,
            value: carried.stamina_remaining,
            max: caps.stamina_max,
            limit: caps.stamina_limit,
            dc: superpower_dc(
                abilities.get(attributes.maneuver_ability),
                prof,
                bonuses.maneuver_dc,
            ),
            labels: rules.resource_naming.stamina.clone(),
        },
    }
}

fn class_caps(actor: &str, class: &ClassInfo, rules: &RulesTable) -> PoolSizes {
    let level = class.level.max(1);
    let scale = f64::from(level);
    let naming = &rules.resource_naming;

    let multipliers = match rules.resource_progression.get(&class.progression) {
        Some(multipliers) => *multipliers,
        None => {
            warn!(
                actor,
                progression = %class.progression,
                "unknown resource progression, pools are empty"
            );
            ProgressionMultipliers::default()
        }
    };

    let mut caps = PoolSizes {
        mana_max: round_half_up(multipliers.mana * scale) as i32,
        mana_limit: (multipliers.mana_limit * scale).ceil() as i32,
        stamina_max: round_half_up(multipliers.stamina * scale) as i32,
        stamina_limit: (multipliers.stamina_limit * scale).ceil() as i32,
        mana_labels: naming.mana.clone(),
    };

    if level == 1 && class.progression == ProgressionKind::GishHalfHalf {
        caps.mana_max = 1;
    }

    if naming.is_psionic(&class.name) {
        caps.mana_labels.name = naming.psi_name.clone();
        if class.progression == naming.psionic_hybrid_progression {
            caps.stamina_limit = (naming.psionic_hybrid_stamina_limit * scale).ceil() as i32;
        }
    }

    if naming.has_alternate_naming(&class.archetype) {
        caps.mana_labels = naming.catalysts.clone();
    }

    caps
}
