//! The derived-attributes engine.
//!
//! [`compute_derived`] reads a raw [`ActorRecord`] and returns a fresh
//! [`DerivedOverlay`]. The record is never modified and nothing is cached, so
//! the host can rebuild the overlay after every change. Bad data degrades to a
//! safe value with a `warn` log instead of failing.

mod details;
mod encumbrance;
mod experience;
mod math;
mod resources;
mod scores;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::entities::{ActorRecord, ActorVariant, CarriedResources, ClassInfo};
use crate::mechanics::{ActionCost, ResourceKind};
use crate::rules::{ResourceLabels, RulesTable};

/// Fortitude, reflex and will totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SaveTotals {
    pub fortitude: i32,
    pub reflex: i32,
    pub will: i32,
}

/// One skill: ability modifier, scaled proficiency, total and passive score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTotal {
    #[serde(rename = "mod")]
    pub modifier: i32,
    pub prof: i32,
    pub total: i32,
    pub passive: i32,
}

/// Initiative modifier. `prof` is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initiative {
    #[serde(rename = "mod")]
    pub modifier: i32,
    pub prof: i32,
    pub bonus: i32,
    pub total: i32,
}

/// One resource pool as the sheet shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    /// Carried over from the record untouched.
    pub remaining: i32,
    pub value: i32,
    pub max: i32,
    /// Most points a single superpower may spend.
    pub limit: i32,
    pub dc: i32,
    #[serde(flatten)]
    pub labels: ResourceLabels,
}

/// The mana and stamina pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainResources {
    pub mana: ResourcePool,
    pub stamina: ResourcePool,
}

impl MainResources {
    /// The pool for `kind`.
    pub fn get(&self, kind: ResourceKind) -> &ResourcePool {
        match kind {
            ResourceKind::Mana => &self.mana,
            ResourceKind::Stamina => &self.stamina,
        }
    }
}

/// Carried weight against carrying capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Encumbrance {
    pub value: f64,
    pub max: f64,
    pub pct: f64,
    pub encumbered: bool,
}

/// Progress through the current level, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceProgress {
    pub value: u64,
    /// Threshold of the current level.
    pub min: u64,
    /// Threshold of the next level.
    pub max: u64,
    pub pct: u32,
}

/// Derived values only player characters have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterOverlay {
    pub level: u32,
    pub tier: i32,
    pub health_dice_remaining: u32,
    pub second_wind_action: ActionCost,
}

/// Derived values only NPCs have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcOverlay {
    pub level: u32,
    /// XP for defeating this NPC; `None` when the CR is not in the table.
    pub kill_experience: Option<f64>,
    pub spell_level: Option<f64>,
}

/// Character or NPC specific derived values, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ActorDetails {
    Character(CharacterOverlay),
    Npc(NpcOverlay),
}

/// Everything the engine derives for one actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedOverlay {
    pub prof: i32,
    pub saves: SaveTotals,
    pub skills: BTreeMap<String, SkillTotal>,
    pub initiative: Initiative,
    pub main_resources: MainResources,
    pub encumbrance: Encumbrance,
    pub defense_soak: i32,
    /// Class experience progress; characters only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceProgress>,
    pub details: ActorDetails,
}

impl DerivedOverlay {
    /// Character tier; NPCs have none.
    pub fn tier(&self) -> Option<i32> {
        match &self.details {
            ActorDetails::Character(character) => Some(character.tier),
            ActorDetails::Npc(_) => None,
        }
    }

    /// Class experience progress; NPCs have none.
    pub fn experience(&self) -> Option<&ExperienceProgress> {
        self.experience.as_ref()
    }

    /// Serialize for the host sheet.
    pub fn to_json(&self) -> crate::error::RulesResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// `8 + ability + prof + bonus`, shared by the spell and maneuver DCs.
pub fn superpower_dc(ability_score: i32, prof: i32, bonus: i32) -> i32 {
    8i32.saturating_add(ability_score)
        .saturating_add(prof)
        .saturating_add(bonus)
}

/// Compute the overlay for `record`, using `carried` for the remaining resource points.
pub fn compute_derived(
    record: &ActorRecord,
    carried: CarriedResources,
    rules: &RulesTable,
) -> DerivedOverlay {
    let (prof, experience, details) = match &record.variant {
        ActorVariant::Character(character) => {
            let level = effective_level(&record.name, &character.class);
            let tier = rules.proficiency.tier_for_level(level);
            let prof = rules.proficiency.bonus_for_tier(tier);
            let progress = experience::class_progress(character.exp, level, rules);
            let overlay = details::character(character, level, tier, rules);
            (prof, Some(progress), ActorDetails::Character(overlay))
        }
        ActorVariant::Npc(npc) => {
            let prof = rules.proficiency.npc_bonus(npc.cr);
            (prof, None, ActorDetails::Npc(details::npc(record, npc, rules)))
        }
    };

    let overlay = DerivedOverlay {
        prof,
        saves: scores::save_totals(&record.abilities, &record.saves, prof),
        skills: scores::skill_totals(record, prof, rules),
        initiative: scores::initiative(record),
        main_resources: resources::main_resources(record, carried, prof, rules),
        encumbrance: encumbrance::encumbrance(record, rules),
        defense_soak: encumbrance::defense_soak(&record.items),
        experience,
        details,
    };

    debug!(
        actor = %record.name,
        prof = overlay.prof,
        skills = overlay.skills.len(),
        encumbered = overlay.encumbrance.encumbered,
        "recomputed derived attributes"
    );
    overlay
}

fn effective_level(actor: &str, class: &ClassInfo) -> u32 {
    if class.level == 0 {
        warn!(actor, "class level is 0, treating as 1");
        return 1;
    }
    class.level
}

impl ActorRecord {
    /// Derive the overlay using the resources stored on this record.
    pub fn prepare(&self, rules: &RulesTable) -> DerivedOverlay {
        compute_derived(self, self.carried_resources(), rules)
    }
}
