//! Actor records as the host stores them.
//!
//! An [`ActorRecord`] is owned by the host document store. The engine only
//! reads it; derived values live in a separate overlay that is rebuilt on every
//! change.

mod character;
mod components;
pub(crate) mod lenient;

pub use character::*;
pub use components::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::RulesResult;
use crate::items::ItemRecord;
use crate::mechanics::ActorSize;

/// Character or NPC specific part of a record, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ActorVariant {
    Character(CharacterDetails),
    Npc(NpcDetails),
}

/// A raw character or NPC record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRecord {
    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub variant: ActorVariant,

    #[serde(default)]
    pub abilities: Abilities,
    #[serde(default)]
    pub saves: SaveProficiencies,
    /// Skill id -> proficiency. Ordered so derived output is stable.
    #[serde(default)]
    pub skills: BTreeMap<String, SkillEntry>,
    #[serde(default)]
    pub health: Health,
    #[serde(default)]
    pub main_resources: MainResourcesRecord,
    /// Other sheet resources, keyed by slot (`primary`, `secondary`, ...).
    #[serde(default)]
    pub resources: BTreeMap<String, ExtraResource>,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
    #[serde(default)]
    pub traits: Traits,
    #[serde(default)]
    pub attributes: CastingAttributes,
    #[serde(default)]
    pub bonuses: Bonuses,
    #[serde(default)]
    pub flags: ActorFlags,
}

impl ActorRecord {
    fn with_variant(name: impl Into<String>, variant: ActorVariant) -> Self {
        Self {
            name: name.into(),
            variant,
            abilities: Abilities::default(),
            saves: SaveProficiencies::default(),
            skills: BTreeMap::new(),
            health: Health::default(),
            main_resources: MainResourcesRecord::default(),
            resources: BTreeMap::new(),
            items: Vec::new(),
            traits: Traits::default(),
            attributes: CastingAttributes::default(),
            bonuses: Bonuses::default(),
            flags: ActorFlags::default(),
        }
    }

    /// Create a player character record.
    pub fn character(name: impl Into<String>, class: ClassInfo) -> Self {
        Self::with_variant(name, ActorVariant::Character(CharacterDetails::new(class)))
    }

    /// Create an NPC record with the given challenge rating.
    pub fn npc(name: impl Into<String>, cr: f64) -> Self {
        Self::with_variant(name, ActorVariant::Npc(NpcDetails::new(cr)))
    }

    /// Parse a record from the host's JSON representation.
    pub fn from_json(json: &str) -> RulesResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to the host's JSON representation.
    pub fn to_json(&self) -> RulesResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_abilities(mut self, abilities: Abilities) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_skill(mut self, id: impl Into<String>, proficiency: f64) -> Self {
        self.skills.insert(id.into(), SkillEntry::new(proficiency));
        self
    }

    pub fn with_health(mut self, value: i32, max: i32) -> Self {
        self.health = Health::new(value, max);
        self
    }

    pub fn with_resource(mut self, slot: impl Into<String>, resource: ExtraResource) -> Self {
        self.resources.insert(slot.into(), resource);
        self
    }

    pub fn with_item(mut self, item: ItemRecord) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_size(mut self, size: ActorSize) -> Self {
        self.traits.size = size;
        self
    }

    pub fn with_remaining(mut self, mana: i32, stamina: i32) -> Self {
        self.main_resources.mana.remaining = mana;
        self.main_resources.stamina.remaining = stamina;
        self
    }

    /// Check if this record is an NPC.
    pub fn is_npc(&self) -> bool {
        matches!(self.variant, ActorVariant::Npc(_))
    }

    pub fn character_details(&self) -> Option<&CharacterDetails> {
        match &self.variant {
            ActorVariant::Character(details) => Some(details),
            ActorVariant::Npc(_) => None,
        }
    }

    pub fn character_details_mut(&mut self) -> Option<&mut CharacterDetails> {
        match &mut self.variant {
            ActorVariant::Character(details) => Some(details),
            ActorVariant::Npc(_) => None,
        }
    }

    pub fn npc_details(&self) -> Option<&NpcDetails> {
        match &self.variant {
            ActorVariant::Npc(details) => Some(details),
            ActorVariant::Character(_) => None,
        }
    }

    /// The resource points that survive recomputation.
    pub fn carried_resources(&self) -> CarriedResources {
        CarriedResources::from(self.main_resources)
    }
}
