//! Ability, damage and save lookups used when an item is rolled.

use super::{resource_for, ItemKind, ItemRecord, SaveScaling, WeaponType};
use crate::derived::{superpower_dc, DerivedOverlay};
use crate::entities::ActorRecord;
use crate::error::{RulesError, RulesResult};
use crate::mechanics::{AbilityId, PowerType, ResourceKind};

/// Determine which ability an item uses when owned by `owner`.
///
/// An explicit ability on the item wins. Otherwise superpowers use the owner's
/// maneuver or spellcasting ability, tools use intelligence, finesse melee
/// weapons use the better of dexterity and strength, ranged weapons use
/// dexterity, and everything else falls back to strength.
pub fn ability_for_item(item: &ItemRecord, owner: &ActorRecord) -> AbilityId {
    if let Some(ability) = item.ability {
        return ability;
    }

    match &item.kind {
        ItemKind::Superpower => match item.power_type {
            Some(PowerType::Maneuver) => owner.attributes.maneuver_ability,
            _ => owner.attributes.spellcasting_ability,
        },
        ItemKind::Tool => AbilityId::Int,
        ItemKind::Weapon => match item.weapon_type {
            Some(WeaponType::SimpleMelee | WeaponType::MartialMelee) => {
                let abilities = &owner.abilities;
                if item.finesse && abilities.dexterity >= abilities.strength {
                    AbilityId::Dex
                } else {
                    AbilityId::Str
                }
            }
            Some(WeaponType::SimpleRanged | WeaponType::MartialRanged) => AbilityId::Dex,
            _ => AbilityId::Str,
        },
        _ => AbilityId::Str,
    }
}

/// Check if the item has at least one damage formula.
pub fn has_damage(item: &ItemRecord) -> bool {
    !item.damage.parts.is_empty()
}

/// Check if the item has a versatile damage formula.
pub fn is_versatile(item: &ItemRecord) -> bool {
    has_damage(item) && item.damage.versatile.is_some()
}

/// Damage formula parts for a damage roll.
pub fn damage_parts(item: &ItemRecord) -> RulesResult<&[String]> {
    if has_damage(item) {
        Ok(&item.damage.parts)
    } else {
        Err(RulesError::NoDamageFormula {
            item: item.name.clone(),
        })
    }
}

/// The item's free-form "other" formula.
pub fn other_formula(item: &ItemRecord) -> RulesResult<&str> {
    match item.formula.as_deref() {
        Some(formula) if !formula.trim().is_empty() => Ok(formula),
        _ => Err(RulesError::NoFormula {
            item: item.name.clone(),
        }),
    }
}

/// DC of the saving throw an item imposes, if it has one.
pub fn item_save_dc(item: &ItemRecord, overlay: &DerivedOverlay) -> Option<i32> {
    let save = item.save?;
    Some(match save.scaling {
        SaveScaling::SpellDc | SaveScaling::AlchemicalDc => overlay.main_resources.mana.dc,
        SaveScaling::ManeuverDc => overlay.main_resources.stamina.dc,
        SaveScaling::FlatDc => save.dc,
    })
}

/// DC of a superpower cast or used by `owner`.
///
/// Uses the item's own ability (see [`ability_for_item`]) with the DC bonus of
/// the pool that pays for it.
pub fn item_dc(
    item: &ItemRecord,
    owner: &ActorRecord,
    overlay: &DerivedOverlay,
) -> RulesResult<i32> {
    let bonus = match resource_for(item)? {
        ResourceKind::Mana => owner.bonuses.spell_dc,
        ResourceKind::Stamina => owner.bonuses.maneuver_dc,
    };
    let ability = ability_for_item(item, owner);
    Ok(superpower_dc(owner.abilities.get(ability), overlay.prof, bonus))
}
