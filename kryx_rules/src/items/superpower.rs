//! Superpower (spell, maneuver, concoction) capability checks.

use super::{ItemKind, ItemRecord};
use crate::error::{RulesError, RulesResult};
use crate::mechanics::{PowerType, ResourceKind};

fn require_superpower(item: &ItemRecord) -> RulesResult<()> {
    if item.kind == ItemKind::Superpower {
        Ok(())
    } else {
        Err(RulesError::NotASuperpower {
            item: item.name.clone(),
            kind: item.kind.clone(),
        })
    }
}

/// The flavour of a superpower. Superpowers without one are treated as spells.
pub fn power_type(item: &ItemRecord) -> RulesResult<PowerType> {
    require_superpower(item)?;
    Ok(item.power_type.unwrap_or(PowerType::Spell))
}

pub fn is_spell(item: &ItemRecord) -> RulesResult<bool> {
    Ok(power_type(item)? == PowerType::Spell)
}

pub fn is_maneuver(item: &ItemRecord) -> RulesResult<bool> {
    Ok(power_type(item)? == PowerType::Maneuver)
}

pub fn is_concoction(item: &ItemRecord) -> RulesResult<bool> {
    Ok(power_type(item)? == PowerType::Concoction)
}

/// Which pool pays for a superpower. Concoctions spend mana under its catalyst name.
pub fn resource_for(item: &ItemRecord) -> RulesResult<ResourceKind> {
    Ok(match power_type(item)? {
        PowerType::Maneuver => ResourceKind::Stamina,
        PowerType::Spell | PowerType::Concoction => ResourceKind::Mana,
    })
}

/// Check if a superpower has a damage formula.
pub fn superpower_deals_damage(item: &ItemRecord) -> RulesResult<bool> {
    require_superpower(item)?;
    Ok(!item.damage.parts.is_empty())
}

/// A superpower can be augmented (spells) or enhanced (maneuvers) when its base
/// cost is positive and below the pool's per-use limit.
pub fn can_augment(cost: u32, limit: i32) -> bool {
    cost > 0 && i64::from(cost) < i64::from(limit)
}

/// Number of extra points spent above the base cost.
pub fn augment_steps(base_cost: u32, spent_cost: u32) -> u32 {
    spent_cost.saturating_sub(base_cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_type_checks() {
        let bolt = ItemRecord::superpower("Fire Bolt", PowerType::Spell, 1);
        assert!(is_spell(&bolt).unwrap());
        assert!(!is_maneuver(&bolt).unwrap());

        let trip = ItemRecord::superpower("Trip Attack", PowerType::Maneuver, 1);
        assert!(is_maneuver(&trip).unwrap());
        assert_eq!(resource_for(&trip).unwrap(), ResourceKind::Stamina);

        let acid = ItemRecord::superpower("Acid Flask", PowerType::Concoction, 2);
        assert!(is_concoction(&acid).unwrap());
        assert_eq!(resource_for(&acid).unwrap(), ResourceKind::Mana);
    }

    #[test]
    fn test_non_superpower_is_precondition_error() {
        let sword = ItemRecord::new("Longsword", ItemKind::Weapon).with_damage("1d8");

        let err = is_spell(&sword).unwrap_err();
        assert!(matches!(
            err,
            RulesError::NotASuperpower { ref item, kind: ItemKind::Weapon } if item == "Longsword"
        ));
        assert!(superpower_deals_damage(&sword).is_err());
        assert!(resource_for(&sword).is_err());
    }

    #[test]
    fn test_superpower_damage() {
        let heal = ItemRecord::superpower("Cure Wounds", PowerType::Spell, 1);
        assert!(!superpower_deals_damage(&heal).unwrap());

        let blast = ItemRecord::superpower("Mind Blast", PowerType::Spell, 3).with_damage("3d6");
        assert!(superpower_deals_damage(&blast).unwrap());
    }

    #[test]
    fn test_missing_power_type_is_spell() {
        let mut item = ItemRecord::superpower("Old Spell", PowerType::Spell, 1);
        item.power_type = None;
        assert!(is_spell(&item).unwrap());
    }

    #[test]
    fn test_augment() {
        assert!(can_augment(1, 2));
        assert!(!can_augment(2, 2));
        assert!(!can_augment(0, 5));
        assert_eq!(augment_steps(2, 5), 3);
        assert_eq!(augment_steps(2, 1), 0);
    }
}
