//! Carried weight against carrying capacity, and armor soak.

use tracing::warn;

use super::math::round_to_tenth;
use super::Encumbrance;
use crate::entities::ActorRecord;
use crate::items::{ItemKind, ItemRecord};
use crate::rules::RulesTable;

pub(crate) fn encumbrance(record: &ActorRecord, rules: &RulesTable) -> Encumbrance {
    let config = &rules.encumbrance;
    let only_equipped = record.flags.only_count_equipped_item_weight;

    let carried: f64 = record
        .items
        .iter()
        .filter(|item| item.kind.is_physical())
        .filter(|item| !only_equipped || item.equipped)
        .map(ItemRecord::total_weight)
        .sum();
    let value = round_to_tenth(carried);

    let size_multiplier = config
        .size_multiplier(&record.traits.size)
        .unwrap_or_else(|| {
            warn!(
                actor = %record.name,
                size = %record.traits.size.as_str(),
                "unknown size, using a capacity multiplier of 1"
            );
            1.0
        });
    let strength = f64::from(record.abilities.strength);
    let max = (config.base_capacity + strength * config.strength_multiplier) * size_multiplier;

    let pct = if max > 0.0 {
        (value * 100.0 / max).clamp(0.0, 100.0)
    } else if value > 0.0 {
        100.0
    } else {
        0.0
    };

    Encumbrance {
        value,
        max,
        pct,
        encumbered: pct > config.threshold_pct(),
    }
}

/// Soak granted by equipped armor.
pub(crate) fn defense_soak(items: &[ItemRecord]) -> i32 {
    items
        .iter()
        .filter(|item| item.kind == ItemKind::Equipment && item.equipped)
        .filter_map(|item| item.armor)
        .map(|armor| armor.soak)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Abilities, ClassInfo};
    use crate::mechanics::{ActorSize, PowerType, ProgressionKind};

    fn carrier() -> ActorRecord {
        ActorRecord::character("Mule", ClassInfo::new("Warrior", "", ProgressionKind::None, 1))
    }

    fn weighted(weight: f64) -> ActorRecord {
        carrier().with_item(ItemRecord::new("Sack", ItemKind::Loot).with_weight(1.0, weight))
    }

    #[test]
    fn test_threshold_is_strict() {
        let rules = RulesTable::kryx();

        let at = encumbrance(&weighted(100.0), &rules);
        assert_eq!(at.max, 150.0);
        assert_eq!(at.pct, 200.0 / 3.0);
        assert!(!at.encumbered);

        let above = encumbrance(&weighted(100.1), &rules);
        assert!(above.encumbered);
    }

    #[test]
    fn test_strength_and_size() {
        let rules = RulesTable::kryx();
        let record = carrier()
            .with_abilities(Abilities::new(2, 0, 0, 0, 0, 0))
            .with_size(ActorSize::Large);
        assert_eq!(encumbrance(&record, &rules).max, 420.0);

        let tiny = carrier().with_size(ActorSize::Tiny);
        assert_eq!(encumbrance(&tiny, &rules).max, 75.0);

        let odd = carrier().with_size(ActorSize::Unknown("colossal".into()));
        assert_eq!(encumbrance(&odd, &rules).max, 150.0);
    }

    #[test]
    fn test_only_physical_items_count() {
        let rules = RulesTable::kryx();
        let record = carrier()
            .with_item(ItemRecord::new("Arrows", ItemKind::Consumable).with_weight(20.0, 0.05))
            .with_item(ItemRecord::new("Lantern", ItemKind::Tool).with_weight(1.0, 2.0))
            .with_item(
                ItemRecord::superpower("Fireball", PowerType::Spell, 3).with_weight(1.0, 50.0),
            )
            .with_item(ItemRecord::new("Toughness", ItemKind::Feature).with_weight(1.0, 50.0));

        let load = encumbrance(&record, &rules);
        assert_eq!(load.value, 3.0);
        assert_eq!(load.pct, 2.0);
        assert!(!load.encumbered);
    }

    #[test]
    fn test_only_equipped_flag() {
        let rules = RulesTable::kryx();
        let mut record = carrier()
            .with_item(
                ItemRecord::new("Plate", ItemKind::Equipment)
                    .with_weight(1.0, 65.0)
                    .equipped(),
            )
            .with_item(ItemRecord::new("Anvil", ItemKind::Loot).with_weight(1.0, 100.0));

        assert_eq!(encumbrance(&record, &rules).value, 165.0);
        record.flags.only_count_equipped_item_weight = true;
        assert_eq!(encumbrance(&record, &rules).value, 65.0);
    }

    #[test]
    fn test_pct_clamped() {
        let rules = RulesTable::kryx();
        let load = encumbrance(&weighted(400.0), &rules);
        assert_eq!(load.pct, 100.0);
        assert!(load.encumbered);
    }

    #[test]
    fn test_zero_capacity() {
        let rules = RulesTable::kryx();
        let weak = carrier().with_abilities(Abilities::new(-5, 0, 0, 0, 0, 0));
        let empty = encumbrance(&weak, &rules);
        assert_eq!(empty.max, 0.0);
        assert_eq!(empty.pct, 0.0);

        let loaded = weak.with_item(ItemRecord::new("Coin", ItemKind::Loot).with_weight(1.0, 0.1));
        assert_eq!(encumbrance(&loaded, &rules).pct, 100.0);
    }

    #[test]
    fn test_defense_soak() {
        let items = vec![
            ItemRecord::new("Plate", ItemKind::Equipment).with_soak(3).equipped(),
            ItemRecord::new("Shield", ItemKind::Equipment).with_soak(1).equipped(),
            ItemRecord::new("Spare Mail", ItemKind::Equipment).with_soak(2),
            ItemRecord::new("Cloak", ItemKind::Equipment).equipped(),
            ItemRecord::new("Spiked Club", ItemKind::Weapon).with_soak(5).equipped(),
        ];
        assert_eq!(defense_soak(&items), 4);
    }
}
