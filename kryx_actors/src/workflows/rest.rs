//! Short rests, long rests and second wind.
//!
//! A rest on a new day also recovers items whose uses come back each day.

use kryx_rules::{
    ActionCost, ActorDetails, ActorRecord, HealthDiceMode, MainResources, RecoveryPeriod,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ActorError, ActorResult};
use crate::store::{ActorId, ActorStore};

/// What a rest gave back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestOutcome {
    pub mana_regained: i32,
    pub stamina_regained: i32,
    pub health_regained: i32,
    pub health_dice_recovered: u32,
    pub second_wind_restored: bool,
    /// Extra sheet resources refilled to their max.
    pub resources_recovered: u32,
    /// Items whose limited uses were restored.
    pub item_uses_recovered: u32,
    pub items_recharged: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rest {
    Short,
    Long,
}

fn recovers(period: &RecoveryPeriod, rest: Rest, new_day: bool) -> bool {
    match period {
        RecoveryPeriod::ShortRest => true,
        RecoveryPeriod::LongRest => rest == Rest::Long,
        RecoveryPeriod::Day => new_day,
        RecoveryPeriod::Charges | RecoveryPeriod::Other(_) => false,
    }
}

/// Refill extra resources flagged for this rest. Resources without a max are skipped.
fn recover_resources(record: &mut ActorRecord, rest: Rest) -> u32 {
    let mut recovered = 0;
    for resource in record.resources.values_mut() {
        let refills = resource.sr || (rest == Rest::Long && resource.lr);
        if resource.max != 0 && refills {
            resource.value = resource.max;
            recovered += 1;
        }
    }
    recovered
}

/// Restore item uses, and on a long rest recharge items without a matching period.
/// Returns `(uses restored, items recharged)`.
fn recover_items(record: &mut ActorRecord, rest: Rest, new_day: bool) -> (u32, u32) {
    let (mut restored, mut recharged) = (0, 0);
    for item in &mut record.items {
        let uses = item
            .uses
            .as_mut()
            .filter(|uses| uses.per.as_ref().is_some_and(|per| recovers(per, rest, new_day)));
        if let Some(uses) = uses {
            uses.value = uses.max;
            restored += 1;
            continue;
        }
        if rest == Rest::Long {
            if let Some(recharge) = item.recharge.as_mut().filter(|r| r.value > 0) {
                recharge.charged = true;
                recharged += 1;
            }
        }
    }
    (restored, recharged)
}

/// Half the pool, rounded up, without going over the max. Never negative.
fn short_rest_regain(max: i32, remaining: i32) -> i32 {
    let half = (max + 1).div_euclid(2);
    (max - remaining).min(half).max(0)
}

/// Half the level rounded up, at least 1, at most the dice spent.
fn health_dice_to_recover(level: u32, used: u32) -> u32 {
    level.div_ceil(2).max(1).min(used)
}

fn recover_health_dice(record: &mut ActorRecord, mode: HealthDiceMode) -> u32 {
    let Some(details) = record.character_details_mut() else {
        return 0;
    };
    let class = &mut details.class;
    let level = class.level.max(1);

    match mode {
        HealthDiceMode::Used => {
            let recovered = health_dice_to_recover(level, class.health_dice_used);
            class.health_dice_used -= recovered;
            recovered
        }
        HealthDiceMode::Remaining => {
            let used = level.saturating_sub(class.health_dice_used);
            let recovered = health_dice_to_recover(level, used);
            class.health_dice_used += recovered;
            recovered
        }
    }
}

impl ActorStore {
    /// Each pool regains up to half its max. Short rest resources and item uses
    /// are refilled, plus daily item uses when `new_day` is set.
    pub fn short_rest(&mut self, id: ActorId, new_day: bool) -> ActorResult<RestOutcome> {
        let pools = self.document(id)?.overlay().main_resources.clone();
        let mut outcome = RestOutcome {
            mana_regained: short_rest_regain(pools.mana.max, pools.mana.remaining),
            stamina_regained: short_rest_regain(pools.stamina.max, pools.stamina.remaining),
            ..RestOutcome::default()
        };

        let name = self.update(id, |record| {
            record.main_resources.mana.remaining += outcome.mana_regained;
            record.main_resources.stamina.remaining += outcome.stamina_regained;
            outcome.resources_recovered = recover_resources(record, Rest::Short);
            (outcome.item_uses_recovered, _) = recover_items(record, Rest::Short, new_day);
            record.name.clone()
        })?;
        info!(
            actor = %name,
            mana = outcome.mana_regained,
            stamina = outcome.stamina_regained,
            "short rest"
        );
        Ok(outcome)
    }

    /// Restore health and both pools, recover health dice, restore second wind,
    /// and refill rest resources and item uses.
    pub fn long_rest(&mut self, id: ActorId, new_day: bool) -> ActorResult<RestOutcome> {
        let pools: MainResources = self.document(id)?.overlay().main_resources.clone();
        let mode = self.rules().health_dice;

        let (name, outcome) = self.update(id, |record| {
            let mut outcome = RestOutcome {
                mana_regained: pools.mana.max - record.main_resources.mana.remaining,
                stamina_regained: pools.stamina.max - record.main_resources.stamina.remaining,
                ..RestOutcome::default()
            };
            record.main_resources.mana.remaining = pools.mana.max;
            record.main_resources.stamina.remaining = pools.stamina.max;

            let health = &mut record.health;
            outcome.health_regained = health.max.saturating_sub(health.value);
            health.value = health.max;
            health.temp = 0;
            health.tempmax = 0;

            outcome.resources_recovered = recover_resources(record, Rest::Long);
            (outcome.item_uses_recovered, outcome.items_recharged) =
                recover_items(record, Rest::Long, new_day);
            outcome.health_dice_recovered = recover_health_dice(record, mode);
            if let Some(details) = record.character_details_mut() {
                outcome.second_wind_restored = !details.second_wind_available;
                details.second_wind_available = true;
            }
            (record.name.clone(), outcome)
        })?;

        info!(
            actor = %name,
            health = outcome.health_regained,
            health_dice = outcome.health_dice_recovered,
            item_uses = outcome.item_uses_recovered,
            "long rest"
        );
        Ok(outcome)
    }

    /// Spend the second wind. Returns how long it takes to use.
    pub fn second_wind(&mut self, id: ActorId) -> ActorResult<ActionCost> {
        let action = match &self.document(id)?.overlay().details {
            ActorDetails::Character(character) => character.second_wind_action,
            ActorDetails::Npc(_) => ActionCost::Action,
        };

        self.try_update(id, |record| {
            let name = record.name.clone();
            let details = record
                .character_details_mut()
                .ok_or_else(|| ActorError::NotACharacter { name: name.clone() })?;
            if !details.second_wind_available {
                return Err(ActorError::SecondWindUnavailable { name });
            }
            details.second_wind_available = false;
            info!(actor = %name, ?action, "second wind used");
            Ok(action)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kryx_rules::{
        ClassInfo, ExtraResource, ItemKind, ItemRecord, ItemUses, ProgressionKind, RulesTable,
    };

    fn warrior(level: u32) -> ActorRecord {
        let mut record = ActorRecord::character(
            "Brakka",
            ClassInfo::new("Warrior", "Berserker", ProgressionKind::FullMartial, level),
        );
        if let Some(details) = record.character_details_mut() {
            details.class.health_dice_used = 3;
        }
        record
    }

    #[test]
    fn test_short_rest_regain() {
        assert_eq!(short_rest_regain(9, 0), 5);
        assert_eq!(short_rest_regain(9, 7), 2);
        assert_eq!(short_rest_regain(9, 9), 0);
        assert_eq!(short_rest_regain(9, 12), 0);
        assert_eq!(short_rest_regain(0, 0), 0);
    }

    #[test]
    fn test_health_dice_to_recover() {
        assert_eq!(health_dice_to_recover(5, 4), 3);
        assert_eq!(health_dice_to_recover(1, 1), 1);
        assert_eq!(health_dice_to_recover(8, 2), 2);
        assert_eq!(health_dice_to_recover(8, 0), 0);
    }

    #[test]
    fn test_short_rest() {
        let mut store = ActorStore::default();
        // stamina max round(2.25 * 4) = 9
        let id = store.create(warrior(4).with_remaining(0, 1));

        let outcome = store.short_rest(id, false).unwrap();
        assert_eq!(outcome.stamina_regained, 5);
        assert_eq!(outcome.mana_regained, 0);
        assert_eq!(store.overlay(id).unwrap().main_resources.stamina.remaining, 6);

        store.short_rest(id, false).unwrap();
        assert_eq!(store.overlay(id).unwrap().main_resources.stamina.remaining, 9);
    }

    #[test]
    fn test_long_rest() {
        let mut store = ActorStore::default();
        let id = store.create(warrior(4).with_remaining(0, 2));
        store.second_wind(id).unwrap();

        let outcome = store.long_rest(id, false).unwrap();
        assert_eq!(outcome.stamina_regained, 7);
        assert_eq!(outcome.health_dice_recovered, 2);
        assert!(outcome.second_wind_restored);

        let record = store.record(id).unwrap();
        assert_eq!(record.main_resources.stamina.remaining, 9);
        let details = record.character_details().unwrap();
        assert_eq!(details.class.health_dice_used, 1);
        assert!(details.second_wind_available);

        let overlay = store.overlay(id).unwrap();
        match &overlay.details {
            ActorDetails::Character(character) => assert_eq!(character.health_dice_remaining, 3),
            ActorDetails::Npc(_) => panic!("expected a character overlay"),
        }
    }

    #[test]
    fn test_long_rest_restores_health() {
        let mut store = ActorStore::default();
        let mut record = warrior(4).with_health(11, 38);
        record.health.temp = 4;
        record.health.tempmax = 6;
        let id = store.create(record);

        let outcome = store.long_rest(id, false).unwrap();
        assert_eq!(outcome.health_regained, 27);
        let health = store.record(id).unwrap().health;
        assert_eq!((health.value, health.temp, health.tempmax), (38, 0, 0));
    }

    #[test]
    fn test_rests_refill_flagged_resources() {
        let mut store = ActorStore::default();
        let mut record = warrior(4)
            .with_resource("primary", ExtraResource::new("Ki", 4).per_short_rest())
            .with_resource("secondary", ExtraResource::new("Rage", 3).per_long_rest())
            .with_resource("tertiary", ExtraResource::new("Luck", 2))
            .with_resource("empty", ExtraResource::new("Unused", 0).per_short_rest());
        for resource in record.resources.values_mut() {
            resource.value = 0;
        }
        let id = store.create(record);

        let outcome = store.short_rest(id, false).unwrap();
        assert_eq!(outcome.resources_recovered, 1);
        let resources = &store.record(id).unwrap().resources;
        assert_eq!(resources["primary"].value, 4);
        assert_eq!(resources["secondary"].value, 0);

        let outcome = store.long_rest(id, false).unwrap();
        assert_eq!(outcome.resources_recovered, 2);
        let resources = &store.record(id).unwrap().resources;
        assert_eq!(resources["secondary"].value, 3);
        assert_eq!(resources["tertiary"].value, 0);
    }

    fn spent(uses: ItemUses) -> ItemUses {
        ItemUses { value: 0, ..uses }
    }

    #[test]
    fn test_rests_restore_item_uses() {
        let mut store = ActorStore::default();
        let record = warrior(4)
            .with_item(
                ItemRecord::new("Lucky Coin", ItemKind::Loot)
                    .with_uses(spent(ItemUses::new(1, RecoveryPeriod::ShortRest))),
            )
            .with_item(
                ItemRecord::new("Healing Word", ItemKind::Feature)
                    .with_uses(spent(ItemUses::new(2, RecoveryPeriod::LongRest))),
            )
            .with_item(
                ItemRecord::new("Wand", ItemKind::Equipment)
                    .with_uses(spent(ItemUses::new(7, RecoveryPeriod::Day))),
            );
        let id = store.create(record);

        let outcome = store.short_rest(id, false).unwrap();
        assert_eq!(outcome.item_uses_recovered, 1);
        let uses = |store: &ActorStore, index: usize| {
            store.record(id).unwrap().items[index]
                .uses
                .as_ref()
                .map(|uses| uses.value)
        };
        assert_eq!(uses(&store, 0), Some(1));
        assert_eq!(uses(&store, 1), Some(0));

        store.short_rest(id, true).unwrap();
        assert_eq!(uses(&store, 2), Some(7));

        // daily uses only come back on a new day
        let outcome = store.long_rest(id, false).unwrap();
        assert_eq!(outcome.item_uses_recovered, 2);
        assert_eq!(uses(&store, 1), Some(2));
    }

    #[test]
    fn test_long_rest_recharges_items() {
        let mut store = ActorStore::default();
        let mut breath = ItemRecord::new("Fire Breath", ItemKind::Feature).with_recharge(5);
        if let Some(recharge) = breath.recharge.as_mut() {
            recharge.charged = false;
        }
        let id = store.create(warrior(4).with_item(breath));

        let outcome = store.short_rest(id, true).unwrap();
        assert_eq!(outcome.items_recharged, 0);

        let outcome = store.long_rest(id, false).unwrap();
        assert_eq!(outcome.items_recharged, 1);
        let recharge = store.record(id).unwrap().items[0].recharge.unwrap();
        assert!(recharge.charged);
    }

    #[test]
    fn test_recovery_periods() {
        assert!(recovers(&RecoveryPeriod::ShortRest, Rest::Short, false));
        assert!(!recovers(&RecoveryPeriod::LongRest, Rest::Short, true));
        assert!(recovers(&RecoveryPeriod::LongRest, Rest::Long, false));
        assert!(!recovers(&RecoveryPeriod::Day, Rest::Long, false));
        assert!(recovers(&RecoveryPeriod::Day, Rest::Short, true));
        assert!(!recovers(&RecoveryPeriod::Charges, Rest::Long, true));
    }

    #[test]
    fn test_long_rest_with_remaining_dice_mode() {
        let mut rules = RulesTable::kryx();
        rules.health_dice = HealthDiceMode::Remaining;
        let mut store = ActorStore::new(rules);
        // 3 of 6 dice left, so 3 spent; recover ceil(6 / 2) = 3
        let id = store.create(warrior(6));

        let outcome = store.long_rest(id, false).unwrap();
        assert_eq!(outcome.health_dice_recovered, 3);
        let details = store.record(id).unwrap().character_details().unwrap();
        assert_eq!(details.class.health_dice_used, 6);
    }

    #[test]
    fn test_second_wind() {
        let mut store = ActorStore::default();
        let id = store.create(warrior(2));

        assert_eq!(store.second_wind(id).unwrap(), ActionCost::FreeAction);
        assert!(matches!(
            store.second_wind(id),
            Err(ActorError::SecondWindUnavailable { .. })
        ));

        let novice = store.create(warrior(1));
        assert_eq!(store.second_wind(novice).unwrap(), ActionCost::Action);
    }

    #[test]
    fn test_npc_rests_and_second_wind() {
        let mut store = ActorStore::default();
        let mut ogre = ActorRecord::npc("Ogre", 2.0);
        if let kryx_rules::ActorVariant::Npc(npc) = &mut ogre.variant {
            npc.resources.stamina.max = 6;
        }
        let id = store.create(ogre);

        let outcome = store.long_rest(id, false).unwrap();
        assert_eq!(outcome.stamina_regained, 6);
        assert_eq!(outcome.health_dice_recovered, 0);
        assert!(!outcome.second_wind_restored);

        assert!(matches!(
            store.second_wind(id),
            Err(ActorError::NotACharacter { .. })
        ));
    }
}
