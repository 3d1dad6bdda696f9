//! Save, skill and initiative totals.

use std::collections::BTreeMap;
use tracing::warn;

use super::math::{half_floor, scaled_proficiency};
use super::{Initiative, SaveTotals, SkillTotal};
use crate::entities::{Abilities, ActorRecord, SaveProficiencies};
use crate::rules::RulesTable;

/// Fortitude uses con, reflex the mean of str and dex, will the mean of the
/// two best mental scores.
pub(crate) fn save_totals(
    abilities: &Abilities,
    saves: &SaveProficiencies,
    prof: i32,
) -> SaveTotals {
    let (int, cha, wis) = (abilities.intelligence, abilities.charisma, abilities.wisdom);
    let best_two_mental = int
        .saturating_add(cha)
        .saturating_add(wis)
        .saturating_sub(int.min(cha).min(wis));

    SaveTotals {
        fortitude: scaled_proficiency(prof, saves.fortitude).saturating_add(abilities.constitution),
        reflex: scaled_proficiency(prof, saves.reflex)
            .saturating_add(half_floor(abilities.strength.saturating_add(abilities.dexterity))),
        will: scaled_proficiency(prof, saves.will).saturating_add(half_floor(best_two_mental)),
    }
}

pub(crate) fn skill_totals(
    record: &ActorRecord,
    prof: i32,
    rules: &RulesTable,
) -> BTreeMap<String, SkillTotal> {
    let npc = record.is_npc();
    let mut totals = BTreeMap::new();

    for (id, skill) in &record.skills {
        let Some(ability) = rules.skill_abilities.get(id) else {
            warn!(actor = %record.name, skill = %id, "skill has no controlling ability, skipping");
            continue;
        };
        if !rules.proficiency.is_allowed(skill.proficiency, npc) {
            warn!(
                actor = %record.name,
                skill = %id,
                proficiency = skill.proficiency,
                "unexpected skill proficiency level"
            );
        }

        let modifier = record.abilities.get(*ability);
        let skill_prof = scaled_proficiency(prof, skill.proficiency);
        let total = modifier.saturating_add(skill_prof);
        totals.insert(
            id.clone(),
            SkillTotal {
                modifier,
                prof: skill_prof,
                total,
                passive: total.saturating_add(10),
            },
        );
    }

    totals
}

/// Initiative has no proficiency component; the bonus arrives pre-resolved.
pub(crate) fn initiative(record: &ActorRecord) -> Initiative {
    let modifier = record.abilities.dexterity;
    let bonus = record.bonuses.initiative;
    Initiative {
        modifier,
        prof: 0,
        bonus,
        total: modifier.saturating_add(bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ClassInfo;
    use crate::mechanics::ProgressionKind;

    fn character() -> ActorRecord {
        ActorRecord::character("Test", ClassInfo::new("Mage", "", ProgressionKind::None, 1))
    }

    #[test]
    fn test_will_uses_two_best_mental_scores() {
        let abilities = Abilities::new(0, 0, 0, 10, 18, 14);
        let totals = save_totals(&abilities, &SaveProficiencies::default(), 2);
        assert_eq!(totals.will, 16);
    }

    #[test]
    fn test_save_totals() {
        let abilities = Abilities::new(3, 2, 4, -1, 1, 0);
        let saves = SaveProficiencies {
            fortitude: 1.0,
            reflex: 0.5,
            will: 0.0,
        };
        let totals = save_totals(&abilities, &saves, 3);
        assert_eq!(totals.fortitude, 7);
        // floor(1.5) + floor(5 / 2)
        assert_eq!(totals.reflex, 3);
        // floor((0 + 1) / 2)
        assert_eq!(totals.will, 0);
    }

    #[test]
    fn test_negative_reflex_rounds_down() {
        let abilities = Abilities::new(-2, -1, 0, 0, 0, 0);
        let totals = save_totals(&abilities, &SaveProficiencies::default(), 2);
        assert_eq!(totals.reflex, -2);
    }

    #[test]
    fn test_extreme_values_saturate() {
        let abilities = Abilities::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX, i32::MAX, 1);
        let saves = SaveProficiencies {
            fortitude: 1.0,
            reflex: 1.0,
            will: 1e300,
        };
        let totals = save_totals(&abilities, &saves, 3);
        assert_eq!(totals.fortitude, i32::MAX);
        assert_eq!(totals.will, i32::MAX);

        let rules = RulesTable::kryx();
        let record = character()
            .with_abilities(Abilities::new(0, i32::MAX, 0, 0, 0, 0))
            .with_skill("stealth", 1.0);
        let skills = skill_totals(&record, 2, &rules);
        assert_eq!(skills["stealth"].total, i32::MAX);
        assert_eq!(skills["stealth"].passive, i32::MAX);
    }

    #[test]
    fn test_unmapped_skill_is_skipped() {
        let rules = RulesTable::kryx();
        let record = character()
            .with_abilities(Abilities::new(0, 3, 0, 0, 0, 0))
            .with_skill("stealth", 0.5)
            .with_skill("basketWeaving", 1.0);

        let totals = skill_totals(&record, 2, &rules);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals["stealth"].modifier, 3);
        assert_eq!(totals["stealth"].prof, 1);
        assert_eq!(totals["stealth"].passive, 14);
    }

    #[test]
    fn test_unexpected_proficiency_used_as_is() {
        let rules = RulesTable::kryx();
        let record = character().with_skill("athletics", 2.0);
        let totals = skill_totals(&record, 2, &rules);
        assert_eq!(totals["athletics"].prof, 4);
    }

    #[test]
    fn test_initiative_bonus() {
        let mut record = character().with_abilities(Abilities::new(0, 4, 0, 0, 0, 0));
        record.bonuses.initiative = 2;
        assert_eq!(
            initiative(&record),
            Initiative {
                modifier: 4,
                prof: 0,
                bonus: 2,
                total: 6,
            }
        );
    }
}
