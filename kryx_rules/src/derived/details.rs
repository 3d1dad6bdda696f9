use super::experience::kill_experience;
use super::{CharacterOverlay, NpcOverlay};
use crate::entities::{ActorRecord, CharacterDetails, NpcDetails};
use crate::rules::RulesTable;

pub(crate) fn character(
    details: &CharacterDetails,
    level: u32,
    tier: i32,
    rules: &RulesTable,
) -> CharacterOverlay {
    let class = &details.class;
    CharacterOverlay {
        level,
        tier,
        health_dice_remaining: rules.health_dice.remaining(level, class.health_dice_used),
        second_wind_action: rules.second_wind.action_for(&class.name, level),
    }
}

pub(crate) fn npc(record: &ActorRecord, details: &NpcDetails, rules: &RulesTable) -> NpcOverlay {
    // Casters without an explicit level cast at their CR, minimum 1.
    let spell_level = match details.spell_level {
        Some(level) => Some(f64::from(level)),
        None if details.spellcasting => Some(details.cr.max(1.0)),
        None => None,
    };

    NpcOverlay {
        level: rules.npc_level.level_for(details.cr),
        kill_experience: kill_experience(&record.name, details.cr, rules),
        spell_level,
    }
}
