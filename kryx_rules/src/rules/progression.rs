//! Resource progression multipliers and the archetype-specific pool names.

use serde::{Deserialize, Serialize};

use crate::mechanics::ProgressionKind;

/// Per-level multipliers for one progression kind.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressionMultipliers {
    pub mana: f64,
    pub mana_limit: f64,
    pub stamina: f64,
    pub stamina_limit: f64,
}

impl ProgressionMultipliers {
    pub const fn new(mana: f64, mana_limit: f64, stamina: f64, stamina_limit: f64) -> Self {
        Self {
            mana,
            mana_limit,
            stamina,
            stamina_limit,
        }
    }
}

/// Multipliers for every progression kind, keyed the way class data names them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceProgressionTable {
    pub full_caster: ProgressionMultipliers,
    pub gish_spells: ProgressionMultipliers,
    pub gish_half_half: ProgressionMultipliers,
    pub gish_maneuvers: ProgressionMultipliers,
    pub full_martial: ProgressionMultipliers,
    pub none: ProgressionMultipliers,
}

impl Default for ResourceProgressionTable {
    fn default() -> Self {
        Self {
            full_caster: ProgressionMultipliers::new(1.5, 0.25, 0.0, 0.0),
            gish_spells: ProgressionMultipliers::new(0.75, 0.125, 0.0, 0.0),
            gish_half_half: ProgressionMultipliers::new(0.375, 0.125, 1.125, 0.25),
            gish_maneuvers: ProgressionMultipliers::new(0.0, 0.0, 2.25, 0.25),
            full_martial: ProgressionMultipliers::new(0.0, 0.0, 2.25, 0.25),
            none: ProgressionMultipliers::default(),
        }
    }
}

impl ResourceProgressionTable {
    pub fn get(&self, kind: &ProgressionKind) -> Option<&ProgressionMultipliers> {
        match kind {
            ProgressionKind::FullCaster => Some(&self.full_caster),
            ProgressionKind::GishSpells => Some(&self.gish_spells),
            ProgressionKind::GishHalfHalf => Some(&self.gish_half_half),
            ProgressionKind::GishManeuvers => Some(&self.gish_maneuvers),
            ProgressionKind::FullMartial => Some(&self.full_martial),
            ProgressionKind::None => Some(&self.none),
            ProgressionKind::Other(_) => None,
        }
    }
}

/// Display names for one resource pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLabels {
    pub name: String,
    pub name_singular: String,
    pub name_of_effect: String,
    pub name_of_use: String,
}

impl ResourceLabels {
    pub fn new(name: &str, name_singular: &str, name_of_effect: &str, name_of_use: &str) -> Self {
        Self {
            name: name.to_string(),
            name_singular: name_singular.to_string(),
            name_of_effect: name_of_effect.to_string(),
            name_of_use: name_of_use.to_string(),
        }
    }
}

/// Which classes and archetypes rename the mana pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceNaming {
    /// Classes whose mana is called psi.
    pub psionic_classes: Vec<String>,
    /// Psionic classes on this progression can turn psi into stamina.
    pub psionic_hybrid_progression: ProgressionKind,
    pub psionic_hybrid_stamina_limit: f64,
    /// Archetypes whose mana is called catalysts.
    pub alternate_naming_archetypes: Vec<String>,
    pub psi_name: String,

    pub mana: ResourceLabels,
    pub stamina: ResourceLabels,
    pub catalysts: ResourceLabels,
}

impl Default for ResourceNaming {
    fn default() -> Self {
        Self {
            psionic_classes: vec!["Psionicist".to_string()],
            psionic_hybrid_progression: ProgressionKind::GishSpells,
            psionic_hybrid_stamina_limit: 0.25,
            alternate_naming_archetypes: ["Chemist", "Mutant", "Infiltrator", "Blood Hunter"]
                .iter()
                .map(|a| a.to_string())
                .collect(),
            psi_name: "psi".to_string(),
            mana: ResourceLabels::new("mana", "mana", "spell", "cast"),
            stamina: ResourceLabels::new("stamina", "stamina", "maneuver", "use"),
            catalysts: ResourceLabels::new("catalysts", "catalyst", "concoction", "craft"),
        }
    }
}

impl ResourceNaming {
    pub fn is_psionic(&self, class_name: &str) -> bool {
        self.psionic_classes.iter().any(|c| c == class_name)
    }

    pub fn has_alternate_naming(&self, archetype: &str) -> bool {
        self.alternate_naming_archetypes.iter().any(|a| a == archetype)
    }
}
