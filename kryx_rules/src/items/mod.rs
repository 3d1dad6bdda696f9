//! Owned items and the per-kind rules that read them.
//!
//! Behaviour is dispatched on [`ItemKind`] through small functions instead of
//! per-type methods. Functions that only make sense for one kind return a
//! [`RulesError`](crate::RulesError) when called on another.

mod attack;
mod superpower;

pub use attack::*;
pub use superpower::*;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::lenient;
use crate::mechanics::{AbilityId, PowerType};

/// Item document types. Unknown types load as [`ItemKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemKind {
    Weapon,
    Equipment,
    Consumable,
    Tool,
    Loot,
    Backpack,
    Superpower,
    Feature,
    Other(String),
}

impl ItemKind {
    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::Weapon => "weapon",
            ItemKind::Equipment => "equipment",
            ItemKind::Consumable => "consumable",
            ItemKind::Tool => "tool",
            ItemKind::Loot => "loot",
            ItemKind::Backpack => "backpack",
            ItemKind::Superpower => "superpower",
            ItemKind::Feature => "feature",
            ItemKind::Other(other) => other,
        }
    }

    /// Physical items have weight and count towards encumbrance.
    pub fn is_physical(&self) -> bool {
        matches!(
            self,
            ItemKind::Weapon
                | ItemKind::Equipment
                | ItemKind::Consumable
                | ItemKind::Tool
                | ItemKind::Loot
                | ItemKind::Backpack
        )
    }
}

impl From<String> for ItemKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "weapon" => ItemKind::Weapon,
            "equipment" => ItemKind::Equipment,
            "consumable" => ItemKind::Consumable,
            "tool" => ItemKind::Tool,
            "loot" => ItemKind::Loot,
            "backpack" => ItemKind::Backpack,
            "superpower" => ItemKind::Superpower,
            "feature" | "feat" => ItemKind::Feature,
            _ => ItemKind::Other(value),
        }
    }
}

impl From<ItemKind> for String {
    fn from(kind: ItemKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weapon categories; ranged types attack with dexterity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    #[serde(rename = "simpleM")]
    SimpleMelee,
    #[serde(rename = "martialM")]
    MartialMelee,
    #[serde(rename = "simpleR")]
    SimpleRanged,
    #[serde(rename = "martialR")]
    MartialRanged,
    #[serde(rename = "natural")]
    Natural,
    #[serde(rename = "siege")]
    Siege,
    #[serde(rename = "improv")]
    Improvised,
}

/// Armor values of an equipment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArmorData {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub soak: i32,
}

/// Damage formulas of an item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DamageData {
    /// Damage formula parts, evaluated by the host's dice roller.
    #[serde(default)]
    pub parts: Vec<String>,
    #[serde(default)]
    pub versatile: Option<String>,
}

/// How the DC of an item's saving throw is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveScaling {
    SpellDc,
    AlchemicalDc,
    ManeuverDc,
    FlatDc,
}

/// The saving throw an item forces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSave {
    pub ability: AbilityId,
    pub scaling: SaveScaling,
    /// Only meaningful for [`SaveScaling::FlatDc`].
    #[serde(default, deserialize_with = "lenient::integer")]
    pub dc: i32,
}

/// When an item's limited uses come back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecoveryPeriod {
    ShortRest,
    LongRest,
    Day,
    Charges,
    Other(String),
}

impl RecoveryPeriod {
    pub fn as_str(&self) -> &str {
        match self {
            RecoveryPeriod::ShortRest => "sr",
            RecoveryPeriod::LongRest => "lr",
            RecoveryPeriod::Day => "day",
            RecoveryPeriod::Charges => "charges",
            RecoveryPeriod::Other(other) => other,
        }
    }
}

impl From<String> for RecoveryPeriod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sr" => RecoveryPeriod::ShortRest,
            "lr" => RecoveryPeriod::LongRest,
            "day" => RecoveryPeriod::Day,
            "charges" => RecoveryPeriod::Charges,
            _ => RecoveryPeriod::Other(value),
        }
    }
}

impl From<RecoveryPeriod> for String {
    fn from(period: RecoveryPeriod) -> Self {
        period.as_str().to_string()
    }
}

/// Limited uses of an item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemUses {
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub value: u32,
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub max: u32,
    #[serde(default)]
    pub per: Option<RecoveryPeriod>,
}

impl ItemUses {
    pub fn new(max: u32, per: RecoveryPeriod) -> Self {
        Self {
            value: max,
            max,
            per: Some(per),
        }
    }

    /// Uses are only tracked when a recovery period is set.
    pub fn is_limited(&self) -> bool {
        self.per
            .as_ref()
            .is_some_and(|per| !per.as_str().is_empty())
    }
}

/// Recharge on a d6 roll of `value` or higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemRecharge {
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub value: u32,
    #[serde(default)]
    pub charged: bool,
}

/// An item owned by an actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default, deserialize_with = "lenient::non_negative")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient::non_negative")]
    pub weight: f64,
    #[serde(default)]
    pub equipped: bool,
    #[serde(default)]
    pub armor: Option<ArmorData>,

    #[serde(default)]
    pub power_type: Option<PowerType>,
    /// Base resource cost of a superpower.
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub cost: u32,

    #[serde(default)]
    pub damage: DamageData,
    #[serde(default)]
    pub save: Option<ItemSave>,
    #[serde(default)]
    pub formula: Option<String>,

    #[serde(default)]
    pub weapon_type: Option<WeaponType>,
    #[serde(default)]
    pub finesse: bool,
    /// Explicit ability override; inferred from the owner when absent.
    #[serde(default)]
    pub ability: Option<AbilityId>,

    #[serde(default)]
    pub uses: Option<ItemUses>,
    #[serde(default)]
    pub recharge: Option<ItemRecharge>,
}

impl ItemRecord {
    /// Create an item with a quantity of 1 and no weight.
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
            quantity: 1.0,
            weight: 0.0,
            equipped: false,
            armor: None,
            power_type: None,
            cost: 0,
            damage: DamageData::default(),
            save: None,
            formula: None,
            weapon_type: None,
            finesse: false,
            ability: None,
            uses: None,
            recharge: None,
        }
    }

    /// A superpower of the given flavour and base cost.
    pub fn superpower(name: impl Into<String>, power_type: PowerType, cost: u32) -> Self {
        Self {
            power_type: Some(power_type),
            cost,
            ..Self::new(name, ItemKind::Superpower)
        }
    }

    pub fn with_weight(mut self, quantity: f64, weight: f64) -> Self {
        self.quantity = quantity;
        self.weight = weight;
        self
    }

    pub fn equipped(mut self) -> Self {
        self.equipped = true;
        self
    }

    pub fn with_soak(mut self, soak: i32) -> Self {
        self.armor = Some(ArmorData { soak });
        self
    }

    pub fn with_uses(mut self, uses: ItemUses) -> Self {
        self.uses = Some(uses);
        self
    }

    /// A recharge ability, starting out charged.
    pub fn with_recharge(mut self, value: u32) -> Self {
        self.recharge = Some(ItemRecharge {
            value,
            charged: true,
        });
        self
    }

    pub fn with_damage(mut self, part: impl Into<String>) -> Self {
        self.damage.parts.push(part.into());
        self
    }

    /// Carried weight of the stack, rounded to a tenth.
    pub fn total_weight(&self) -> f64 {
        let weight = self.quantity.max(0.0) * self.weight.max(0.0);
        (weight * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_kinds() {
        assert!(ItemKind::Weapon.is_physical());
        assert!(ItemKind::Backpack.is_physical());
        assert!(!ItemKind::Superpower.is_physical());
        assert!(!ItemKind::Feature.is_physical());
        assert!(!ItemKind::Other("vehicle".into()).is_physical());
    }

    #[test]
    fn test_item_kind_parsing() {
        let kind: ItemKind = serde_json::from_str("\"feat\"").unwrap();
        assert_eq!(kind, ItemKind::Feature);

        let kind: ItemKind = serde_json::from_str("\"spellbook\"").unwrap();
        assert_eq!(kind, ItemKind::Other("spellbook".into()));
        assert_eq!(kind.to_string(), "spellbook");
    }

    #[test]
    fn test_total_weight_rounds_to_tenth() {
        let arrows = ItemRecord::new("Arrows", ItemKind::Consumable).with_weight(20.0, 0.05);
        assert_eq!(arrows.total_weight(), 1.0);

        let gems = ItemRecord::new("Gems", ItemKind::Loot).with_weight(3.0, 0.333);
        assert_eq!(gems.total_weight(), 1.0);
    }

    #[test]
    fn test_negative_weight_from_json_is_zero() {
        let json = r#"{"name": "Cursed Stone", "type": "loot", "quantity": 2, "weight": -5}"#;
        let item: ItemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(item.weight, 0.0);
        assert_eq!(item.total_weight(), 0.0);
    }

    #[test]
    fn test_limited_uses_json() {
        let json = r#"{"name": "Wand", "type": "equipment",
                       "uses": {"value": "2", "max": 7, "per": "day"},
                       "recharge": {"value": 5}}"#;
        let wand: ItemRecord = serde_json::from_str(json).unwrap();
        let uses = wand.uses.unwrap();
        assert_eq!(uses.per, Some(RecoveryPeriod::Day));
        assert_eq!((uses.value, uses.max), (2, 7));
        assert!(uses.is_limited());
        assert_eq!(wand.recharge.unwrap().value, 5);
        assert!(!wand.recharge.unwrap().charged);

        let unlimited: ItemUses =
            serde_json::from_str(r#"{"value": 0, "max": 0, "per": ""}"#).unwrap();
        assert!(!unlimited.is_limited());
        assert!(!ItemUses::default().is_limited());
    }

    #[test]
    fn test_superpower_json() {
        let item: ItemRecord = serde_json::from_str(
            r#"{"name": "Fire Bolt", "type": "superpower", "powerType": "spell", "cost": 1,
                "damage": {"parts": ["1d10"]}, "save": {"ability": "dex", "scaling": "spell_dc"}}"#,
        )
        .unwrap();
        assert_eq!(item.power_type, Some(PowerType::Spell));
        assert_eq!(item.cost, 1);
        assert_eq!(item.save.unwrap().scaling, SaveScaling::SpellDc);
    }
}
