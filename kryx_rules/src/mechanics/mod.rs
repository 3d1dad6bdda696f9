//! Game mechanics vocabulary: abilities, saves, sizes, progression kinds, resources.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityId {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl AbilityId {
    /// All abilities in sheet order.
    pub const ALL: [AbilityId; 6] = [
        AbilityId::Str,
        AbilityId::Dex,
        AbilityId::Con,
        AbilityId::Int,
        AbilityId::Wis,
        AbilityId::Cha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AbilityId::Str => "str",
            AbilityId::Dex => "dex",
            AbilityId::Con => "con",
            AbilityId::Int => "int",
            AbilityId::Wis => "wis",
            AbilityId::Cha => "cha",
        }
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creature size categories.
///
/// Unrecognised size strings are kept as [`ActorSize::Unknown`] rather than
/// rejected, so a record with a homebrew size still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActorSize {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
    Gargantuan,
    Unknown(String),
}

impl ActorSize {
    pub fn as_str(&self) -> &str {
        match self {
            ActorSize::Tiny => "tiny",
            ActorSize::Small => "small",
            ActorSize::Medium => "medium",
            ActorSize::Large => "large",
            ActorSize::Huge => "huge",
            ActorSize::Gargantuan => "gargantuan",
            ActorSize::Unknown(other) => other,
        }
    }
}

impl From<String> for ActorSize {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tiny" => ActorSize::Tiny,
            "small" => ActorSize::Small,
            "medium" => ActorSize::Medium,
            "large" => ActorSize::Large,
            "huge" => ActorSize::Huge,
            "gargantuan" => ActorSize::Gargantuan,
            _ => ActorSize::Unknown(value),
        }
    }
}

impl From<ActorSize> for String {
    fn from(size: ActorSize) -> Self {
        size.as_str().to_string()
    }
}

/// Which per-level multiplier set governs a class's resource growth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProgressionKind {
    FullCaster,
    GishSpells,
    GishHalfHalf,
    GishManeuvers,
    FullMartial,
    #[default]
    None,
    Other(String),
}

impl ProgressionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ProgressionKind::FullCaster => "fullCaster",
            ProgressionKind::GishSpells => "gishSpells",
            ProgressionKind::GishHalfHalf => "gishHalfHalf",
            ProgressionKind::GishManeuvers => "gishManeuvers",
            ProgressionKind::FullMartial => "fullMartial",
            ProgressionKind::None => "none",
            ProgressionKind::Other(other) => other,
        }
    }
}

impl From<String> for ProgressionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "fullCaster" => ProgressionKind::FullCaster,
            "gishSpells" => ProgressionKind::GishSpells,
            "gishHalfHalf" => ProgressionKind::GishHalfHalf,
            "gishManeuvers" => ProgressionKind::GishManeuvers,
            "fullMartial" => ProgressionKind::FullMartial,
            "none" => ProgressionKind::None,
            _ => ProgressionKind::Other(value),
        }
    }
}

impl From<ProgressionKind> for String {
    fn from(kind: ProgressionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ProgressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The flavour of a superpower item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerType {
    Spell,
    Maneuver,
    Concoction,
}

/// The two main resource pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Mana,
    Stamina,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Mana => f.write_str("mana"),
            ResourceKind::Stamina => f.write_str("stamina"),
        }
    }
}

/// How long an activity takes in combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionCost {
    Action,
    BonusAction,
    FreeAction,
}

/// Format a number with an explicit sign, as shown on character sheets.
pub fn signed_value(number: i32) -> String {
    if number >= 0 {
        format!("+{}", number)
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_value() {
        assert_eq!(signed_value(3), "+3");
        assert_eq!(signed_value(0), "+0");
        assert_eq!(signed_value(-2), "-2");
    }

    #[test]
    fn test_size_parsing_keeps_unknown() {
        let size: ActorSize = serde_json::from_str("\"huge\"").unwrap();
        assert_eq!(size, ActorSize::Huge);

        let size: ActorSize = serde_json::from_str("\"colossal\"").unwrap();
        assert_eq!(size, ActorSize::Unknown("colossal".into()));
        assert_eq!(serde_json::to_string(&size).unwrap(), "\"colossal\"");
    }

    #[test]
    fn test_progression_kind_names() {
        let kind: ProgressionKind = serde_json::from_str("\"gishHalfHalf\"").unwrap();
        assert_eq!(kind, ProgressionKind::GishHalfHalf);
        assert_eq!(kind.as_str(), "gishHalfHalf");

        let kind: ProgressionKind = serde_json::from_str("\"thirdCaster\"").unwrap();
        assert_eq!(kind, ProgressionKind::Other("thirdCaster".into()));
    }

    #[test]
    fn test_ability_order() {
        let names: Vec<_> = AbilityId::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(names, ["str", "dex", "con", "int", "wis", "cha"]);
    }
}
