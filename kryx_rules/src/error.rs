//! Error types for the rules crate.
//!
//! Bad content never produces an error here: the engine degrades and logs
//! instead. These variants cover caller misuse and unreadable configuration.

use thiserror::Error;

use crate::items::ItemKind;

pub type RulesResult<T> = Result<T, RulesError>;

/// Errors raised by the rules crate.
#[derive(Debug, Error)]
pub enum RulesError {
    /// A superpower-only accessor was called on some other kind of item.
    #[error("item '{item}' is a {kind}, not a superpower")]
    NotASuperpower { item: String, kind: ItemKind },

    #[error("item '{item}' has no damage formula")]
    NoDamageFormula { item: String },

    #[error("item '{item}' has no formula to roll")]
    NoFormula { item: String },

    #[error("invalid rules table: {0}")]
    InvalidRules(String),

    #[error("failed to parse rules table: {0}")]
    RulesParse(#[from] toml::de::Error),

    #[error("failed to parse actor record: {0}")]
    RecordParse(#[from] serde_json::Error),
}
