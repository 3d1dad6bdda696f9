//! Errors raised by the actor store and its workflows.

use kryx_rules::RulesError;
use thiserror::Error;

use crate::store::ActorId;

pub type ActorResult<T> = Result<T, ActorError>;

/// Errors from the actor store and its workflows.
#[derive(Debug, Error)]
pub enum ActorError {
    #[error("no actor with id {0}")]
    NotFound(ActorId),

    /// The workflow only applies to player characters.
    #[error("actor '{name}' is not a player character")]
    NotACharacter { name: String },

    #[error("actor '{name}' has no item at index {index}")]
    ItemNotFound { name: String, index: usize },

    #[error("actor '{name}' has already used their second wind")]
    SecondWindUnavailable { name: String },

    #[error(transparent)]
    Rules(#[from] RulesError),
}
