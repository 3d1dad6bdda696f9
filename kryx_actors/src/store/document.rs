//! A stored actor: the raw record plus the overlay derived from it.

use kryx_rules::{ActorRecord, DerivedOverlay, RulesTable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for stored actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Create a new random actor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, e.g. one the host already assigned.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The overlay is never persisted; it is rebuilt from the record.
#[derive(Debug, Clone, Serialize)]
pub struct ActorDocument {
    id: ActorId,
    record: ActorRecord,
    #[serde(skip)]
    overlay: DerivedOverlay,
}

impl ActorDocument {
    pub(crate) fn new(id: ActorId, record: ActorRecord, rules: &RulesTable) -> Self {
        let overlay = record.prepare(rules);
        Self {
            id,
            record,
            overlay,
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// The raw record as the host stores it.
    pub fn record(&self) -> &ActorRecord {
        &self.record
    }

    /// The overlay derived from the current record.
    pub fn overlay(&self) -> &DerivedOverlay {
        &self.overlay
    }

    /// Replace the record and rebuild the overlay from it.
    pub(crate) fn replace(&mut self, record: ActorRecord, rules: &RulesTable) {
        self.overlay = record.prepare(rules);
        self.record = record;
    }
}
