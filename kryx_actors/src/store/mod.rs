//! In-memory actor store.
//!
//! The store owns one [`RulesTable`] and every actor document. Records are only
//! changed through [`ActorStore::update`] and [`ActorStore::try_update`], which
//! rebuild the overlay after each change.

mod document;

pub use document::*;

use kryx_rules::{ActorRecord, DerivedOverlay, RulesTable};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::error::{ActorError, ActorResult};

/// Actor documents plus the rules used to derive their overlays.
#[derive(Debug, Clone, Default)]
pub struct ActorStore {
    rules: RulesTable,
    documents: HashMap<ActorId, ActorDocument>,
}

impl ActorStore {
    /// Create an empty store using the given rules.
    pub fn new(rules: RulesTable) -> Self {
        Self {
            rules,
            documents: HashMap::new(),
        }
    }

    /// The rules every overlay in this store is derived with.
    pub fn rules(&self) -> &RulesTable {
        &self.rules
    }

    /// Number of stored actors.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Ids of all stored actors, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.documents.keys().copied()
    }

    /// Store a record and derive its overlay.
    pub fn create(&mut self, record: ActorRecord) -> ActorId {
        let id = ActorId::new();
        info!(actor = %record.name, %id, "created actor");
        self.documents.insert(id, ActorDocument::new(id, record, &self.rules));
        id
    }

    /// Store a record given in the host's JSON format.
    pub fn create_from_json(&mut self, json: &str) -> ActorResult<ActorId> {
        let record = ActorRecord::from_json(json)?;
        Ok(self.create(record))
    }

    /// Get a stored document by ID.
    pub fn get(&self, id: ActorId) -> Option<&ActorDocument> {
        self.documents.get(&id)
    }

    /// The raw record of a stored actor.
    pub fn record(&self, id: ActorId) -> Option<&ActorRecord> {
        self.get(id).map(ActorDocument::record)
    }

    /// The current overlay of a stored actor.
    pub fn overlay(&self, id: ActorId) -> Option<&DerivedOverlay> {
        self.get(id).map(ActorDocument::overlay)
    }

    pub(crate) fn document(&self, id: ActorId) -> ActorResult<&ActorDocument> {
        self.documents.get(&id).ok_or(ActorError::NotFound(id))
    }

    /// Apply a change to the raw record, then rebuild the overlay.
    pub fn update<T>(
        &mut self,
        id: ActorId,
        f: impl FnOnce(&mut ActorRecord) -> T,
    ) -> ActorResult<T> {
        self.try_update(id, |record| Ok(f(record)))
    }

    /// Like [`ActorStore::update`], but the change may fail. A failed change
    /// leaves the stored record untouched.
    pub fn try_update<T>(
        &mut self,
        id: ActorId,
        f: impl FnOnce(&mut ActorRecord) -> ActorResult<T>,
    ) -> ActorResult<T> {
        let doc = self
            .documents
            .get_mut(&id)
            .ok_or(ActorError::NotFound(id))?;

        let mut record = doc.record().clone();
        let result = f(&mut record)?;
        doc.replace(record, &self.rules);
        debug!(actor = %doc.name(), %id, "record updated");
        Ok(result)
    }

    /// Remove an actor, returning its document if it existed.
    pub fn remove(&mut self, id: ActorId) -> Option<ActorDocument> {
        let doc = self.documents.remove(&id)?;
        info!(actor = %doc.name(), %id, "removed actor");
        Some(doc)
    }
}
