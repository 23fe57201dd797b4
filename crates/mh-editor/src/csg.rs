//! Per-hole boolean subtraction status
//!
//! The subtraction itself runs in an external CSG engine; only its
//! completion arrives back here, through a single handler. A batch
//! snapshots its contributing hole ids at submission time, so holes placed
//! or removed while the engine runs cannot corrupt an in-flight batch:
//! results for ids no longer tracked are ignored rather than cancelled.

use std::collections::HashMap;

use uuid::Uuid;

use mh_core::compound::CompoundSolid;

/// Lifecycle of one hole's contribution to the plate boolean
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsgStatus {
    /// Placed, not yet submitted to the engine
    Pending,
    /// Part of an in-flight subtraction batch
    Computing,
    /// Subtraction resolved successfully
    Ready,
    /// The engine reported a failure; retrying is the caller's decision
    Failed(String),
}

impl CsgStatus {
    /// Whether this hole still needs to go into the next compound
    pub fn is_outstanding(&self) -> bool {
        matches!(self, CsgStatus::Pending | CsgStatus::Computing)
    }
}

/// Snapshot of the hole ids contributing to one engine invocation
#[derive(Debug, Clone)]
pub struct CsgBatch {
    ids: Vec<Uuid>,
}

impl CsgBatch {
    pub fn ids(&self) -> &[Uuid] {
        &self.ids
    }
}

/// Tracks subtraction status per placed hole
#[derive(Debug, Clone, Default)]
pub struct CsgStatusTracker {
    statuses: HashMap<Uuid, CsgStatus>,
}

impl CsgStatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly placed hole
    pub fn insert_pending(&mut self, id: Uuid) {
        self.statuses.insert(id, CsgStatus::Pending);
    }

    /// Drop a hole's status entry (when the hole is removed)
    pub fn remove(&mut self, id: Uuid) -> Option<CsgStatus> {
        self.statuses.remove(&id)
    }

    pub fn status(&self, id: Uuid) -> Option<&CsgStatus> {
        self.statuses.get(&id)
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Snapshot a compound's contributing ids and mark them in flight
    pub fn begin_batch(&mut self, compound: &CompoundSolid) -> CsgBatch {
        let ids = compound.contributing_ids();
        for id in &ids {
            if let Some(status) = self.statuses.get_mut(id) {
                *status = CsgStatus::Computing;
            } else {
                tracing::warn!("batch contains untracked hole {}", id);
            }
        }
        tracing::info!("submitted CSG batch with {} holes", ids.len());
        CsgBatch { ids }
    }

    /// Completion handler for one engine invocation
    ///
    /// The engine reports aggregate success or failure, so every id in the
    /// batch transitions together. Ids removed since submission are skipped.
    pub fn resolve_batch(&mut self, batch: &CsgBatch, result: Result<(), String>) {
        for id in batch.ids() {
            match self.statuses.get_mut(id) {
                Some(status) => {
                    *status = match &result {
                        Ok(()) => CsgStatus::Ready,
                        Err(message) => CsgStatus::Failed(message.clone()),
                    };
                }
                None => {
                    tracing::warn!("ignoring CSG result for removed hole {}", id);
                }
            }
        }
    }
}
