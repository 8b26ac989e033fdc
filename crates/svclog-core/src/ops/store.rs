use im::Vector;
use serde::{Deserialize, Serialize};
use svclog_core_types::{DraftId, LogId};

use crate::model::{Draft, ServiceLog};

/// Snapshot of all client-side state: committed logs and live drafts
///
/// Both collections are persistent vectors, so cloning a `Store` is cheap and
/// a clone never observes later mutations of the original. Every reducer step
/// therefore yields a new snapshot while earlier ones stay intact.
///
/// Serializes to the persisted layout `{ "logs": [...], "drafts": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub(crate) logs: Vector<ServiceLog>,
    #[serde(default)]
    pub(crate) drafts: Vector<Draft>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            logs: Vector::new(),
            drafts: Vector::new(),
        }
    }

    /// Committed logs in insertion order
    pub fn logs(&self) -> &Vector<ServiceLog> {
        &self.logs
    }

    /// Live drafts in insertion order
    pub fn drafts(&self) -> &Vector<Draft> {
        &self.drafts
    }

    pub fn get_log(&self, id: &LogId) -> Option<&ServiceLog> {
        self.logs.iter().find(|log| &log.id == id)
    }

    pub fn get_draft(&self, draft_id: &DraftId) -> Option<&Draft> {
        self.drafts.iter().find(|d| &d.draft_id == draft_id)
    }

    /// The most recently appended draft, used to resume a form session
    pub fn latest_draft(&self) -> Option<&Draft> {
        self.drafts.last()
    }

    pub(crate) fn log_position(&self, id: &LogId) -> Option<usize> {
        self.logs.iter().position(|log| &log.id == id)
    }

    pub(crate) fn draft_position(&self, draft_id: &DraftId) -> Option<usize> {
        self.drafts.iter().position(|d| &d.draft_id == draft_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store() {
        let store = Store::new();
        assert!(store.logs().is_empty());
        assert!(store.drafts().is_empty());
        assert!(store.latest_draft().is_none());
    }

    #[test]
    fn test_missing_collections_deserialize_empty() {
        let store: Store = serde_json::from_str("{}").unwrap();
        assert_eq!(store, Store::new());
    }

    #[test]
    fn test_serialized_layout_has_two_collections() {
        let json = serde_json::to_value(Store::new()).unwrap();
        assert!(json["logs"].as_array().unwrap().is_empty());
        assert!(json["drafts"].as_array().unwrap().is_empty());
    }
}
