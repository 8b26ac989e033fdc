use svclog_core_types::DraftId;

use super::store::Store;
use crate::model::Draft;

/// Insert or replace a draft keyed by `draft_id`
///
/// Returns true when the draft was new. Repeating the same upsert leaves a
/// single identical entry.
pub fn upsert_draft(store: &mut Store, draft: Draft) -> bool {
    match store.draft_position(&draft.draft_id) {
        Some(index) => {
            store.drafts.set(index, draft);
            false
        }
        None => {
            store.drafts.push_back(draft);
            true
        }
    }
}

/// Remove the draft with this id; returns false if it was absent
pub fn remove_draft(store: &mut Store, draft_id: &DraftId) -> bool {
    match store.draft_position(draft_id) {
        Some(index) => {
            store.drafts.remove(index);
            true
        }
        None => false,
    }
}

/// Drop every draft, returning how many were removed
pub fn clear_drafts(store: &mut Store) -> usize {
    let removed = store.drafts.len();
    store.drafts.clear();
    removed
}
