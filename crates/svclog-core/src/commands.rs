//! Named actions accepted by the state container
//!
//! Actions are processed by `apply()`, which takes ownership of the current
//! snapshot and returns the next one.

use serde::{Deserialize, Serialize};
use svclog_core_types::{DraftId, LogId};

use crate::model::{Draft, ServiceLog};

/// Every mutation the log store and draft store support
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    /// Append a committed log (id must be new)
    AddLog(ServiceLog),

    /// Replace all editable fields of the log with the same id
    UpdateLog(ServiceLog),

    /// Delete a committed log
    RemoveLog { id: LogId },

    /// Insert or replace a draft keyed by its draft id
    UpsertDraft(Draft),

    /// Delete a draft
    RemoveDraft {
        #[serde(rename = "draftId")]
        draft_id: DraftId,
    },

    /// Delete every draft
    ClearDrafts,
}

impl Action {
    /// Stable action name, used as the `action` log field
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddLog(_) => "addLog",
            Action::UpdateLog(_) => "updateLog",
            Action::RemoveLog { .. } => "removeLog",
            Action::UpsertDraft(_) => "upsertDraft",
            Action::RemoveDraft { .. } => "removeDraft",
            Action::ClearDrafts => "clearDrafts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_match_serde_tags() {
        let actions = [
            Action::RemoveLog {
                id: LogId::from_string("l1"),
            },
            Action::RemoveDraft {
                draft_id: DraftId::from_string("d1"),
            },
            Action::ClearDrafts,
        ];

        for action in actions {
            let json = serde_json::to_value(&action).unwrap();
            assert_eq!(json["type"], action.name());
        }
    }

    #[test]
    fn test_remove_draft_payload_shape() {
        let action = Action::RemoveDraft {
            draft_id: DraftId::from_string("d1"),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["payload"]["draftId"], "d1");
    }
}
