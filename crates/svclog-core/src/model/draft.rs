use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use svclog_core_types::DraftId;

use super::fields::LogFields;

/// An in-progress, auto-persisted service log that has not been committed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub draft_id: DraftId,
    #[serde(flatten)]
    pub fields: LogFields,
    /// When the autosave last wrote this draft to the draft store
    #[serde(default)]
    pub last_saved: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_saved: bool,
}

impl Draft {
    pub fn new(draft_id: DraftId, fields: LogFields) -> Self {
        Self {
            draft_id,
            fields,
            last_saved: None,
            is_saved: false,
        }
    }

    /// A fresh draft with a new id and the default form values for `today`
    pub fn fresh(today: NaiveDate) -> Self {
        Self::new(DraftId::new(), LogFields::starting_on(today))
    }

    pub fn is_blank(&self) -> bool {
        self.fields.is_blank()
    }
}
