//! Debounced draft autosave
//!
//! Turns frequent field edits into infrequent draft-store upserts. Each change
//! restarts the quiet period; the draft is written only once the form has been
//! left alone for the full window. Clearing a form whose draft is already
//! stored schedules a removal the same way.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use svclog_core_types::DraftId;

use crate::commands::Action;
use crate::errors::Result;
use crate::model::Draft;
use crate::ops::Dispatcher;
use crate::timer::DebounceTimer;

/// Autosave state shown next to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    /// Nothing worth saving has been entered
    #[default]
    Idle,
    /// A change is waiting for the quiet period to elapse
    Saving,
    /// The latest change has been written to the draft store
    Saved,
}

/// A draft-store write performed by [`AutosaveController::poll`]
#[derive(Debug, Clone, PartialEq)]
pub enum AutosaveWrite {
    /// The draft was upserted, stamped with `last_saved` and `is_saved`
    Saved(Draft),
    /// The stored copy of a cleared draft was removed
    Removed(DraftId),
}

#[derive(Debug)]
enum PendingWrite {
    Upsert(Draft),
    Remove(DraftId),
}

impl PendingWrite {
    fn draft_id(&self) -> &DraftId {
        match self {
            PendingWrite::Upsert(draft) => &draft.draft_id,
            PendingWrite::Remove(draft_id) => draft_id,
        }
    }
}

#[derive(Debug)]
pub struct AutosaveController {
    window: Duration,
    timer: DebounceTimer<PendingWrite>,
    status: SaveStatus,
}

impl AutosaveController {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            timer: DebounceTimer::new(),
            status: SaveStatus::Idle,
        }
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// When the pending save will fire, if one is scheduled
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.timer.deadline()
    }

    /// Record that the form content changed
    ///
    /// A blank draft that was never stored cancels any pending save and goes
    /// back to `Idle`, so empty drafts never reach storage. A blank draft
    /// with a stored copy (`last_saved` set) schedules removal of that copy
    /// instead, so a later resume does not bring back the cleared text.
    pub fn notify_change(&mut self, draft: &Draft, now: DateTime<Utc>) {
        if draft.is_blank() {
            if draft.last_saved.is_none() {
                if self.timer.cancel().is_some() {
                    tracing::debug!(draft_id = %draft.draft_id, "autosave: draft blank, pending save dropped");
                }
                self.status = SaveStatus::Idle;
                return;
            }

            let write = PendingWrite::Remove(draft.draft_id.clone());
            self.timer.schedule(write, now + self.window);
            tracing::trace!(draft_id = %draft.draft_id, "autosave: removal scheduled");
            self.status = SaveStatus::Saving;
            return;
        }

        let rescheduled = self
            .timer
            .schedule(PendingWrite::Upsert(draft.clone()), now + self.window);
        tracing::trace!(draft_id = %draft.draft_id, rescheduled, "autosave: save scheduled");
        self.status = SaveStatus::Saving;
    }

    /// Fire the pending write if its quiet period has elapsed
    ///
    /// An upserted draft is stamped with `last_saved = now` and
    /// `is_saved = true`; a removal leaves the status at `Idle`.
    ///
    /// # Errors
    /// Propagates a dispatch failure; the write is dropped and the next edit
    /// schedules a fresh one.
    pub fn poll<D: Dispatcher + ?Sized>(
        &mut self,
        now: DateTime<Utc>,
        dispatcher: &mut D,
    ) -> Result<Option<AutosaveWrite>> {
        let Some(write) = self.timer.take_due(now) else {
            return Ok(None);
        };

        match write {
            PendingWrite::Upsert(mut draft) => {
                draft.last_saved = Some(now);
                draft.is_saved = true;
                dispatcher.dispatch(Action::UpsertDraft(draft.clone()))?;
                self.status = SaveStatus::Saved;
                tracing::debug!(draft_id = %draft.draft_id, "autosave: draft persisted");
                Ok(Some(AutosaveWrite::Saved(draft)))
            }
            PendingWrite::Remove(draft_id) => {
                dispatcher.dispatch(Action::RemoveDraft {
                    draft_id: draft_id.clone(),
                })?;
                self.status = SaveStatus::Idle;
                tracing::debug!(draft_id = %draft_id, "autosave: cleared draft removed");
                Ok(Some(AutosaveWrite::Removed(draft_id)))
            }
        }
    }

    /// Cancel any pending save; returns true if one was pending
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.timer.cancel().is_some();
        if cancelled {
            self.status = SaveStatus::Idle;
        }
        cancelled
    }

    /// Forget all state, as after a commit
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.status = SaveStatus::Idle;
    }
}

impl Drop for AutosaveController {
    fn drop(&mut self) {
        if let Some(write) = self.timer.cancel() {
            tracing::debug!(draft_id = %write.draft_id(), "autosave: torn down with a pending save");
        }
    }
}
