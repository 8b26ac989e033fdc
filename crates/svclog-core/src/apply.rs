//! Functional-boundary reducer
//!
//! `apply()` is the only entry point for state mutations. It takes ownership
//! of a snapshot, applies one action and returns the next snapshot.
//!
//! ## Contract
//!
//! - **All-or-nothing**: either the action succeeds and a new snapshot is
//!   returned, or it fails and the caller's previous snapshot is untouched
//! - **No panics**: invalid input returns typed errors
//! - **Lenient on missing targets**: updating or removing an id that is not
//!   present is a logged no-op, not an error
//!
//! ## Example
//!
//! ```
//! use svclog_core::{apply, Action, Store};
//!
//! let state = Store::new();
//! let next = apply(state, Action::ClearDrafts).unwrap();
//! assert!(next.drafts().is_empty());
//! ```

use crate::commands::Action;
use crate::errors::Result;
use crate::ops::{draft_ops, log_ops, Store};

/// Apply an action to a snapshot, returning the next snapshot
///
/// # Errors
///
/// * `LogAlreadyExists` - `AddLog` with an id already in the log store
pub fn apply(mut state: Store, action: Action) -> Result<Store> {
    match action {
        Action::AddLog(log) => {
            log_ops::add_log(&mut state, log)?;
        }
        Action::UpdateLog(log) => {
            log_ops::update_log(&mut state, log);
        }
        Action::RemoveLog { id } => {
            log_ops::remove_log(&mut state, &id);
        }
        Action::UpsertDraft(draft) => {
            draft_ops::upsert_draft(&mut state, draft);
        }
        Action::RemoveDraft { draft_id } => {
            draft_ops::remove_draft(&mut state, &draft_id);
        }
        Action::ClearDrafts => {
            draft_ops::clear_drafts(&mut state);
        }
    }
    Ok(state)
}
