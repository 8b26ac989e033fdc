//! Hydration - loads the persisted snapshot from storage into a `Store`

use svclog_core::Store;

use crate::errors::{serialization_error, Result};
use crate::storage::KvStorage;

/// Read and decode the snapshot under `key`
///
/// Returns `Ok(None)` when nothing has been persisted yet.
///
/// # Errors
/// * `ERR_IO` / `ERR_PERSISTENCE` - the substrate could not be read
/// * `ERR_SERIALIZATION` - the blob is not a valid snapshot
pub fn read_state<S: KvStorage + ?Sized>(storage: &S, key: &str) -> Result<Option<Store>> {
    let Some(blob) = storage.get(key)? else {
        return Ok(None);
    };
    let state: Store =
        serde_json::from_str(&blob).map_err(|e| serialization_error("hydrate", key, e))?;
    Ok(Some(state))
}

/// Load the snapshot under `key`, starting empty if there is none
///
/// Unreadable or corrupt data is logged at `warn` and replaced by an empty
/// `Store`; the next successful persist overwrites it.
pub fn load_state<S: KvStorage + ?Sized>(storage: &S, key: &str) -> Store {
    match read_state(storage, key) {
        Ok(Some(state)) => {
            tracing::debug!(
                storage_key = key,
                logs_len = state.logs().len(),
                drafts_len = state.drafts().len(),
                "hydration: snapshot loaded"
            );
            state
        }
        Ok(None) => {
            tracing::debug!(storage_key = key, "hydration: nothing stored, starting empty");
            Store::new()
        }
        Err(e) => {
            tracing::warn!(
                storage_key = key,
                err.code = e.code(),
                error = %e,
                "hydration: stored snapshot unusable, starting empty"
            );
            Store::new()
        }
    }
}
