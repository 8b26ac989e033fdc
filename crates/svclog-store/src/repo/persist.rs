//! Persistence - writes a `Store` snapshot to storage

use svclog_core::Store;

use crate::errors::{serialization_error, Result};
use crate::storage::KvStorage;

/// Encode `state` as `{ "logs": [...], "drafts": [...] }` and store it under `key`
///
/// # Errors
/// * `ERR_SERIALIZATION` - encoding failed
/// * any substrate write error; the previously stored blob stays intact
pub fn save_state<S: KvStorage + ?Sized>(storage: &mut S, key: &str, state: &Store) -> Result<()> {
    let blob = serde_json::to_string(state).map_err(|e| serialization_error("persist", key, e))?;
    storage.set(key, &blob)?;
    tracing::debug!(storage_key = key, bytes = blob.len(), "persist: snapshot written");
    Ok(())
}
