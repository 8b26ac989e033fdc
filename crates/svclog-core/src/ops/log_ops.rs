use svclog_core_types::LogId;

use super::store::Store;
use crate::errors::{Result, SvcLogError};
use crate::model::ServiceLog;

/// Append a committed log
///
/// # Errors
/// * `LogAlreadyExists` - If a log with the same id is already stored
pub fn add_log(store: &mut Store, log: ServiceLog) -> Result<()> {
    if store.log_position(&log.id).is_some() {
        return Err(SvcLogError::LogAlreadyExists {
            log_id: log.id.to_string(),
        });
    }
    store.logs.push_back(log);
    Ok(())
}

/// Replace the log with the same id, keeping its original `created_at`
///
/// Returns false (and changes nothing) if no such log exists.
pub fn update_log(store: &mut Store, mut log: ServiceLog) -> bool {
    let Some(index) = store.log_position(&log.id) else {
        tracing::debug!(log_id = %log.id, "update_log: no matching log, ignoring");
        return false;
    };
    log.created_at = store.logs[index].created_at;
    store.logs.set(index, log);
    true
}

/// Remove the log with this id; returns false if it was absent
pub fn remove_log(store: &mut Store, id: &LogId) -> bool {
    match store.log_position(id) {
        Some(index) => {
            store.logs.remove(index);
            true
        }
        None => {
            tracing::debug!(log_id = %id, "remove_log: no matching log, ignoring");
            false
        }
    }
}
