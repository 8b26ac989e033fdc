//! Error helpers for svclog-store
//!
//! Storage failures are reported as core `ExError`s.

use svclog_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Filesystem failure during `operation`
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation)
        .with_message(err.to_string())
}

/// The stored blob under `key` could not be encoded or decoded
pub fn serialization_error(operation: &str, key: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation)
        .with_entity_id(key)
        .with_message(err.to_string())
}

/// The substrate refused a write (quota, read-only medium, ...)
pub fn storage_unavailable(operation: &str, key: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op(operation)
        .with_entity_id(key)
        .with_message(reason.to_string())
}
