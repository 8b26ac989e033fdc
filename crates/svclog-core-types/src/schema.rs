//! Canonical schema constants for structured logging and events
//!
//! These constants keep logging and error reporting consistent across crates.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_LOG_ID: &str = "log_id";
pub const FIELD_DRAFT_ID: &str = "draft_id";
pub const FIELD_ACTION: &str = "action";
pub const FIELD_STORAGE_KEY: &str = "storage_key";

// Collection sizes
pub const FIELD_LOGS_LEN: &str = "logs_len";
pub const FIELD_DRAFTS_LEN: &str = "drafts_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_MESSAGE: &str = "err.message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
