//! svclog core - in-memory state kernel for vehicle service logs
//!
//! This crate holds everything that does not touch storage:
//! - Service log and draft models with field-level validation
//! - A pure reducer (`apply`) over an immutable `Store` snapshot
//! - Debounced draft autosave driven by an injected `Clock`
//! - Form and table controllers for entry, search, edit and delete
//! - Settings, the error facility and structured logging
//!
//! Persistence lives in `svclog-store`, which wraps a `Store` behind the
//! same `Dispatcher` seam used here.

pub mod apply;
pub mod autosave;
pub mod commands;
pub mod config;
pub mod errors;
pub mod form;
pub mod logging_facility;
pub mod model;
pub mod notice;
pub mod ops;
pub mod rules;
pub mod table;
pub mod timer;

// Macros expand to `$crate::svclog_core_types::...`
pub use svclog_core_types;

pub use apply::apply;
pub use autosave::{AutosaveController, AutosaveWrite, SaveStatus};
pub use commands::Action;
pub use config::Settings;
pub use errors::{ExError, ExErrorKind, Result, SvcLogError};
pub use form::{FormController, FormPhase, SubmitOutcome};
pub use model::{Draft, Field, FieldEdit, LogFields, ServiceLog, ServiceType};
pub use notice::Notice;
pub use ops::{Dispatcher, Store};
pub use rules::{validate, ValidationErrors};
pub use svclog_core_types::{DraftId, LogId};
pub use table::{
    DateRangeField, EditOutcome, EditSession, LogQuery, SortDirection, SortKey, SortSpec,
    TableController, TypeFilter,
};
pub use timer::{Clock, DebounceTimer, ManualClock, SystemClock};
