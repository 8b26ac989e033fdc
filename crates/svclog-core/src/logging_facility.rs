//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Lifecycle macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use svclog_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! # Ownership
//!
//! The outermost operation (form submit, table save/delete, store hydrate and
//! persist) emits the start/end pair. Reducers and helpers below it only use
//! `tracing::debug!`, so one operation never logs two `start` events.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
