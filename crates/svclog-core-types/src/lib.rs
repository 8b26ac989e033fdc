//! Core types shared across the service log crates
//!
//! - **Identifiers**: `LogId` for committed logs, `DraftId` for in-progress drafts
//! - **Schema constants**: canonical field keys and event names for structured logging

pub mod ids;
pub mod schema;

pub use ids::{DraftId, LogId};
