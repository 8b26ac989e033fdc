//! svclog store - persistence for the service log state
//!
//! Provides:
//! - A synchronous key-value storage substrate (`KvStorage`) with memory and
//!   file-backed implementations
//! - JSON hydration and persistence of the `{ logs, drafts }` snapshot
//! - `AppStore`, a `Dispatcher` that writes every new snapshot through

pub mod app_store;
pub mod errors;
pub mod repo;
pub mod storage;

pub use app_store::AppStore;
pub use errors::Result;
pub use storage::{FileStorage, KvStorage, MemoryStorage};
