//! Persistent state container
//!
//! `AppStore` owns the current snapshot and a storage substrate. Every
//! dispatched action runs through the core reducer; on success the snapshot
//! is swapped and then written through to storage.
//!
//! ## Degraded mode
//!
//! A failed write never fails the dispatch. The new snapshot stays current in
//! memory, the failure is logged and kept in `last_persist_error()`, and the
//! next successful write brings storage back in line.
//!
//! ## Logging Ownership
//!
//! `open`/`reload` own the `hydrate` lifecycle events and every write owns a
//! `persist` start/end pair. The reducer below only logs at debug.

use svclog_core::errors::ExError;
use svclog_core::{apply, Action, Dispatcher, Settings, Store};
use svclog_core::{log_op_end, log_op_error, log_op_start};

use crate::errors::Result;
use crate::repo::{load_state, save_state};
use crate::storage::KvStorage;

pub struct AppStore<S: KvStorage> {
    storage: S,
    key: String,
    state: Store,
    last_persist_error: Option<ExError>,
}

impl<S: KvStorage> AppStore<S> {
    /// Hydrate from `storage` under the configured key
    ///
    /// Missing or corrupt data yields an empty snapshot.
    pub fn open(storage: S, settings: &Settings) -> Self {
        let mut app = Self {
            storage,
            key: settings.storage_key.clone(),
            state: Store::new(),
            last_persist_error: None,
        };
        app.reload();
        app
    }

    /// Replace the in-memory snapshot with what storage currently holds
    pub fn reload(&mut self) {
        log_op_start!("hydrate", storage_key = %self.key);
        let start = std::time::Instant::now();

        self.state = load_state(&self.storage, &self.key);

        log_op_end!(
            "hydrate",
            duration_ms = start.elapsed().as_millis() as u64,
            logs_len = self.state.logs().len(),
            drafts_len = self.state.drafts().len()
        );
    }

    /// Write the current snapshot now
    ///
    /// # Errors
    /// The substrate or encoding failure; the in-memory snapshot is unaffected.
    pub fn flush(&mut self) -> Result<()> {
        log_op_start!("persist", storage_key = %self.key);
        let start = std::time::Instant::now();

        match save_state(&mut self.storage, &self.key, &self.state) {
            Ok(()) => {
                self.last_persist_error = None;
                log_op_end!(
                    "persist",
                    duration_ms = start.elapsed().as_millis() as u64,
                    logs_len = self.state.logs().len(),
                    drafts_len = self.state.drafts().len()
                );
                Ok(())
            }
            Err(e) => {
                log_op_error!(
                    "persist",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    storage_key = %self.key
                );
                self.last_persist_error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// The failure from the most recent write, if it failed
    pub fn last_persist_error(&self) -> Option<&ExError> {
        self.last_persist_error.as_ref()
    }

    /// True while storage lags behind the in-memory snapshot
    pub fn is_degraded(&self) -> bool {
        self.last_persist_error.is_some()
    }
}

impl<S: KvStorage> Dispatcher for AppStore<S> {
    fn dispatch(&mut self, action: Action) -> svclog_core::Result<()> {
        let name = action.name();
        tracing::debug!(action = name, "app_store: dispatch");

        self.state = apply(self.state.clone(), action)?;

        if self.flush().is_err() {
            tracing::warn!(
                action = name,
                storage_key = %self.key,
                "app_store: write failed, keeping in-memory state"
            );
        }
        Ok(())
    }

    fn state(&self) -> &Store {
        &self.state
    }
}
