use crate::apply::apply;
use crate::commands::Action;
use crate::errors::Result;

use super::store::Store;

/// A state container that accepts actions and exposes the current snapshot
///
/// Controllers depend on this seam instead of on a concrete container, so the
/// same form and table logic runs against the bare in-memory `Store` in tests
/// and against a persistent container in an application.
pub trait Dispatcher {
    /// Apply one action, replacing the current snapshot on success
    ///
    /// # Errors
    /// Whatever `apply()` rejects; on error the snapshot is unchanged.
    fn dispatch(&mut self, action: Action) -> Result<()>;

    /// Current snapshot
    fn state(&self) -> &Store;
}

impl Dispatcher for Store {
    fn dispatch(&mut self, action: Action) -> Result<()> {
        let next = apply(self.clone(), action)?;
        *self = next;
        Ok(())
    }

    fn state(&self) -> &Store {
        self
    }
}
