//! Key-value storage substrate
//!
//! String keys to string values, synchronous and fallible. The state blob is
//! the only thing stored, under a single key.

mod atomic;
mod file;
mod memory;

pub use atomic::atomic_write;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::errors::Result;

pub trait KvStorage {
    /// Value under `key`, or `None` if nothing is stored
    ///
    /// # Errors
    /// Substrate read failure.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Substrate write failure; the previous value is left intact.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; returns false if it was not present
    ///
    /// # Errors
    /// Substrate delete failure.
    fn remove(&mut self, key: &str) -> Result<bool>;
}

impl<T: KvStorage + ?Sized> KvStorage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}
