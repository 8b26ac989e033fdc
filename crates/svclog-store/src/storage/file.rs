//! One file per key under a root directory
//!
//! File names are the hex encoding of the key, so keys such as
//! `persist:root` need no escaping on any filesystem.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::atomic::atomic_write;
use super::KvStorage;
use crate::errors::{io_error, Result};

#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", hex::encode(key)))
    }
}

impl KvStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("storage_get", e).with_entity_id(key)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(&self.path_for(key), value.as_bytes()).map_err(|e| e.with_entity_id(key))
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error("storage_remove", e).with_entity_id(key)),
        }
    }
}
