//! Atomic file replacement
//!
//! Writes go to a sibling temp file which is then renamed over the target, so
//! a reader sees either the old content or the new, never a torn write.

use std::fs;
use std::path::Path;

use crate::errors::{io_error, Result};

/// Atomically replace `target_path` with `content`
///
/// # Errors
/// `ERR_IO` if the directory cannot be created or the write or rename fails.
/// A failed write leaves the previous file untouched.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_storage_dir", e))?;
    }

    let temp_path = target_path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| io_error("write_storage_temp", e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        fs::remove_file(&temp_path).ok();
        return Err(io_error("rename_storage_temp", e));
    }
    Ok(())
}
