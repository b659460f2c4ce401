//! Durable state store
//!
//! Everything composer remembers between invocations lives under one storage
//! root in the user's profile: one directory per application id holding the
//! state record and the staged artifact tree of each sub-deployment.
//!
//! - [`paths`]: path constants and resolution
//! - [`record`]: persisted state records
//! - [`stage`]: artifact staging and removal

pub mod paths;
pub mod record;
pub mod stage;

use std::path::Path;

use crate::error::{ComposerError, Result};

/// Create the storage root if missing and verify it is usable
///
/// Fatal when the path is occupied by a file or is not writable; every
/// command depends on the store, so this runs at process start.
pub fn initialize(storage_root: &Path) -> Result<()> {
    if !storage_root.exists() {
        std::fs::create_dir_all(storage_root)
            .map_err(|e| crate::error::file_write_failed(storage_root, e.to_string()))?;
    }
    if !storage_root.is_dir() {
        return Err(ComposerError::StorageRootOccupied {
            path: storage_root.display().to_string(),
        });
    }
    // Probe with a temp file that deletes itself
    if tempfile::tempfile_in(storage_root).is_err() {
        return Err(ComposerError::StorageNotWritable {
            path: storage_root.display().to_string(),
        });
    }
    Ok(())
}
