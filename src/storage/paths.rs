//! Storage path constants and resolution

use std::path::{Path, PathBuf};

use crate::error::{ComposerError, Result};

/// Storage directory name under the user's home directory
pub const STORAGE_DIR: &str = ".composer";

/// State record file name inside each application directory
pub const RECORD_FILE: &str = "config.json";

/// Rendered compose file name inside each staged artifact directory
pub const COMPOSE_FILE: &str = "docker-compose.yaml";

/// Optional ignore-list file read from the install root
pub const IGNORE_FILE: &str = ".composerignore";

/// Environment variable overriding the storage root
pub const STORAGE_ENV: &str = "COMPOSER_STORAGE_DIR";

/// Resolve the storage root
///
/// `COMPOSER_STORAGE_DIR` wins when set; otherwise a well-known directory
/// under the invoking user's home profile.
pub fn storage_root() -> Result<PathBuf> {
    if let Ok(root) = std::env::var(STORAGE_ENV) {
        return Ok(PathBuf::from(root));
    }
    let home = dirs::home_dir().ok_or_else(|| ComposerError::IoError {
        message: "Could not determine home directory".to_string(),
    })?;
    Ok(home.join(STORAGE_DIR))
}

/// Durable directory of one application
pub fn application_path(storage_root: &Path, application_id: &str) -> PathBuf {
    storage_root.join(application_id)
}

/// State record path of one application
pub fn record_path(storage_root: &Path, application_id: &str) -> PathBuf {
    application_path(storage_root, application_id).join(RECORD_FILE)
}
