//! Command wrappers
//!
//! Thin CLI adapters: each module resolves the invocation context (storage
//! root, working directory, engine) and delegates to the matching module in
//! `operations/`.

pub mod cmd;
pub mod completions;
pub mod install;
pub mod list;
pub mod logs;
pub mod subapps;
pub mod template;
pub mod uninstall;
pub mod version;

use std::path::PathBuf;

use crate::context::Context;
use crate::error::Result;
use crate::storage;

/// Build the invocation context from the resolved storage root
pub fn context(verbose: bool) -> Result<Context> {
    Ok(Context::new(storage::paths::storage_root()?, verbose))
}

/// Current working directory as the install root
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| crate::error::ComposerError::IoError {
        message: format!("Failed to get current directory: {e}"),
    })
}
