//! Lifecycle operations
//!
//! The semantic layer behind the CLI: each module drives one operation over
//! the shared building blocks (discovery, values, template, storage, engine).
//! Install walks sub-deployments forward, teardown walks them in reverse,
//! and the read-only operations iterate the persisted record in install
//! order.

pub mod cmd;
pub mod install;
pub mod list;
pub mod logs;
pub mod subapps;
pub mod template;
pub mod uninstall;

use std::time::{SystemTime, UNIX_EPOCH};

/// Fractional seconds since the epoch
pub(crate) fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
