//! External deployment engine interface
//!
//! The orchestrator only depends on the success/failure signal and exit code
//! of these operations, never on engine internals. The production
//! implementation shells out to docker-compose; tests inject a recording
//! fake.

use std::path::Path;

use crate::error::Result;

pub mod compose;
pub use compose::ComposeEngine;

#[cfg(test)]
pub mod fake;

/// Operations the external deployment engine must expose
pub trait DeploymentEngine {
    /// Start the unit's workloads in the background
    fn up(&self, unit_path: &Path) -> Result<()>;

    /// Stop and remove the unit's workloads; `force` uses a zero grace period
    fn down(&self, unit_path: &Path, force: bool) -> Result<()>;

    /// Stream the unit's logs to the caller's terminal until the engine
    /// process exits (or indefinitely with `follow`)
    fn logs(&self, unit_path: &Path, follow: bool, service: Option<&str>) -> Result<()>;

    /// Pre-pull referenced images, ignoring per-image failures
    fn pull_images(&self, unit_path: &Path) -> Result<()>;

    /// Forward an argument vector verbatim, scoped to the unit; returns the
    /// engine's exit code
    fn command(&self, unit_path: &Path, argv: &[String]) -> Result<i32>;

    /// Whether the engine binary is available at all
    fn is_installed(&self) -> bool;
}
