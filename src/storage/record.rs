//! Persisted state records
//!
//! One `config.json` per application holds its status and the ordered list
//! of installed sub-deployments. The array order is the install order and is
//! never rewritten in a different order; teardown reverses it only in memory.
//! Every mutation re-reads the record, changes it, and rewrites the whole
//! file. No locking guards concurrent invocations against the same
//! application id; re-reading immediately before each append keeps the race
//! window small, nothing more.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths;
use crate::error::{ComposerError, Result};

/// Overall application status
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Error,
}

/// One installed sub-deployment
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubDeploymentRecord {
    pub guid: String,
    pub name: String,
    pub version: String,
    /// Render time, fractional seconds since the epoch
    pub timestamp: f64,
    /// Source template the artifact was rendered from
    pub source_path: String,
    /// Staged artifact directory in durable storage
    pub artifact_path: String,
    #[serde(default, rename = "alwaysPull", skip_serializing_if = "is_false")]
    pub always_pull: bool,
    /// Remaining descriptor fields, preserved round-trip
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn is_false(flag: &bool) -> bool {
    !flag
}

/// The whole persisted record of one application
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StateRecord {
    pub application_id: String,
    pub status: Status,
    pub apps: Vec<SubDeploymentRecord>,
}

/// Whether a state record exists for the application
pub fn exists(storage_root: &Path, application_id: &str) -> bool {
    paths::record_path(storage_root, application_id).exists()
}

/// Load the state record of an application
pub fn load(storage_root: &Path, application_id: &str) -> Result<StateRecord> {
    let path = paths::record_path(storage_root, application_id);
    if !path.exists() {
        return Err(ComposerError::ApplicationNotFound {
            id: application_id.to_string(),
        });
    }
    let content = std::fs::read_to_string(&path)
        .map_err(|e| crate::error::file_read_failed(&path, e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| ComposerError::StateRecordParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn write(storage_root: &Path, record: &StateRecord) -> Result<()> {
    let path = paths::record_path(storage_root, &record.application_id);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| crate::error::file_write_failed(parent, e.to_string()))?;
    }
    let content = serde_json::to_string(record)?;
    std::fs::write(&path, content)
        .map_err(|e| crate::error::file_write_failed(&path, e.to_string()))
}

/// Append one sub-deployment to the application's record
///
/// Creates the record with status Running on the first append; afterwards
/// re-reads and appends without touching existing entries.
pub fn append(
    storage_root: &Path,
    application_id: &str,
    sub_deployment: SubDeploymentRecord,
) -> Result<()> {
    let mut record = if exists(storage_root, application_id) {
        load(storage_root, application_id)?
    } else {
        StateRecord {
            application_id: application_id.to_string(),
            status: Status::Running,
            apps: Vec::new(),
        }
    };
    record.apps.push(sub_deployment);
    write(storage_root, &record)
}

/// Rewrite the status field of an existing record
pub fn update_status(storage_root: &Path, application_id: &str, status: Status) -> Result<()> {
    let path = paths::record_path(storage_root, application_id);
    if !path.exists() {
        return Err(ComposerError::StateRecordMissing {
            path: path.display().to_string(),
        });
    }
    let mut record = load(storage_root, application_id)?;
    record.status = status;
    write(storage_root, &record)
}
