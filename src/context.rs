//! Invocation context
//!
//! Operations receive an explicit [`Context`] instead of reaching for
//! process-wide state: the storage root is injected (tests point it at a
//! temp directory) and the installed-application list is a pure query over
//! the store.

use std::path::PathBuf;

use crate::error::Result;
use crate::storage::record::{self, Status};
use crate::storage::paths;
use crate::ui;

/// One installed application, as derived from its persisted record
#[derive(Debug, Clone)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub version: String,
    pub status: Status,
    /// Install time of the first sub-deployment, epoch seconds
    pub started: f64,
    /// Source template of the first sub-deployment
    pub source: String,
}

/// Explicit state shared by all operations of one invocation
pub struct Context {
    pub storage_root: PathBuf,
    pub verbose: bool,
}

impl Context {
    pub fn new(storage_root: PathBuf, verbose: bool) -> Self {
        Self {
            storage_root,
            verbose,
        }
    }

    /// Query all persisted applications, sorted by id
    ///
    /// A subdirectory without a readable record is reported and skipped, not
    /// fatal: one corrupt application must not hide the others.
    pub fn applications(&self) -> Result<Vec<Application>> {
        let mut applications = Vec::new();
        if !self.storage_root.exists() {
            return Ok(applications);
        }

        let entries = std::fs::read_dir(&self.storage_root)
            .map_err(|e| crate::error::file_read_failed(&self.storage_root, e.to_string()))?;
        let mut ids: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        ids.sort();

        for id in ids {
            if !record::exists(&self.storage_root, &id) {
                ui::warn(&format!(
                    "Path {} does not have a {}.",
                    paths::application_path(&self.storage_root, &id).display(),
                    paths::RECORD_FILE
                ));
                continue;
            }
            match record::load(&self.storage_root, &id) {
                Ok(state) => {
                    let first = state.apps.first();
                    applications.push(Application {
                        id: state.application_id.clone(),
                        name: first.map_or_else(|| "-".to_string(), |a| a.name.clone()),
                        version: first.map_or_else(|| "-".to_string(), |a| a.version.clone()),
                        status: state.status,
                        started: first.map_or(0.0, |a| a.timestamp),
                        source: first.map_or_else(String::new, |a| a.source_path.clone()),
                    });
                }
                Err(e) => ui::warn(&format!("{e}, skipping.")),
            }
        }

        Ok(applications)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::record::SubDeploymentRecord;
    use tempfile::TempDir;

    fn sub(name: &str) -> SubDeploymentRecord {
        SubDeploymentRecord {
            guid: "g0".to_string(),
            name: name.to_string(),
            version: "1.0.0".to_string(),
            timestamp: 1_700_000_000.0,
            source_path: "/src/template.yaml".to_string(),
            artifact_path: "/storage/x/g0".to_string(),
            always_pull: false,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_applications_empty_store() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let ctx = Context::new(temp.path().to_path_buf(), false);
        assert!(ctx.applications().unwrap().is_empty());
    }

    #[test]
    fn test_applications_returns_sorted_ids() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        record::append(temp.path(), "zebra-app", sub("z")).unwrap();
        record::append(temp.path(), "alpha-app", sub("a")).unwrap();

        let ctx = Context::new(temp.path().to_path_buf(), false);
        let ids: Vec<String> = ctx.applications().unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["alpha-app", "zebra-app"]);
    }

    #[test]
    fn test_applications_query_is_idempotent() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        record::append(temp.path(), "demo-app", sub("demo")).unwrap();

        let ctx = Context::new(temp.path().to_path_buf(), false);
        let first: Vec<String> = ctx.applications().unwrap().into_iter().map(|a| a.id).collect();
        let second: Vec<String> = ctx.applications().unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_applications_skips_directory_without_record() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir_all(temp.path().join("stray")).unwrap();
        record::append(temp.path(), "demo-app", sub("demo")).unwrap();

        let ctx = Context::new(temp.path().to_path_buf(), false);
        let apps = ctx.applications().unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].name, "demo");
    }
}
