//! Sub-application listing

use crate::context::Context;
use crate::error::{ComposerError, Result};
use crate::storage::record;
use crate::ui;

/// List the sub-applications of each given application, in install order
pub fn run(ctx: &Context, ids: &[String]) -> Result<()> {
    if ids.is_empty() {
        return Err(ComposerError::MissingApplicationId {
            action: "subapps".to_string(),
        });
    }

    for id in ids {
        let state = record::load(&ctx.storage_root, id)?;
        ui::info(&format!("Sub-applications for {id}"));
        for sub in &state.apps {
            ui::info(&format!("  {}", sub.name));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::record::SubDeploymentRecord;
    use tempfile::TempDir;

    #[test]
    fn test_subapps_unknown_application_is_fatal() {
        let storage = TempDir::new().expect("Failed to create temp directory");
        let ctx = Context::new(storage.path().to_path_buf(), false);

        let result = run(&ctx, &["ghost".to_string()]);
        assert!(matches!(
            result.unwrap_err(),
            ComposerError::ApplicationNotFound { .. }
        ));
    }

    #[test]
    fn test_subapps_without_id_is_usage_error() {
        let storage = TempDir::new().expect("Failed to create temp directory");
        let ctx = Context::new(storage.path().to_path_buf(), false);

        let result = run(&ctx, &[]);
        assert!(matches!(
            result.unwrap_err(),
            ComposerError::MissingApplicationId { .. }
        ));
    }

    #[test]
    fn test_subapps_succeeds_for_installed_application() {
        let storage = TempDir::new().expect("Failed to create temp directory");
        record::append(
            storage.path(),
            "demo-app",
            SubDeploymentRecord {
                guid: "g0".to_string(),
                name: "web".to_string(),
                version: "1.0.0".to_string(),
                timestamp: 0.0,
                source_path: String::new(),
                artifact_path: String::new(),
                always_pull: false,
                extra: serde_json::Map::new(),
            },
        )
        .expect("Failed to append record");

        let ctx = Context::new(storage.path().to_path_buf(), false);
        assert!(run(&ctx, &["demo-app".to_string()]).is_ok());
    }
}
