//! Pass-through command operation
//!
//! Forwards an argument vector verbatim to the engine, scoped to each
//! matching sub-deployment's staged artifact in install order. Failures and
//! non-zero exit codes are warnings; the command output itself streams to
//! the terminal.

use std::path::Path;

use crate::context::Context;
use crate::engine::DeploymentEngine;
use crate::error::{ComposerError, Result};
use crate::storage::record;
use crate::ui;

/// Configuration options for cmd
pub struct CmdOptions {
    pub id: String,
    /// Arguments forwarded verbatim to the engine
    pub argv: Vec<String>,
    /// Only sub-deployments with this descriptor name
    pub application: Option<String>,
}

/// Run the pass-through command operation
pub fn run(ctx: &Context, engine: &dyn DeploymentEngine, options: &CmdOptions) -> Result<()> {
    if options.argv.is_empty() {
        return Err(ComposerError::MissingCommandArguments);
    }

    let state = record::load(&ctx.storage_root, &options.id)?;
    for sub in &state.apps {
        if let Some(filter) = &options.application {
            if &sub.name != filter {
                continue;
            }
        }
        match engine.command(Path::new(&sub.artifact_path), &options.argv) {
            Ok(0) => {}
            Ok(code) => ui::warn(&format!(
                "Engine command exited with code {code} for {}",
                sub.name
            )),
            Err(e) => ui::warn(&e.to_string()),
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engine::fake::{EngineCall, FakeEngine};
    use crate::storage::record::SubDeploymentRecord;
    use tempfile::TempDir;

    fn seed(storage: &Path, names: &[&str]) {
        for (i, name) in names.iter().enumerate() {
            record::append(
                storage,
                "demo-app",
                SubDeploymentRecord {
                    guid: format!("guid-{i}"),
                    name: (*name).to_string(),
                    version: "1.0.0".to_string(),
                    timestamp: 0.0,
                    source_path: String::new(),
                    artifact_path: format!("/store/demo-app/guid-{i}"),
                    always_pull: false,
                    extra: serde_json::Map::new(),
                },
            )
            .expect("Failed to append record");
        }
    }

    #[test]
    fn test_cmd_forwards_argv_to_each_unit() {
        let storage = TempDir::new().expect("Failed to create temp directory");
        seed(storage.path(), &["web", "db"]);
        let ctx = Context::new(storage.path().to_path_buf(), false);
        let engine = FakeEngine::new();

        let options = CmdOptions {
            id: "demo-app".to_string(),
            argv: vec!["images".to_string(), "--quiet".to_string()],
            application: None,
        };
        run(&ctx, &engine, &options).unwrap();

        let calls = engine.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(&calls[0], EngineCall::Command(p, argv)
            if p.ends_with("guid-0") && argv == &["images", "--quiet"]));
    }

    #[test]
    fn test_cmd_filter_by_sub_application_name() {
        let storage = TempDir::new().expect("Failed to create temp directory");
        seed(storage.path(), &["web", "db"]);
        let ctx = Context::new(storage.path().to_path_buf(), false);
        let engine = FakeEngine::new();

        let options = CmdOptions {
            id: "demo-app".to_string(),
            argv: vec!["ps".to_string()],
            application: Some("web".to_string()),
        };
        run(&ctx, &engine, &options).unwrap();

        assert_eq!(engine.calls().len(), 1);
    }

    #[test]
    fn test_cmd_without_arguments_is_usage_error() {
        let storage = TempDir::new().expect("Failed to create temp directory");
        seed(storage.path(), &["web"]);
        let ctx = Context::new(storage.path().to_path_buf(), false);
        let engine = FakeEngine::new();

        let options = CmdOptions {
            id: "demo-app".to_string(),
            argv: Vec::new(),
            application: None,
        };
        let result = run(&ctx, &engine, &options);
        assert!(matches!(
            result.unwrap_err(),
            ComposerError::MissingCommandArguments
        ));
    }
}
