//! Logs operation
//!
//! Streams engine logs for each sub-deployment in install order, optionally
//! narrowed to one sub-application by descriptor name and one service inside
//! it. Engine failures are warnings here: logs are a read path.

use std::path::Path;

use crate::context::Context;
use crate::engine::DeploymentEngine;
use crate::error::{ComposerError, Result};
use crate::storage::record;
use crate::ui;

/// Configuration options for logs
pub struct LogsOptions {
    pub ids: Vec<String>,
    /// Keep the stream open until interrupted
    pub follow: bool,
    /// Only this service inside each compose unit
    pub service: Option<String>,
    /// Only sub-deployments with this descriptor name
    pub application: Option<String>,
}

/// Run the logs operation
pub fn run(ctx: &Context, engine: &dyn DeploymentEngine, options: &LogsOptions) -> Result<()> {
    if options.ids.is_empty() {
        return Err(ComposerError::MissingApplicationId {
            action: "logs".to_string(),
        });
    }

    for id in &options.ids {
        let state = record::load(&ctx.storage_root, id)?;
        for sub in &state.apps {
            if let Some(filter) = &options.application {
                if &sub.name != filter {
                    continue;
                }
            }
            if let Err(e) = engine.logs(
                Path::new(&sub.artifact_path),
                options.follow,
                options.service.as_deref(),
            ) {
                ui::warn(&e.to_string());
            }
        }
    }
    Ok(())
}
