//! Uninstall operation
//!
//! Tears sub-deployments down in reverse install order so dependents stop
//! before what they depend on. Teardown is best-effort: a failing `down` is
//! logged and marks the record Error, but never stops the remaining units,
//! and the durable subtree is removed regardless of individual outcomes.

use std::path::Path;

use crate::context::Context;
use crate::engine::DeploymentEngine;
use crate::error::{ComposerError, Result};
use crate::storage::record::{self, Status};
use crate::storage::stage;
use crate::ui;

/// Configuration options for uninstall
pub struct UninstallOptions {
    pub ids: Vec<String>,
    /// Zero grace period on engine teardown
    pub force: bool,
    /// Uninstall every persisted application
    pub all: bool,
    /// Skip the confirmation prompt for `all`
    pub yes: bool,
}

/// Run the uninstall operation
pub fn run(ctx: &Context, engine: &dyn DeploymentEngine, options: &UninstallOptions) -> Result<()> {
    if options.all {
        return delete_all(ctx, engine, options);
    }

    if options.ids.is_empty() {
        return Err(ComposerError::MissingApplicationId {
            action: "delete".to_string(),
        });
    }

    for id in &options.ids {
        delete_application(ctx, engine, id, options.force)?;
    }
    Ok(())
}

fn delete_all(
    ctx: &Context,
    engine: &dyn DeploymentEngine,
    options: &UninstallOptions,
) -> Result<()> {
    let applications = ctx.applications()?;
    if applications.is_empty() {
        ui::info("No applications installed.");
        return Ok(());
    }

    if !options.yes {
        let prompt = format!(
            "Delete all {} installed applications?",
            applications.len()
        );
        let confirmed = inquire::Confirm::new(&prompt).with_default(false).prompt()?;
        if !confirmed {
            return Ok(());
        }
    }

    for application in applications {
        delete_application(ctx, engine, &application.id, options.force)?;
    }
    Ok(())
}

fn delete_application(
    ctx: &Context,
    engine: &dyn DeploymentEngine,
    application_id: &str,
    force: bool,
) -> Result<()> {
    let state = record::load(&ctx.storage_root, application_id)?;
    ui::info(&format!("Uninstalling {application_id}"));

    // Reverse only in memory; the persisted order stays the install order
    for sub in state.apps.iter().rev() {
        if let Err(e) = engine.down(Path::new(&sub.artifact_path), force) {
            ui::warn(&e.to_string());
            ui::warn(&format!(
                "Teardown has failed for {} in application {application_id}",
                sub.name
            ));
            ui::warn("Still removing the application, but some containers might persist");
            let _ = record::update_status(&ctx.storage_root, application_id, Status::Error);
        }
    }

    stage::remove_application(&ctx.storage_root, application_id)?;
    ui::info(&format!("Application '{application_id}' uninstalled."));
    Ok(())
}
