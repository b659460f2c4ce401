//! Install operation
//!
//! Installs every discovered unit in order: resolve values, render the
//! template and configmaps, stage the artifacts, append to the state record,
//! optionally pre-pull images, then hand the unit to the engine. The first
//! failing `up` marks the application Error and aborts; units already
//! started are left running, there is no rollback.

use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::discovery::{self, DiscoveredUnit};
use crate::engine::DeploymentEngine;
use crate::error::Result;
use crate::names::IdGenerator;
use crate::storage::record::{self, Status, SubDeploymentRecord};
use crate::storage::stage;
use crate::template;
use crate::ui;
use crate::values;

/// Configuration options for install
pub struct InstallOptions {
    /// Install root, the directory holding the root descriptor
    pub root: PathBuf,
    /// Template file name looked up in every unit directory
    pub template: String,
    /// Value files, merged left to right
    pub values: Vec<PathBuf>,
    /// Literal `key=value` overrides, applied after the files
    pub set: Vec<String>,
    /// Application id; generated when not supplied
    pub application_id: Option<String>,
}

/// Run the install operation, returning the application id
pub fn run(
    ctx: &Context,
    engine: &dyn DeploymentEngine,
    ids: &dyn IdGenerator,
    options: &InstallOptions,
) -> Result<String> {
    let units = discovery::discover(&options.root, &options.template)?;
    let application_id = options
        .application_id
        .clone()
        .unwrap_or_else(|| ids.application_id());
    let merged = values::consolidate(&options.root, &options.values, &options.set)?;
    if ctx.verbose {
        ui::info(&format!("Values to apply: {merged}"));
    }
    let ignore = stage::read_ignore_patterns(&options.root)?;

    for unit in &units {
        install_unit(
            ctx,
            engine,
            ids,
            &application_id,
            unit,
            &options.template,
            &merged,
            &ignore,
        )?;
    }

    Ok(application_id)
}

#[allow(clippy::too_many_arguments)]
fn install_unit(
    ctx: &Context,
    engine: &dyn DeploymentEngine,
    ids: &dyn IdGenerator,
    application_id: &str,
    unit: &DiscoveredUnit,
    template_name: &str,
    merged: &serde_json::Value,
    ignore: &[String],
) -> Result<()> {
    let name = &unit.descriptor.name;
    ui::info(&format!("Generating template for {name}."));
    let rendered = template::render_unit(&unit.dir, template_name, merged)?;

    let guid = ids.deployment_guid();
    let artifact_path = stage::stage_unit(
        &ctx.storage_root,
        application_id,
        &guid,
        &unit.dir,
        &rendered,
        ignore,
    )?;

    record::append(
        &ctx.storage_root,
        application_id,
        sub_deployment_record(unit, guid, &artifact_path),
    )?;

    if unit.descriptor.always_pull {
        if let Err(e) = engine.pull_images(&artifact_path) {
            ui::warn(&format!("Image pre-pull failed for {name}: {e}"));
        }
    }

    ui::info(&format!(
        "Starting services for {name}, this could take some time."
    ));
    if let Err(e) = engine.up(&artifact_path) {
        record::update_status(&ctx.storage_root, application_id, Status::Error)?;
        return Err(e);
    }

    Ok(())
}

fn sub_deployment_record(
    unit: &DiscoveredUnit,
    guid: String,
    artifact_path: &Path,
) -> SubDeploymentRecord {
    let extra = unit
        .descriptor
        .extra
        .iter()
        .filter_map(|(key, value)| {
            serde_json::to_value(value)
                .ok()
                .map(|value| (key.clone(), value))
        })
        .collect();
    SubDeploymentRecord {
        guid,
        name: unit.descriptor.name.clone(),
        version: unit.descriptor.version.clone(),
        timestamp: super::epoch_seconds(),
        source_path: unit.template_path.display().to_string(),
        artifact_path: artifact_path.display().to_string(),
        always_pull: unit.descriptor.always_pull,
        extra,
    }
}
