//! Template rendering
//!
//! Each unit directory gets its own Jinja environment rooted at that
//! directory, so template includes and auxiliary configmap templates resolve
//! relative to the unit rather than the process working directory. Undefined
//! variables are render errors. Render failures carry the template path, a
//! concise message, and the full renderer diagnostic for verbose output.

use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior, path_loader};
use serde_json::Value;
use walkdir::WalkDir;

use crate::error::{ComposerError, Result};

/// Extension marking an auxiliary configuration-file template
pub const CONFIGMAP_EXT: &str = "configmap";

/// One rendered auxiliary configuration file
#[derive(Debug, Clone)]
pub struct RenderedConfigMap {
    /// Path relative to the unit directory, preserved when staging
    pub relative_path: PathBuf,
    pub content: String,
}

/// All rendered artifacts of one unit
#[derive(Debug, Clone)]
pub struct RenderedUnit {
    /// The rendered primary deployment template
    pub compose: String,
    pub configmaps: Vec<RenderedConfigMap>,
}

fn environment(unit_dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_loader(path_loader(unit_dir));
    env
}

fn render_error(path: &Path, err: &minijinja::Error) -> ComposerError {
    let mut detail = format!("{err:#}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        detail.push_str(&format!("\ncaused by: {cause}"));
        source = cause.source();
    }
    ComposerError::TemplateRenderFailed {
        path: path.display().to_string(),
        message: err.to_string(),
        detail,
    }
}

fn render_named(
    env: &Environment<'_>,
    unit_dir: &Path,
    name: &str,
    values: &Value,
) -> Result<String> {
    let path = unit_dir.join(name);
    let template = env
        .get_template(name)
        .map_err(|e| render_error(&path, &e))?;
    template.render(values).map_err(|e| render_error(&path, &e))
}

/// Find auxiliary configmap templates under the unit directory
///
/// Returns paths relative to `unit_dir`, lexicographically sorted.
fn find_configmap_paths(unit_dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(unit_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == CONFIGMAP_EXT)
        })
        .filter_map(|e| e.path().strip_prefix(unit_dir).ok().map(Path::to_path_buf))
        .collect();
    paths.sort();
    paths
}

fn template_name(relative_path: &Path) -> String {
    relative_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Render a single template file under `dir` with the merged values
pub fn render_template(dir: &Path, name: &str, values: &Value) -> Result<String> {
    if !dir.join(name).exists() {
        return Err(ComposerError::TemplateNotFound {
            path: dir.join(name).display().to_string(),
        });
    }
    let env = environment(dir);
    render_named(&env, dir, name, values)
}

/// Render the unit's primary template and every configmap alongside it
pub fn render_unit(unit_dir: &Path, name: &str, values: &Value) -> Result<RenderedUnit> {
    let env = environment(unit_dir);

    let mut configmaps = Vec::new();
    for relative_path in find_configmap_paths(unit_dir) {
        let content = render_named(&env, unit_dir, &template_name(&relative_path), values)?;
        configmaps.push(RenderedConfigMap {
            relative_path,
            content,
        });
    }

    let compose = render_named(&env, unit_dir, name, values)?;
    Ok(RenderedUnit {
        compose,
        configmaps,
    })
}
