//! Artifact staging
//!
//! Staging copies a unit's directory tree into durable per-application,
//! per-sub-deployment storage, skipping anything matched by the optional
//! ignore list, then writes the rendered compose file and configmaps on top.
//! Glob patterns match the path relative to the unit directory or the bare
//! file name, with forward slashes on every platform.

use std::path::{Path, PathBuf};

use wax::{CandidatePath, Glob, Pattern};

use crate::error::Result;
use crate::template::RenderedUnit;

use super::paths;

/// Read glob patterns from the ignore file in the install root, one per line
pub fn read_ignore_patterns(install_root: &Path) -> Result<Vec<String>> {
    let path = install_root.join(paths::IGNORE_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)
        .map_err(|e| crate::error::file_read_failed(&path, e.to_string()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Check if any ignore pattern matches a relative path or its file name
fn is_ignored(patterns: &[String], relative_path: &str, file_name: &str) -> bool {
    patterns.iter().any(|pattern| {
        matches_glob(pattern, relative_path) || matches_glob(pattern, file_name)
    })
}

/// Check if a glob pattern matches a path
///
/// Uses wax for platform-independent glob matching.
fn matches_glob(pattern: &str, path: &str) -> bool {
    match Glob::new(pattern) {
        Ok(glob) => glob.is_match(CandidatePath::from(path)),
        Err(_) => false,
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| crate::error::file_write_failed(parent, e.to_string()))?;
    }
    Ok(())
}

fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Copy `source` into `target`, skipping ignored entries (whole subtrees for
/// ignored directories)
fn copy_tree_filtered(source: &Path, target: &Path, ignore: &[String]) -> Result<()> {
    std::fs::create_dir_all(target)
        .map_err(|e| crate::error::file_write_failed(target, e.to_string()))?;

    let mut walker = walkdir::WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| crate::error::io_error(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| crate::error::io_error(e.to_string()))?;
        let relative_str = to_forward_slashes(relative);
        let file_name = entry.file_name().to_string_lossy().to_string();

        if is_ignored(ignore, &relative_str, &file_name) {
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
            continue;
        }

        let destination = target.join(relative);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&destination)
                .map_err(|e| crate::error::file_write_failed(&destination, e.to_string()))?;
        } else {
            ensure_parent_dir(&destination)?;
            std::fs::copy(entry.path(), &destination)
                .map_err(|e| crate::error::file_write_failed(&destination, e.to_string()))?;
        }
    }
    Ok(())
}

/// Stage one rendered unit into durable storage
///
/// Copies the unit tree to `<root>/<application_id>/<guid>/`, then writes the
/// rendered compose file and each configmap under its original relative
/// subdirectory. Returns the staged artifact directory.
pub fn stage_unit(
    storage_root: &Path,
    application_id: &str,
    guid: &str,
    unit_dir: &Path,
    rendered: &RenderedUnit,
    ignore: &[String],
) -> Result<PathBuf> {
    let artifact_dir = paths::application_path(storage_root, application_id).join(guid);
    copy_tree_filtered(unit_dir, &artifact_dir, ignore)?;

    let compose_path = artifact_dir.join(paths::COMPOSE_FILE);
    std::fs::write(&compose_path, &rendered.compose)
        .map_err(|e| crate::error::file_write_failed(&compose_path, e.to_string()))?;

    for configmap in &rendered.configmaps {
        let path = artifact_dir.join(&configmap.relative_path);
        ensure_parent_dir(&path)?;
        std::fs::write(&path, &configmap.content)
            .map_err(|e| crate::error::file_write_failed(&path, e.to_string()))?;
    }

    Ok(artifact_dir)
}

/// Delete the whole durable subtree of an application
pub fn remove_application(storage_root: &Path, application_id: &str) -> Result<()> {
    let path = paths::application_path(storage_root, application_id);
    std::fs::remove_dir_all(&path)
        .map_err(|e| crate::error::file_write_failed(&path, e.to_string()))
}
