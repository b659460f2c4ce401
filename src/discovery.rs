//! Descriptor discovery
//!
//! An installable directory is marked by an `app.yaml` descriptor carrying at
//! least a name and a version. Discovery walks the install root recursively
//! and returns every directory that holds both a valid descriptor and the
//! named template file, in lexicographic path order so repeated runs install
//! sub-deployments in the same sequence.
//!
//! A defective sub-descriptor (unparseable, or missing name/version) is
//! skipped with a warning; the same defect on the root descriptor is fatal.
//! A directory without the template file is skipped with a warning too —
//! including the root itself, which may legitimately hold only nested units.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::{ComposerError, Result};
use crate::ui;

/// File name marking a directory as installable
pub const DESCRIPTOR_FILE: &str = "app.yaml";

/// Parsed `app.yaml` descriptor
#[derive(Debug, Clone, Deserialize)]
pub struct Descriptor {
    pub name: String,
    pub version: String,
    /// Pre-pull referenced images before starting the unit
    #[serde(default, rename = "alwaysPull")]
    pub always_pull: bool,
    /// Unknown descriptor fields, carried through to the state record
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// One installable directory found under the install root
#[derive(Debug, Clone)]
pub struct DiscoveredUnit {
    /// Directory holding the descriptor and template
    pub dir: PathBuf,
    /// Path of the template file inside `dir`
    pub template_path: PathBuf,
    pub descriptor: Descriptor,
}

/// Load and validate a descriptor file
pub fn load_descriptor(path: &Path) -> Result<Descriptor> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| crate::error::file_read_failed(path, e.to_string()))?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| ComposerError::DescriptorInvalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    if !value.is_mapping() {
        return Err(ComposerError::DescriptorInvalid {
            path: path.display().to_string(),
            reason: "descriptor is empty or not a mapping".to_string(),
        });
    }

    let has_field = |key: &str| {
        value
            .get(key)
            .is_some_and(|v| v.as_str().is_some_and(|s| !s.is_empty()))
    };
    if !has_field("name") || !has_field("version") {
        return Err(ComposerError::DescriptorIncomplete {
            path: path.display().to_string(),
        });
    }

    serde_yaml::from_value(value).map_err(|e| ComposerError::DescriptorInvalid {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Find every descriptor file under `root`, lexicographically sorted
fn find_descriptor_paths(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_str() == Some(DESCRIPTOR_FILE))
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();
    paths
}

/// Discover installable units under `root`, in install order
pub fn discover(root: &Path, template_name: &str) -> Result<Vec<DiscoveredUnit>> {
    if !root.exists() {
        return Err(crate::error::io_error(format!(
            "Path {} does not exist",
            root.display()
        )));
    }
    if !root.join(DESCRIPTOR_FILE).exists() {
        return Err(ComposerError::DescriptorNotFound {
            path: root.join(DESCRIPTOR_FILE).display().to_string(),
        });
    }

    let mut units = Vec::new();
    for descriptor_path in find_descriptor_paths(root) {
        let dir = descriptor_path
            .parent()
            .unwrap_or(root)
            .to_path_buf();
        let is_root = dir == root;

        let descriptor = match load_descriptor(&descriptor_path) {
            Ok(descriptor) => descriptor,
            Err(e) if is_root => return Err(e),
            Err(e) => {
                ui::warn(&format!("{e}, skipping."));
                continue;
            }
        };

        let template_path = dir.join(template_name);
        if !template_path.exists() {
            ui::warn(&format!(
                "Could not find file {}, skipping.",
                template_path.display()
            ));
            continue;
        }

        units.push(DiscoveredUnit {
            dir,
            template_path,
            descriptor,
        });
    }

    Ok(units)
}
