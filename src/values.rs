//! Configuration value resolution
//!
//! Values come from two places: YAML value files (mandatory configuration,
//! any load failure is fatal) and literal `key=value` overrides. Files are
//! merged shallowly left to right, later file wins per key; overrides are
//! applied last and always win. Composite values are replaced wholly on
//! conflict, never merged key-by-key.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ComposerError, Result};

/// Merge all value sources into one mapping
///
/// Relative file paths are resolved against `root`.
pub fn consolidate(root: &Path, files: &[PathBuf], overrides: &[String]) -> Result<Value> {
    let mut all_values = Value::Object(serde_json::Map::new());

    for file in files {
        let path = if file.is_absolute() {
            file.clone()
        } else {
            root.join(file)
        };
        let loaded = load_values_file(&path)?;
        shallow_merge(&mut all_values, &loaded);
    }

    for raw in overrides {
        let (key, value) = parse_override(raw)?;
        if let Some(map) = all_values.as_object_mut() {
            map.insert(key, value);
        }
    }

    Ok(all_values)
}

/// Load a single values file, requiring a top-level mapping
fn load_values_file(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(ComposerError::ValuesFileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| ComposerError::ValuesParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let value: Value =
        serde_yaml::from_str(&content).map_err(|e| ComposerError::ValuesParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    if !value.is_object() {
        return Err(ComposerError::ValuesNotMapping {
            path: path.display().to_string(),
        });
    }
    Ok(value)
}

/// Shallow merge: overwrite top-level keys, later source wins
pub fn shallow_merge(target: &mut Value, source: &Value) {
    if let (Some(target_obj), Some(source_obj)) = (target.as_object_mut(), source.as_object()) {
        for (key, value) in source_obj {
            target_obj.insert(key.clone(), value.clone());
        }
    }
}

/// Split a `key=value` override and coerce its value
pub fn parse_override(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ComposerError::OverrideMalformed {
            input: raw.to_string(),
        })?;
    Ok((key.to_string(), coerce(value)))
}

/// Coerce an override value into its most specific representation
///
/// Order: structured JSON (leading `{`, raw string on parse failure), then
/// case-insensitive booleans, then all-digit numbers, then the raw string.
fn coerce(raw: &str) -> Value {
    if raw.starts_with('{') {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            return value;
        }
    }
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(number) = raw.parse::<f64>() {
            if let Some(number) = serde_json::Number::from_f64(number) {
                return Value::Number(number);
            }
        }
    }
    Value::String(raw.to_string())
}
