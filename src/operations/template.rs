//! Template dry run
//!
//! Renders the root template with the merged values and prints the result,
//! touching neither the state store nor the engine. Useful for producing a
//! compose file for use outside composer entirely.

use std::path::PathBuf;

use crate::error::Result;
use crate::template;
use crate::values;

/// Configuration options for the dry run
pub struct TemplateOptions {
    pub root: PathBuf,
    pub template: String,
    pub values: Vec<PathBuf>,
    pub set: Vec<String>,
}

/// Render the root template to stdout
pub fn run(options: &TemplateOptions) -> Result<()> {
    let merged = values::consolidate(&options.root, &options.values, &options.set)?;
    let output = template::render_template(&options.root, &options.template, &merged)?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ComposerError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dry_run_renders_without_state_mutation() {
        let root = TempDir::new().expect("Failed to create temp directory");
        fs::write(root.path().join("template.yaml"), "svc: {{ name }}\n").unwrap();
        fs::write(root.path().join("values.yaml"), "name: web\n").unwrap();

        let options = TemplateOptions {
            root: root.path().to_path_buf(),
            template: "template.yaml".to_string(),
            values: vec![PathBuf::from("values.yaml")],
            set: Vec::new(),
        };
        assert!(run(&options).is_ok());
    }

    #[test]
    fn test_dry_run_missing_template_is_fatal() {
        let root = TempDir::new().expect("Failed to create temp directory");
        fs::write(root.path().join("values.yaml"), "name: web\n").unwrap();

        let options = TemplateOptions {
            root: root.path().to_path_buf(),
            template: "template.yaml".to_string(),
            values: vec![PathBuf::from("values.yaml")],
            set: Vec::new(),
        };
        let result = run(&options);
        assert!(matches!(
            result.unwrap_err(),
            ComposerError::TemplateNotFound { .. }
        ));
    }

    #[test]
    fn test_dry_run_applies_overrides() {
        let root = TempDir::new().expect("Failed to create temp directory");
        fs::write(root.path().join("template.yaml"), "svc: {{ name }}\n").unwrap();
        fs::write(root.path().join("values.yaml"), "name: web\n").unwrap();

        let options = TemplateOptions {
            root: root.path().to_path_buf(),
            template: "template.yaml".to_string(),
            values: vec![PathBuf::from("values.yaml")],
            set: vec!["name=api".to_string()],
        };
        assert!(run(&options).is_ok());
    }
}
