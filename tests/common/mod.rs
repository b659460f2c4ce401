//! Common test utilities for Composer integration tests

use std::path::PathBuf;

use tempfile::TempDir;

/// A sandboxed workspace for integration tests: an install root with
/// descriptors and templates, plus an isolated storage root wired in through
/// `COMPOSER_STORAGE_DIR`.
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory holding everything
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Directory the composer binary runs in
    pub install_root: PathBuf,
    /// Isolated durable storage root
    pub storage_root: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let install_root = temp.path().join("app");
        let storage_root = temp.path().join("storage");
        std::fs::create_dir_all(&install_root).expect("Failed to create install root");
        std::fs::create_dir_all(&storage_root).expect("Failed to create storage root");
        Self {
            temp,
            install_root,
            storage_root,
        }
    }

    /// Write a file under the install root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.install_root.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a unit directory with a descriptor and a trivial template
    pub fn write_unit(&self, dir: &str, name: &str) {
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };
        self.write_file(
            &format!("{prefix}app.yaml"),
            &format!("name: {name}\nversion: \"1.0.0\"\n"),
        );
        self.write_file(
            &format!("{prefix}template.yaml"),
            "services:\n  web:\n    image: \"nginx:{{ tag }}\"\n",
        );
    }

    /// Default values file for the templates written by `write_unit`
    pub fn write_values(&self) {
        self.write_file("values.yaml", "tag: \"1.25\"\n");
    }

    /// Path of an application's persisted state record
    pub fn record_path(&self, application_id: &str) -> PathBuf {
        self.storage_root.join(application_id).join("config.json")
    }

    /// Command running the composer binary inside this workspace
    pub fn composer_cmd(&self) -> assert_cmd::Command {
        let mut cmd =
            assert_cmd::Command::cargo_bin("composer").expect("Failed to find composer binary");
        cmd.current_dir(&self.install_root)
            .env("COMPOSER_STORAGE_DIR", &self.storage_root);
        cmd
    }

    /// Install a stub engine executable and point `COMPOSER_ENGINE_BIN` at it
    ///
    /// The stub succeeds on everything except the operations listed in
    /// `fail_on`, and logs each invocation to `engine.log` in the workspace.
    #[cfg(unix)]
    pub fn stub_engine(&self, fail_on: &[&str]) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let log_path = self.temp.path().join("engine.log");
        let mut fail_checks = String::new();
        for operation in fail_on {
            fail_checks.push_str(&format!(
                "for a in \"$@\"; do [ \"$a\" = \"{operation}\" ] && exit 1; done\n"
            ));
        }
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> \"{}\"\n{fail_checks}exit 0\n",
            log_path.display()
        );

        let stub_path = self.temp.path().join("stub-engine");
        std::fs::write(&stub_path, script).expect("Failed to write stub engine");
        let mut permissions = std::fs::metadata(&stub_path)
            .expect("Failed to stat stub engine")
            .permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(&stub_path, permissions)
            .expect("Failed to mark stub engine executable");
        stub_path
    }

    /// Engine invocations recorded by the stub, one line per call
    #[cfg(unix)]
    pub fn engine_log(&self) -> Vec<String> {
        let log_path = self.temp.path().join("engine.log");
        if !log_path.exists() {
            return Vec::new();
        }
        std::fs::read_to_string(&log_path)
            .expect("Failed to read engine log")
            .lines()
            .map(str::to_string)
            .collect()
    }
}
