//! docker-compose engine implementation
//!
//! Lifecycle operations run the compose binary against the staged
//! `docker-compose.yaml` of one unit. Up/down/pull output is captured so it
//! can be attached to diagnostics; logs and pass-through commands stream
//! straight to the caller's terminal.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::error::{ComposerError, Result};
use crate::storage::paths::COMPOSE_FILE;

/// Default engine binary
pub const DEFAULT_ENGINE_BIN: &str = "docker-compose";

/// Environment variable overriding the engine binary
pub const ENGINE_BIN_ENV: &str = "COMPOSER_ENGINE_BIN";

/// Deployment engine shelling out to docker-compose
pub struct ComposeEngine {
    binary: String,
}

impl ComposeEngine {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Engine with the binary taken from the environment, or the default
    pub fn from_env() -> Self {
        let binary =
            std::env::var(ENGINE_BIN_ENV).unwrap_or_else(|_| DEFAULT_ENGINE_BIN.to_string());
        Self::new(binary)
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    fn compose_file(unit_path: &Path) -> PathBuf {
        unit_path.join(COMPOSE_FILE)
    }

    fn run_captured(&self, args: &[&str]) -> Result<Output> {
        Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|e| ComposerError::EngineSpawnFailed {
                binary: self.binary.clone(),
                reason: e.to_string(),
            })
    }

    fn run_streamed(&self, args: &[&str]) -> Result<std::process::ExitStatus> {
        Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ComposerError::EngineSpawnFailed {
                binary: self.binary.clone(),
                reason: e.to_string(),
            })
    }

    /// The engine reports some failures on stderr with a zero exit code, so
    /// both signals count.
    fn check(&self, operation: &str, unit_path: &Path, output: &Output) -> Result<()> {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() || stderr.to_lowercase().contains("error") {
            return Err(ComposerError::EngineOperationFailed {
                operation: format!("{} {operation}", self.binary),
                unit: unit_path.display().to_string(),
                detail: stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}

impl super::DeploymentEngine for ComposeEngine {
    fn up(&self, unit_path: &Path) -> Result<()> {
        let file = Self::compose_file(unit_path);
        let file = file.to_string_lossy();
        let output = self.run_captured(&["-f", file.as_ref(), "up", "-d"])?;
        self.check("up", unit_path, &output)
    }

    fn down(&self, unit_path: &Path, force: bool) -> Result<()> {
        let file = Self::compose_file(unit_path);
        let file = file.to_string_lossy();
        let output = if force {
            self.run_captured(&["-f", file.as_ref(), "down", "--timeout", "0"])?
        } else {
            self.run_captured(&["-f", file.as_ref(), "down"])?
        };
        self.check("down", unit_path, &output)
    }

    fn logs(&self, unit_path: &Path, follow: bool, service: Option<&str>) -> Result<()> {
        let file = Self::compose_file(unit_path);
        let file = file.to_string_lossy();
        let mut args = vec!["-f", file.as_ref(), "logs"];
        if follow {
            args.push("--follow");
        }
        if let Some(service) = service {
            args.push(service);
        }
        let status = self.run_streamed(&args)?;
        if !status.success() {
            return Err(ComposerError::EngineOperationFailed {
                operation: format!("{} logs", self.binary),
                unit: unit_path.display().to_string(),
                detail: String::new(),
            });
        }
        Ok(())
    }

    fn pull_images(&self, unit_path: &Path) -> Result<()> {
        let file = Self::compose_file(unit_path);
        let file = file.to_string_lossy();
        let output = self.run_captured(&["-f", file.as_ref(), "pull", "--ignore-pull-failures"])?;
        self.check("pull", unit_path, &output)
    }

    fn command(&self, unit_path: &Path, argv: &[String]) -> Result<i32> {
        let file = Self::compose_file(unit_path);
        let file = file.to_string_lossy();
        let mut args = vec!["-f".to_string(), file.to_string()];
        args.extend(argv.iter().cloned());
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let status = self.run_streamed(&arg_refs)?;
        Ok(status.code().unwrap_or(-1))
    }

    fn is_installed(&self) -> bool {
        self.run_captured(&["version"])
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}
