//! Recording engine fake for orchestration tests

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::error::{ComposerError, Result};

use super::DeploymentEngine;

/// One recorded engine invocation
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Up(PathBuf),
    Down(PathBuf, bool),
    Logs(PathBuf, bool, Option<String>),
    Pull(PathBuf),
    Command(PathBuf, Vec<String>),
}

/// Engine that records calls and fails on demand
#[derive(Default)]
pub struct FakeEngine {
    pub calls: RefCell<Vec<EngineCall>>,
    /// Fail `up` for unit paths containing any of these fragments
    pub fail_up_containing: Vec<String>,
    /// Fail every `down` call
    pub fail_down: bool,
    /// Fail every `pull_images` call
    pub fail_pull: bool,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: EngineCall) {
        self.calls.borrow_mut().push(call);
    }

    fn failure(&self, operation: &str, unit_path: &Path) -> ComposerError {
        ComposerError::EngineOperationFailed {
            operation: format!("fake {operation}"),
            unit: unit_path.display().to_string(),
            detail: "injected failure".to_string(),
        }
    }
}

impl DeploymentEngine for FakeEngine {
    fn up(&self, unit_path: &Path) -> Result<()> {
        self.record(EngineCall::Up(unit_path.to_path_buf()));
        let unit = unit_path.to_string_lossy();
        if self
            .fail_up_containing
            .iter()
            .any(|fragment| unit.contains(fragment))
        {
            return Err(self.failure("up", unit_path));
        }
        Ok(())
    }

    fn down(&self, unit_path: &Path, force: bool) -> Result<()> {
        self.record(EngineCall::Down(unit_path.to_path_buf(), force));
        if self.fail_down {
            return Err(self.failure("down", unit_path));
        }
        Ok(())
    }

    fn logs(&self, unit_path: &Path, follow: bool, service: Option<&str>) -> Result<()> {
        self.record(EngineCall::Logs(
            unit_path.to_path_buf(),
            follow,
            service.map(str::to_string),
        ));
        Ok(())
    }

    fn pull_images(&self, unit_path: &Path) -> Result<()> {
        self.record(EngineCall::Pull(unit_path.to_path_buf()));
        if self.fail_pull {
            return Err(self.failure("pull", unit_path));
        }
        Ok(())
    }

    fn command(&self, unit_path: &Path, argv: &[String]) -> Result<i32> {
        self.record(EngineCall::Command(
            unit_path.to_path_buf(),
            argv.to_vec(),
        ));
        Ok(0)
    }

    fn is_installed(&self) -> bool {
        true
    }
}
