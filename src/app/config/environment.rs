//! Process environment inputs resolved once per run.

use std::env;
use std::path::PathBuf;

use crate::domain::{AppError, GenerationPaths};

pub const BOOTSTRAP_ID_VAR: &str = "DCOS_BOOTSTRAP_ID";
pub const CHANNEL_NAME_VAR: &str = "DCOS_CHANNEL_NAME";
pub const HOME_VAR: &str = "HOME";

/// Snapshot of the environment variables the loader depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEnvironment {
    pub bootstrap_id: Option<String>,
    pub channel_name: Option<String>,
    pub home: Option<PathBuf>,
}

impl ConfigEnvironment {
    pub fn from_process() -> Self {
        Self {
            bootstrap_id: env::var(BOOTSTRAP_ID_VAR).ok(),
            channel_name: env::var(CHANNEL_NAME_VAR).ok(),
            home: env::var_os(HOME_VAR).map(PathBuf::from),
        }
    }

    pub fn bootstrap_id(&self) -> Result<String, AppError> {
        require(self.bootstrap_id.as_deref(), BOOTSTRAP_ID_VAR)
    }

    pub fn channel_name(&self) -> Result<String, AppError> {
        require(self.channel_name.as_deref(), CHANNEL_NAME_VAR)
    }

    /// `$HOME/dcos` as the working directory and `$HOME/dcos/serve` as the
    /// output root, unless `output_override` is given.
    pub fn paths(&self, output_override: Option<PathBuf>) -> Result<GenerationPaths, AppError> {
        let home = self
            .home
            .as_ref()
            .filter(|home| !home.as_os_str().is_empty())
            .ok_or_else(|| AppError::MissingEnvironment(HOME_VAR.to_string()))?;

        let work_dir = home.join("dcos");
        let output_dir = output_override.unwrap_or_else(|| work_dir.join("serve"));
        Ok(GenerationPaths { output_dir, work_dir })
    }
}

fn require(value: Option<&str>, name: &str) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(AppError::MissingEnvironment(name.to_string())),
    }
}
