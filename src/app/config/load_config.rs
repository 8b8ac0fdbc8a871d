//! Cluster configuration loading from a YAML file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{AppError, ClusterConfig, RawClusterConfig};

use super::environment::{BOOTSTRAP_ID_VAR, CHANNEL_NAME_VAR, ConfigEnvironment};

/// Default configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "dcos-config.yaml";

/// Load `path`, fold it into typed variants and attach environment-sourced fields.
///
/// Variant requirements are not checked here; that is the validator's job.
pub fn load_config(
    path: &Path,
    env: &ConfigEnvironment,
    output_override: Option<PathBuf>,
) -> Result<ClusterConfig, AppError> {
    info!("Checking configuration in {}", path.display());
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::ConfigNotFound(path.display().to_string()),
        _ => AppError::Io(err),
    })?;

    let raw = RawClusterConfig::from_yaml(&content).map_err(|err| AppError::ConfigParse {
        path: path.display().to_string(),
        details: err.to_string(),
    })?;

    let bootstrap_id = env.bootstrap_id()?;
    info!("{} found in environment: {}", BOOTSTRAP_ID_VAR, bootstrap_id);
    let channel_name = env.channel_name()?;
    info!("{} found in environment: {}", CHANNEL_NAME_VAR, channel_name);

    let paths = env.paths(output_override)?;
    debug!("Working directory {}", paths.work_dir.display());
    debug!("Output directory {}", paths.output_dir.display());

    let config = raw.into_config(bootstrap_id, channel_name, paths);
    info!("Building configuration for {} cluster", config.identity.cluster_name);
    Ok(config)
}
