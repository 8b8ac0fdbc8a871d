//! Validate command implementation.

use std::path::PathBuf;

use tracing::{error, info};

use crate::app::AppContext;
use crate::app::config::{ConfigEnvironment, DEFAULT_CONFIG_FILE, load_config};
use crate::domain::{
    AppError, DeploymentType, GenerationFailure, TemplateRef, Variant, VariantPolicy,
};
use crate::services::Orchestrator;

#[derive(Debug, Clone)]
pub struct ValidateOptions {
    pub deployment_type: String,
    pub config_path: PathBuf,
    pub policy: VariantPolicy,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            deployment_type: DeploymentType::OnPrem.label().to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            policy: VariantPolicy::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidateOutcome {
    pub cluster_name: String,
    pub deployment: DeploymentType,
    pub master_discovery: String,
    pub storage_backend: String,
    pub templates: Vec<TemplateRef>,
}

/// Load and check a configuration without rendering anything.
pub fn execute(
    ctx: &AppContext,
    options: &ValidateOptions,
    env: &ConfigEnvironment,
) -> Result<ValidateOutcome, AppError> {
    let deployment =
        Orchestrator::select_deployment(&options.deployment_type).map_err(log_failure)?;
    let config = load_config(&options.config_path, env, None)?;

    let templates =
        ctx.orchestrator(options.policy).plan(&config, deployment.label()).map_err(log_failure)?;
    info!("Configuration valid; {} template(s) selected", templates.len());

    Ok(ValidateOutcome {
        cluster_name: config.identity.cluster_name.clone(),
        deployment,
        master_discovery: config.master_discovery.tag().to_string(),
        storage_backend: config.storage_backend.tag().to_string(),
        templates,
    })
}

fn log_failure(failure: GenerationFailure) -> GenerationFailure {
    error!(state = failure.state.label(), "Validation failed: {}", failure.error);
    failure
}
