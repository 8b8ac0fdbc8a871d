//! Generate command implementation.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::app::AppContext;
use crate::app::config::{ConfigEnvironment, DEFAULT_CONFIG_FILE, load_config};
use crate::domain::{
    AppError, DeploymentType, GenerationFailure, GenerationReport, TemplateRef, VariantPolicy,
};
use crate::services::Orchestrator;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub deployment_type: String,
    pub config_path: PathBuf,
    /// Overrides `$HOME/dcos/serve`.
    pub output_dir: Option<PathBuf>,
    /// Read templates from this directory instead of the embedded set.
    pub templates_dir: Option<PathBuf>,
    pub policy: VariantPolicy,
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(deployment_type: impl Into<String>) -> Self {
        Self {
            deployment_type: deployment_type.into(),
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            output_dir: None,
            templates_dir: None,
            policy: VariantPolicy::default(),
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum GenerateOutcome {
    /// Dry run: the templates that would be rendered, nothing written.
    Planned { deployment: DeploymentType, templates: Vec<TemplateRef>, output_dir: PathBuf },
    Generated { report: GenerationReport, output_dir: PathBuf },
}

impl GenerateOutcome {
    pub fn output_dir(&self) -> &PathBuf {
        match self {
            GenerateOutcome::Planned { output_dir, .. }
            | GenerateOutcome::Generated { output_dir, .. } => output_dir,
        }
    }
}

pub fn execute(
    ctx: &AppContext,
    options: &GenerateOptions,
    env: &ConfigEnvironment,
) -> Result<GenerateOutcome, AppError> {
    // An unsupported deployment type fails before the configuration is read.
    let deployment =
        Orchestrator::select_deployment(&options.deployment_type).map_err(log_failure)?;

    let config = load_config(&options.config_path, env, options.output_dir.clone())?;
    let output_dir = config.paths.output_dir.clone();
    let orchestrator = ctx.orchestrator(options.policy);

    if options.dry_run {
        let templates = orchestrator.plan(&config, deployment.label()).map_err(log_failure)?;
        for template in &templates {
            info!("Would render {}", template.path());
        }
        return Ok(GenerateOutcome::Planned { deployment, templates, output_dir });
    }

    if output_dir.exists() && !output_dir.is_dir() {
        return Err(AppError::config_error(format!(
            "Output path is not a directory: {}",
            output_dir.display()
        )));
    }
    fs::create_dir_all(&output_dir)?;

    info!("Generating {} configuration from {}", deployment, ctx.templates().describe());
    let report = orchestrator.run(&config, deployment.label()).map_err(log_failure)?;

    for committed in &report.committed {
        info!("Rendered {}", committed.template.path());
        for file in &committed.files {
            debug!("Wrote {}", file.display());
        }
    }

    Ok(GenerateOutcome::Generated { report, output_dir })
}

fn log_failure(failure: GenerationFailure) -> GenerationFailure {
    error!(
        state = failure.state.label(),
        committed = failure.committed.len(),
        "Generation failed: {}",
        failure.error
    );
    for committed in &failure.committed {
        for file in &committed.files {
            debug!("Left in place: {}", file.display());
        }
    }
    failure
}
