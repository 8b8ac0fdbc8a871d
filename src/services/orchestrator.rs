//! Sequences a generation run: select deployment, validate, then render and
//! commit each selected template in order.

use crate::domain::config::{ClusterConfig, VariantPolicy};
use crate::domain::{
    CommittedTemplate, DeploymentType, GenerationFailure, GenerationReport, GenerationState,
    TemplateContext, TemplateRef,
};
use crate::ports::{TemplateRenderer, TemplateSource};

use super::{ManifestWriter, check_parameters, select_templates, validate};

/// Drives one configuration through the generation pipeline.
///
/// Holds no state between runs; every call resolves templates afresh.
pub struct Orchestrator<'a> {
    source: &'a dyn TemplateSource,
    renderer: &'a dyn TemplateRenderer,
    policy: VariantPolicy,
}

impl<'a> Orchestrator<'a> {
    pub fn new(source: &'a dyn TemplateSource, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { source, renderer, policy: VariantPolicy::default() }
    }

    pub fn with_policy(mut self, policy: VariantPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> VariantPolicy {
        self.policy
    }

    /// Resolve the requested deployment type.
    ///
    /// Fails in the `Selecting` state without looking at any configuration.
    pub fn select_deployment(requested: &str) -> Result<DeploymentType, GenerationFailure> {
        requested
            .parse::<DeploymentType>()
            .map_err(|err| GenerationFailure::new(GenerationState::Selecting, err))
    }

    /// Validate `config` and return the templates a run would render, without
    /// rendering or writing anything.
    pub fn plan(
        &self,
        config: &ClusterConfig,
        requested: &str,
    ) -> Result<Vec<TemplateRef>, GenerationFailure> {
        let deployment = Self::select_deployment(requested)?;
        self.validate_config(config)?;
        Ok(select_templates(config, deployment))
    }

    /// Run the full pipeline, writing under `config.paths.output_dir`.
    ///
    /// The first failure aborts the remaining templates. Templates committed
    /// before it are reported in the failure and left on disk.
    pub fn run(
        &self,
        config: &ClusterConfig,
        requested: &str,
    ) -> Result<GenerationReport, GenerationFailure> {
        let deployment = Self::select_deployment(requested)?;
        self.validate_config(config)?;

        let templates = select_templates(config, deployment);
        let context = TemplateContext::from_config(config);
        let writer = ManifestWriter::new(&config.paths.output_dir);
        let committed = self.render_and_commit(&templates, &context, &writer)?;

        Ok(GenerationReport { deployment, committed })
    }

    /// Render and commit `templates` in order, stopping at the first failure.
    pub fn render_and_commit(
        &self,
        templates: &[TemplateRef],
        context: &TemplateContext<'_>,
        writer: &ManifestWriter,
    ) -> Result<Vec<CommittedTemplate>, GenerationFailure> {
        let mut committed = Vec::with_capacity(templates.len());

        for template in templates {
            let result = self
                .source
                .load(template)
                .and_then(|source| self.renderer.render(template, &source, context))
                .and_then(|rendered| writer.commit(&rendered, template));

            match result {
                Ok(files) => committed.push(CommittedTemplate { template: *template, files }),
                Err(error) => {
                    return Err(GenerationFailure {
                        state: GenerationState::Rendering,
                        error,
                        committed,
                    });
                }
            }
        }

        Ok(committed)
    }

    fn validate_config(&self, config: &ClusterConfig) -> Result<(), GenerationFailure> {
        validate(config, self.policy)
            .and_then(|()| check_parameters(config))
            .map_err(|err| GenerationFailure::new(GenerationState::Validating, err))
    }
}
