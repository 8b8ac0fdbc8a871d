use std::path::Path;

use crate::adapters::{DirectoryTemplateSource, EmbeddedTemplateSource, MinijinjaTemplateRenderer};
use crate::domain::VariantPolicy;
use crate::ports::{TemplateRenderer, TemplateSource};
use crate::services::Orchestrator;

/// Application context holding dependencies for command execution.
pub struct AppContext {
    templates: Box<dyn TemplateSource>,
    renderer: Box<dyn TemplateRenderer>,
}

impl AppContext {
    /// Create a new application context.
    pub fn new(templates: Box<dyn TemplateSource>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { templates, renderer }
    }

    /// Context backed by `templates_dir` when given, otherwise the embedded templates.
    pub fn for_templates(templates_dir: Option<&Path>) -> Self {
        let templates: Box<dyn TemplateSource> = match templates_dir {
            Some(dir) => Box::new(DirectoryTemplateSource::new(dir)),
            None => Box::new(EmbeddedTemplateSource::new()),
        };
        Self::new(templates, Box::new(MinijinjaTemplateRenderer::new()))
    }

    /// Get a reference to the template source.
    pub fn templates(&self) -> &dyn TemplateSource {
        self.templates.as_ref()
    }

    pub fn orchestrator(&self, policy: VariantPolicy) -> Orchestrator<'_> {
        Orchestrator::new(self.templates.as_ref(), self.renderer.as_ref()).with_policy(policy)
    }
}
