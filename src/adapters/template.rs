use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::{GenerationError, TemplateContext, TemplateRef};
use crate::ports::TemplateRenderer;

/// Template renderer using Minijinja.
///
/// Undefined placeholders are errors, so a template naming a field the active
/// configuration lacks fails instead of rendering an empty string.
#[derive(Debug, Clone, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &TemplateRef,
        source: &str,
        context: &TemplateContext<'_>,
    ) -> Result<String, GenerationError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_keep_trailing_newline(true);
            env
        });

        env.render_str(source, context).map_err(|err| template_render_error(template, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn template_render_error(template: &TemplateRef, err: minijinja::Error) -> GenerationError {
    let mut reason = err.to_string();
    if let Some(detail) = err.detail()
        && !reason.contains(detail)
    {
        reason = format!("{}: {}", reason, detail);
    }
    GenerationError::TemplateRender { template: template.path(), reason }
}
