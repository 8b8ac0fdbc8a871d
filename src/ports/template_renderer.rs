use crate::domain::{GenerationError, TemplateContext, TemplateRef};

/// Trait for rendering templates.
///
/// This abstraction keeps the template engine (e.g. minijinja) out of the
/// generation pipeline.
pub trait TemplateRenderer {
    /// Render `source` with the given context.
    ///
    /// # Arguments
    /// * `template` - Reference the source was loaded from (for error reporting).
    /// * `source` - The template text.
    /// * `context` - Configuration values to substitute.
    fn render(
        &self,
        template: &TemplateRef,
        source: &str,
        context: &TemplateContext<'_>,
    ) -> Result<String, GenerationError>;
}
