use crate::domain::{GenerationError, TemplateRef};

/// Port for resolving template references to template text.
///
/// Implementations must not cache across runs; each call resolves afresh.
pub trait TemplateSource {
    /// Load the raw template for `template`.
    ///
    /// Returns `GenerationError::TemplateResolution` when no template exists at
    /// the reference's path.
    fn load(&self, template: &TemplateRef) -> Result<String, GenerationError>;

    /// Human-readable origin of the templates, for logs.
    fn describe(&self) -> String;
}
