pub mod template;
pub mod template_sources;

pub use template::MinijinjaTemplateRenderer;
pub use template_sources::{DirectoryTemplateSource, EmbeddedTemplateSource};
