mod directory;
mod embedded;

pub use directory::DirectoryTemplateSource;
pub use embedded::EmbeddedTemplateSource;
