use std::io;

use thiserror::Error;

use crate::domain::config::Subsystem;

/// Terminal failure reasons for a generation run.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Requested deployment type is not in the supported set.
    #[error("'{requested}' is not a supported installation type (supported: {supported})")]
    UnsupportedDeploymentType { requested: String, supported: String },

    /// A field required by the active variant is empty or absent.
    #[error("Must set {field} when using {subsystem} type {variant}")]
    MissingRequiredField { field: &'static str, subsystem: Subsystem, variant: String },

    /// A variant tag outside the closed set was supplied.
    #[error("'{tag}' is not a known {subsystem} type (expected one of: {expected})")]
    UnknownVariant { subsystem: Subsystem, tag: String, expected: String },

    /// A present field carries a value the installer cannot use.
    #[error("Invalid {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// Template content could not be located.
    #[error("Template '{template}' could not be resolved: {reason}")]
    TemplateResolution { template: String, reason: String },

    /// Placeholder substitution failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Rendered output is not a `write_files` manifest.
    #[error("Template '{template}' did not render a valid manifest: {reason}")]
    ManifestParse { template: String, reason: String },

    /// Directory creation or file write failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl GenerationError {
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            GenerationError::Write { source, .. } => source.kind(),
            GenerationError::TemplateResolution { .. } => io::ErrorKind::NotFound,
            GenerationError::UnsupportedDeploymentType { .. }
            | GenerationError::MissingRequiredField { .. }
            | GenerationError::UnknownVariant { .. }
            | GenerationError::InvalidParameter { .. } => io::ErrorKind::InvalidInput,
            GenerationError::TemplateRender { .. } | GenerationError::ManifestParse { .. } => {
                io::ErrorKind::InvalidData
            }
        }
    }

    /// Name of the offending configuration field, when the failure is about one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            GenerationError::MissingRequiredField { field, .. }
            | GenerationError::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}
