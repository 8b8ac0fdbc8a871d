pub mod config;
pub mod deployment;
pub mod error;
pub mod generation;
pub mod manifest;
pub(crate) mod scalar;
pub mod template;
pub mod template_context;

pub use config::{
    ClusterConfig, ClusterIdentity, GenerationPaths, MasterDiscovery, RawClusterConfig,
    StorageBackend, Subsystem, Tunables, Variant, VariantPolicy,
};
pub use deployment::DeploymentType;
pub use error::AppError;
pub use generation::{
    CommittedTemplate, GenerationError, GenerationFailure, GenerationReport, GenerationState,
};
pub use manifest::{Manifest, ManifestEntry};
pub use template::TemplateRef;
pub use template_context::TemplateContext;
