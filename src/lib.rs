//! genconf: render cluster configuration templates into an output tree.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOptions, GenerateOutcome, ValidateOptions, ValidateOutcome, generate,
    generate_with_env, validate, validate_with_env,
};
pub use app::config::ConfigEnvironment;
pub use domain::{
    AppError, ClusterConfig, DeploymentType, GenerationError, GenerationFailure,
    GenerationReport, GenerationState, TemplateRef, VariantPolicy,
};
pub use services::Orchestrator;
