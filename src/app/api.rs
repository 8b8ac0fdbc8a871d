//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use crate::app::AppContext;
use crate::app::commands;
use crate::app::config::ConfigEnvironment;

pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::app::commands::validate::{ValidateOptions, ValidateOutcome};
pub use crate::domain::AppError;

/// Generate configuration files, reading inputs from the process environment.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    generate_with_env(options, &ConfigEnvironment::from_process())
}

/// Generate configuration files with an explicit environment snapshot.
pub fn generate_with_env(
    options: &GenerateOptions,
    env: &ConfigEnvironment,
) -> Result<GenerateOutcome, AppError> {
    let ctx = AppContext::for_templates(options.templates_dir.as_deref());
    commands::generate::execute(&ctx, options, env)
}

/// Check a configuration file, reading inputs from the process environment.
pub fn validate(options: &ValidateOptions) -> Result<ValidateOutcome, AppError> {
    validate_with_env(options, &ConfigEnvironment::from_process())
}

/// Check a configuration file with an explicit environment snapshot.
pub fn validate_with_env(
    options: &ValidateOptions,
    env: &ConfigEnvironment,
) -> Result<ValidateOutcome, AppError> {
    let ctx = AppContext::for_templates(None);
    commands::validate::execute(&ctx, options, env)
}
