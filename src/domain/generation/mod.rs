//! Generation run states, outcomes and failures.

mod error;

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::deployment::DeploymentType;
use crate::domain::template::TemplateRef;

pub use error::GenerationError;

/// Non-terminal states of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    /// Resolving the requested deployment type.
    Selecting,
    /// Checking variant requirements and parameter values.
    Validating,
    /// Rendering and committing the selected templates in order.
    Rendering,
}

impl GenerationState {
    pub fn label(self) -> &'static str {
        match self {
            GenerationState::Selecting => "selecting",
            GenerationState::Validating => "validating",
            GenerationState::Rendering => "rendering",
        }
    }
}

impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A template whose manifest was fully written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedTemplate {
    pub template: TemplateRef,
    /// Absolute paths in manifest order. Paths repeat when a manifest repeats them.
    pub files: Vec<PathBuf>,
}

/// Result of a run that reached `Done`.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub deployment: DeploymentType,
    pub committed: Vec<CommittedTemplate>,
}

impl GenerationReport {
    /// Distinct files written by the run, in first-write order.
    pub fn files(&self) -> Vec<&PathBuf> {
        let mut seen = HashSet::new();
        self.committed
            .iter()
            .flat_map(|t| t.files.iter())
            .filter(|path| seen.insert(*path))
            .collect()
    }
}

/// Result of a run that reached `Failed`.
///
/// Templates committed before the failure stay on disk and are listed here.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct GenerationFailure {
    /// State the run was in when it failed.
    pub state: GenerationState,
    pub error: GenerationError,
    pub committed: Vec<CommittedTemplate>,
}

impl GenerationFailure {
    pub fn new(state: GenerationState, error: GenerationError) -> Self {
        Self { state, error, committed: Vec::new() }
    }
}
