use std::fmt;
use std::str::FromStr;

use crate::domain::generation::GenerationError;

/// Target environment that gates which templates are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeploymentType {
    OnPrem,
}

impl DeploymentType {
    pub const ALL: [DeploymentType; 1] = [DeploymentType::OnPrem];

    /// Name used on the command line and as the template directory.
    pub fn label(self) -> &'static str {
        match self {
            DeploymentType::OnPrem => "onprem",
        }
    }

    pub fn supported_labels() -> String {
        Self::ALL.iter().map(|d| d.label()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeploymentType {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|d| d.label() == s).ok_or_else(|| {
            GenerationError::UnsupportedDeploymentType {
                requested: s.to_string(),
                supported: Self::supported_labels(),
            }
        })
    }
}
