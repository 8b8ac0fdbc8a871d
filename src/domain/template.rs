use std::fmt;

use crate::domain::config::Subsystem;
use crate::domain::deployment::DeploymentType;

/// File name every template directory resolves to.
pub const TEMPLATE_FILE_NAME: &str = "config.yaml";

/// Logical identifier of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateRef {
    /// Deployment-wide template, always rendered first.
    Base { deployment: DeploymentType },
    /// Template contributed by the active variant of a subsystem.
    Subsystem { deployment: DeploymentType, subsystem: Subsystem, variant: &'static str },
}

impl TemplateRef {
    pub fn base(deployment: DeploymentType) -> Self {
        TemplateRef::Base { deployment }
    }

    pub fn subsystem(
        deployment: DeploymentType,
        subsystem: Subsystem,
        variant: &'static str,
    ) -> Self {
        TemplateRef::Subsystem { deployment, subsystem, variant }
    }

    pub fn deployment(&self) -> DeploymentType {
        match self {
            TemplateRef::Base { deployment } | TemplateRef::Subsystem { deployment, .. } => {
                *deployment
            }
        }
    }

    /// Directory of the template, relative to the template root.
    pub fn dir(&self) -> String {
        match self {
            TemplateRef::Base { deployment } => deployment.label().to_string(),
            TemplateRef::Subsystem { deployment, subsystem, variant } => {
                format!("{}/{}/{}", deployment.label(), subsystem.template_dir(), variant)
            }
        }
    }

    /// Path of the template file, relative to the template root, `/`-separated.
    pub fn path(&self) -> String {
        format!("{}/{}", self.dir(), TEMPLATE_FILE_NAME)
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
