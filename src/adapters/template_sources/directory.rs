use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{GenerationError, TemplateRef};
use crate::ports::TemplateSource;

/// Templates read from a directory tree laid out as `<deployment>/<subsystem>/<variant>/config.yaml`.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateSource {
    root: PathBuf,
}

impl DirectoryTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve_path(&self, template: &TemplateRef) -> PathBuf {
        template.path().split('/').fold(self.root.clone(), |path, part| path.join(part))
    }
}

impl TemplateSource for DirectoryTemplateSource {
    fn load(&self, template: &TemplateRef) -> Result<String, GenerationError> {
        let path = self.resolve_path(template);
        fs::read_to_string(&path).map_err(|err| GenerationError::TemplateResolution {
            template: path.display().to_string(),
            reason: match err.kind() {
                io::ErrorKind::NotFound => "file does not exist".to_string(),
                _ => err.to_string(),
            },
        })
    }

    fn describe(&self) -> String {
        format!("templates in {}", self.root.display())
    }
}
