//! Commits rendered manifests to the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{GenerationError, Manifest, TemplateRef};

/// Writes manifest entries under a single output root.
///
/// Writes are not transactional: entries committed before a failure stay on disk.
#[derive(Debug, Clone)]
pub struct ManifestWriter {
    root: PathBuf,
}

impl ManifestWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parse `rendered` as a manifest and write each entry in order.
    ///
    /// Returns the absolute path of every entry written, in manifest order. A
    /// later entry for the same path overwrites the earlier one.
    pub fn commit(
        &self,
        rendered: &str,
        template: &TemplateRef,
    ) -> Result<Vec<PathBuf>, GenerationError> {
        let manifest = Manifest::parse(rendered).map_err(|err| GenerationError::ManifestParse {
            template: template.path(),
            reason: err.to_string(),
        })?;

        let mut written = Vec::with_capacity(manifest.write_files.len());
        for entry in &manifest.write_files {
            let relative = entry
                .relative_path()
                .map_err(|source| GenerationError::Write { path: entry.path.clone(), source })?;
            let full_path = self.root.join(relative);

            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).map_err(|source| GenerationError::Write {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
            fs::write(&full_path, &entry.content).map_err(|source| GenerationError::Write {
                path: full_path.display().to_string(),
                source,
            })?;

            written.push(full_path);
        }

        Ok(written)
    }
}
