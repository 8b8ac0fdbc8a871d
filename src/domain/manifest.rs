//! `write_files` manifest produced by rendering a template.

use std::io;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::domain::scalar::scalar_string;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub write_files: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    #[serde(deserialize_with = "scalar_string")]
    pub path: String,
    /// Literal file content. Scalars keep their rendered spelling.
    #[serde(default, deserialize_with = "scalar_string")]
    pub content: String,
}

impl Manifest {
    /// Parse rendered template output.
    ///
    /// A document with no content (blank, or comments only) is an empty manifest.
    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        if value.is_null() {
            return Ok(Manifest::default());
        }
        // Typed fields read from the text so numeric scalars keep their spelling.
        serde_yaml::from_str(text)
    }
}

impl ManifestEntry {
    /// Path relative to the output root.
    ///
    /// A leading `/` is dropped so that absolute target paths land under the
    /// root. Parent, root and prefix components left after that are rejected.
    pub fn relative_path(&self) -> io::Result<PathBuf> {
        let trimmed = self.path.trim_start_matches('/');
        if trimmed.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty manifest path"));
        }

        let mut relative = PathBuf::new();
        for component in Path::new(trimmed).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("path escapes the output root: {}", self.path),
                    ));
                }
            }
        }

        if relative.as_os_str().is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty manifest path"));
        }
        Ok(relative)
    }
}
