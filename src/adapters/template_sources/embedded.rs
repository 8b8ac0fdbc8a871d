use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::{GenerationError, TemplateRef};
use crate::ports::TemplateSource;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Templates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateSource;

impl EmbeddedTemplateSource {
    pub fn new() -> Self {
        Self
    }

    /// Every embedded template path, sorted.
    pub fn template_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_paths(&TEMPLATES_DIR, &mut paths);
        paths.sort();
        paths
    }
}

impl TemplateSource for EmbeddedTemplateSource {
    fn load(&self, template: &TemplateRef) -> Result<String, GenerationError> {
        let path = template.path();
        let file = TEMPLATES_DIR.get_file(&path).ok_or_else(|| {
            GenerationError::TemplateResolution {
                template: path.clone(),
                reason: "no embedded template at this path".to_string(),
            }
        })?;

        file.contents_utf8().map(str::to_string).ok_or_else(|| {
            GenerationError::TemplateResolution { template: path, reason: "not UTF-8".to_string() }
        })
    }

    fn describe(&self) -> String {
        "embedded templates".to_string()
    }
}

fn collect_paths(dir: &'static Dir, paths: &mut Vec<String>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => paths.push(file.path().to_string_lossy().replace('\\', "/")),
            DirEntry::Dir(subdir) => collect_paths(subdir, paths),
        }
    }
}
