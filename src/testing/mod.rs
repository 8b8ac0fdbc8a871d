//! Fixtures shared by unit tests.

use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::config::{
    ClusterConfig, ClusterIdentity, GenerationPaths, KeepalivedSettings, MasterDiscovery,
    StorageBackend, Tunables,
};
use crate::domain::{GenerationError, TemplateRef};
use crate::ports::TemplateSource;

/// Valid static/zookeeper configuration writing to `/tmp/dcos/serve`.
pub fn static_zookeeper_config() -> ClusterConfig {
    static_zookeeper_config_in(Path::new("/tmp/dcos/serve"))
}

/// Valid static/zookeeper configuration writing to `output_dir`.
pub fn static_zookeeper_config_in(output_dir: &Path) -> ClusterConfig {
    ClusterConfig {
        identity: ClusterIdentity {
            cluster_name: "prod-1".to_string(),
            bootstrap_url: "http://bootstrap.example".to_string(),
            bootstrap_id: "0123abcd".to_string(),
            channel_name: "testing/continuous".to_string(),
        },
        master_discovery: MasterDiscovery::Static {
            master_list: vec!["10.0.0.1".into(), "10.0.0.2".into(), "10.0.0.3".into()],
        },
        storage_backend: StorageBackend::Zookeeper {
            hosts: vec!["zk1:2181".into(), "zk2:2181".into()],
            path: "/exhibitor".into(),
        },
        tunables: Tunables::default(),
        paths: GenerationPaths {
            output_dir: output_dir.to_path_buf(),
            work_dir: output_dir.parent().map(Path::to_path_buf).unwrap_or_else(PathBuf::new),
        },
    }
}

/// Valid keepalived/zookeeper configuration.
pub fn keepalived_config() -> ClusterConfig {
    ClusterConfig {
        master_discovery: MasterDiscovery::Keepalived(KeepalivedSettings {
            router_id: "51".into(),
            interface: "eth0".into(),
            pass: "s3cret".into(),
            virtual_ipaddress: "10.0.0.100".into(),
        }),
        ..static_zookeeper_config()
    }
}

/// In-memory template source that counts resolutions.
#[derive(Debug, Default)]
pub struct MemoryTemplateSource {
    templates: HashMap<TemplateRef, String>,
    loads: Cell<usize>,
}

impl MemoryTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, template: TemplateRef, content: &str) -> Self {
        self.templates.insert(template, content.to_string());
        self
    }

    /// Number of `load` calls so far, successful or not.
    pub fn loads(&self) -> usize {
        self.loads.get()
    }
}

impl TemplateSource for MemoryTemplateSource {
    fn load(&self, template: &TemplateRef) -> Result<String, GenerationError> {
        self.loads.set(self.loads.get() + 1);
        self.templates.get(template).cloned().ok_or_else(|| GenerationError::TemplateResolution {
            template: template.path(),
            reason: "not registered".to_string(),
        })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
