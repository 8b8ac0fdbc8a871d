use std::path::PathBuf;

use super::{MasterDiscovery, StorageBackend};

/// Fully resolved installer configuration for one generation run.
///
/// Built once by the loader and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterConfig {
    pub identity: ClusterIdentity,
    pub master_discovery: MasterDiscovery,
    pub storage_backend: StorageBackend,
    pub tunables: Tunables,
    pub paths: GenerationPaths,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterIdentity {
    pub cluster_name: String,
    pub bootstrap_url: String,
    /// Sourced from `DCOS_BOOTSTRAP_ID`.
    pub bootstrap_id: String,
    /// Sourced from `DCOS_CHANNEL_NAME`.
    pub channel_name: String,
}

/// Directories derived from the environment at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPaths {
    /// Root that every manifest entry is written under.
    pub output_dir: PathBuf,
    pub work_dir: PathBuf,
}

/// Settings with defaults applied when the key is absent from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tunables {
    pub gc_delay: String,
    pub docker_remove_delay: String,
    pub resolvers: Vec<String>,
    pub dns_search: String,
    pub roles: String,
    pub weights: String,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            gc_delay: default_gc_delay(),
            docker_remove_delay: default_docker_remove_delay(),
            resolvers: default_resolvers(),
            dns_search: String::new(),
            roles: default_roles(),
            weights: default_weights(),
        }
    }
}

pub(super) fn default_gc_delay() -> String {
    "2days".to_string()
}

pub(super) fn default_docker_remove_delay() -> String {
    "1hrs".to_string()
}

pub(super) fn default_resolvers() -> Vec<String> {
    vec!["8.8.8.8".to_string()]
}

pub(super) fn default_roles() -> String {
    "slave_public".to_string()
}

pub(super) fn default_weights() -> String {
    "slave_public=1".to_string()
}
