//! Flat configuration document as written by operators.

use serde::Deserialize;

use super::cluster_config::{
    default_docker_remove_delay, default_gc_delay, default_resolvers, default_roles,
    default_weights,
};
use super::{
    AwsS3Settings, ClusterConfig, ClusterIdentity, GenerationPaths, KeepalivedSettings,
    MasterDiscovery, StorageBackend, Tunables,
};
use crate::domain::scalar::{scalar_string, string_list};

/// Configuration file contents before variant folding.
///
/// Every variant-specific key lives at the top level next to its tag. Keys that
/// belong to an inactive variant are accepted and dropped by [`into_config`].
/// Scalars keep the spelling they have in the file.
///
/// [`into_config`]: RawClusterConfig::into_config
#[derive(Debug, Clone, Deserialize)]
pub struct RawClusterConfig {
    #[serde(deserialize_with = "scalar_string")]
    pub cluster_name: String,
    #[serde(deserialize_with = "scalar_string")]
    pub bootstrap_url: String,

    #[serde(deserialize_with = "scalar_string")]
    pub master_discovery: String,
    #[serde(default, deserialize_with = "string_list")]
    pub master_list: Vec<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub num_masters: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub keepalived_router_id: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub keepalived_interface: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub keepalived_pass: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub keepalived_virtual_ipaddress: String,

    #[serde(deserialize_with = "scalar_string")]
    pub exhibitor_storage_backend: String,
    #[serde(default, deserialize_with = "string_list")]
    pub exhibitor_zk_hosts: Vec<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub exhibitor_zk_path: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub aws_access_key_id: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub aws_secret_access_key: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub aws_region: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub s3_bucket: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub s3_prefix: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub exhibitor_fs_config_path: String,

    // Defaults apply only when the key is absent.
    #[serde(default = "default_gc_delay", deserialize_with = "scalar_string")]
    pub gc_delay: String,
    #[serde(default = "default_docker_remove_delay", deserialize_with = "scalar_string")]
    pub docker_remove_delay: String,
    #[serde(default = "default_resolvers", deserialize_with = "string_list")]
    pub resolvers: Vec<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub dns_search: String,
    #[serde(default = "default_roles", deserialize_with = "scalar_string")]
    pub roles: String,
    #[serde(default = "default_weights", deserialize_with = "scalar_string")]
    pub weights: String,
}

impl RawClusterConfig {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Fold the flat document into typed variants and attach environment-sourced fields.
    pub fn into_config(
        self,
        bootstrap_id: String,
        channel_name: String,
        paths: GenerationPaths,
    ) -> ClusterConfig {
        let master_discovery = match self.master_discovery.as_str() {
            "static" => MasterDiscovery::Static { master_list: self.master_list },
            "keepalived" => MasterDiscovery::Keepalived(KeepalivedSettings {
                router_id: self.keepalived_router_id,
                interface: self.keepalived_interface,
                pass: self.keepalived_pass,
                virtual_ipaddress: self.keepalived_virtual_ipaddress,
            }),
            "cloud-dynamic" => MasterDiscovery::CloudDynamic { num_masters: self.num_masters },
            _ => MasterDiscovery::Unrecognized(self.master_discovery),
        };

        let storage_backend = match self.exhibitor_storage_backend.as_str() {
            "zookeeper" => StorageBackend::Zookeeper {
                hosts: self.exhibitor_zk_hosts,
                path: self.exhibitor_zk_path,
            },
            "aws_s3" => StorageBackend::AwsS3(AwsS3Settings {
                access_key_id: self.aws_access_key_id,
                secret_access_key: self.aws_secret_access_key,
                region: self.aws_region,
                bucket: self.s3_bucket,
                prefix: self.s3_prefix,
            }),
            "shared_filesystem" => {
                StorageBackend::SharedFilesystem { config_path: self.exhibitor_fs_config_path }
            }
            _ => StorageBackend::Unrecognized(self.exhibitor_storage_backend),
        };

        ClusterConfig {
            identity: ClusterIdentity {
                cluster_name: self.cluster_name,
                bootstrap_url: self.bootstrap_url,
                bootstrap_id,
                channel_name,
            },
            master_discovery,
            storage_backend,
            tunables: Tunables {
                gc_delay: self.gc_delay,
                docker_remove_delay: self.docker_remove_delay,
                resolvers: self.resolvers,
                dns_search: self.dns_search,
                roles: self.roles,
                weights: self.weights,
            },
            paths,
        }
    }
}
