//! Substitution context handed to the template renderer.

use serde::Serialize;

use crate::domain::config::{ClusterConfig, MasterDiscovery, StorageBackend, Variant};

/// Flat view of a [`ClusterConfig`] keyed by configuration tag names.
///
/// Variant-specific keys are only present while their variant is active, so a
/// template that references another variant's field fails to render.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext<'a> {
    pub cluster_name: &'a str,
    pub bootstrap_url: &'a str,
    pub bootstrap_id: &'a str,
    pub channel_name: &'a str,
    pub output_dir: String,
    pub work_dir: String,

    pub gc_delay: &'a str,
    pub docker_remove_delay: &'a str,
    pub resolvers: &'a [String],
    pub dns_search: &'a str,
    pub roles: &'a str,
    pub weights: &'a str,
    pub resolvers_str: String,
    pub mesos_dns_resolvers_str: String,
    pub dcos_gen_resolvconf_search_str: String,

    pub master_discovery: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_list: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_masters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_quorum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalived_router_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalived_interface: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalived_pass: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalived_virtual_ipaddress: Option<&'a str>,

    pub exhibitor_storage_backend: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhibitor_zk_hosts: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhibitor_zk_hosts_str: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhibitor_zk_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_access_key_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_secret_access_key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhibitor_fs_config_path: Option<&'a str>,
}

impl<'a> TemplateContext<'a> {
    pub fn from_config(config: &'a ClusterConfig) -> Self {
        let tunables = &config.tunables;
        let mut context = TemplateContext {
            cluster_name: &config.identity.cluster_name,
            bootstrap_url: &config.identity.bootstrap_url,
            bootstrap_id: &config.identity.bootstrap_id,
            channel_name: &config.identity.channel_name,
            output_dir: config.paths.output_dir.display().to_string(),
            work_dir: config.paths.work_dir.display().to_string(),
            gc_delay: &tunables.gc_delay,
            docker_remove_delay: &tunables.docker_remove_delay,
            resolvers: &tunables.resolvers,
            dns_search: &tunables.dns_search,
            roles: &tunables.roles,
            weights: &tunables.weights,
            resolvers_str: tunables.resolvers.join(","),
            mesos_dns_resolvers_str: mesos_dns_resolvers(&tunables.resolvers),
            dcos_gen_resolvconf_search_str: resolvconf_search(&tunables.dns_search),
            master_discovery: config.master_discovery.tag(),
            master_list: None,
            num_masters: None,
            master_quorum: None,
            keepalived_router_id: None,
            keepalived_interface: None,
            keepalived_pass: None,
            keepalived_virtual_ipaddress: None,
            exhibitor_storage_backend: config.storage_backend.tag(),
            exhibitor_zk_hosts: None,
            exhibitor_zk_hosts_str: None,
            exhibitor_zk_path: None,
            aws_access_key_id: None,
            aws_secret_access_key: None,
            aws_region: None,
            s3_bucket: None,
            s3_prefix: None,
            exhibitor_fs_config_path: None,
        };

        match &config.master_discovery {
            MasterDiscovery::Static { master_list } => {
                context.master_list = Some(master_list);
                context.num_masters = Some(master_list.len().to_string());
            }
            MasterDiscovery::Keepalived(k) => {
                context.keepalived_router_id = Some(&k.router_id);
                context.keepalived_interface = Some(&k.interface);
                context.keepalived_pass = Some(&k.pass);
                context.keepalived_virtual_ipaddress = Some(&k.virtual_ipaddress);
            }
            MasterDiscovery::CloudDynamic { num_masters } => {
                context.num_masters = Some(num_masters.trim().to_string());
            }
            MasterDiscovery::Unrecognized(_) => {}
        }
        context.master_quorum =
            config.master_discovery.master_count().map(|n| (n / 2 + 1).to_string());

        match &config.storage_backend {
            StorageBackend::Zookeeper { hosts, path } => {
                context.exhibitor_zk_hosts = Some(hosts);
                context.exhibitor_zk_hosts_str = Some(hosts.join(","));
                context.exhibitor_zk_path = Some(path);
            }
            StorageBackend::AwsS3(s3) => {
                context.aws_access_key_id = Some(&s3.access_key_id);
                context.aws_secret_access_key = Some(&s3.secret_access_key);
                context.aws_region = Some(&s3.region);
                context.s3_bucket = Some(&s3.bucket);
                context.s3_prefix = Some(&s3.prefix);
            }
            StorageBackend::SharedFilesystem { config_path } => {
                context.exhibitor_fs_config_path = Some(config_path);
            }
            StorageBackend::Unrecognized(_) => {}
        }

        context
    }
}

/// Mesos-DNS needs `externalOn: false` rather than an empty resolver list.
fn mesos_dns_resolvers(resolvers: &[String]) -> String {
    if resolvers.is_empty() {
        return "\"externalOn\": false".to_string();
    }
    format!("\"resolvers\": {}", serde_json::Value::from(resolvers.to_vec()))
}

fn resolvconf_search(dns_search: &str) -> String {
    if dns_search.is_empty() { String::new() } else { format!("SEARCH={}", dns_search) }
}
