//! Value checks for fields that are present but may be unusable.
//!
//! Runs after dependency validation, so variant fields are known to be non-empty.

use crate::domain::config::{ClusterConfig, MasterDiscovery, StorageBackend};
use crate::domain::GenerationError;

const VALID_MASTER_COUNTS: [u32; 5] = [1, 3, 5, 7, 9];
const MAX_DNS_SEARCH_LEN: usize = 256;
const MAX_DNS_SEARCH_DOMAINS: usize = 6;

/// Check parameter values, stopping at the first invalid one.
pub fn check_parameters(config: &ClusterConfig) -> Result<(), GenerationError> {
    check_bootstrap_url(&config.identity.bootstrap_url)?;
    check_channel_name(&config.identity.channel_name)?;

    if let MasterDiscovery::CloudDynamic { num_masters } = &config.master_discovery {
        check_num_masters(num_masters)?;
    }
    if let StorageBackend::Zookeeper { hosts, path } = &config.storage_backend {
        check_zookeeper(hosts, path)?;
    }

    check_dns_search(&config.tunables.dns_search)
}

fn invalid(field: &'static str, reason: impl Into<String>) -> GenerationError {
    GenerationError::InvalidParameter { field, reason: reason.into() }
}

fn check_bootstrap_url(url: &str) -> Result<(), GenerationError> {
    if url.chars().count() <= 1 {
        return Err(invalid("bootstrap_url", "must be more than one character"));
    }
    if url.ends_with('/') {
        return Err(invalid("bootstrap_url", "must not end in a '/'"));
    }
    Ok(())
}

fn check_channel_name(channel: &str) -> Result<(), GenerationError> {
    if channel.chars().count() <= 1 {
        return Err(invalid("channel_name", "must be more than one character"));
    }
    if channel.starts_with('/') {
        return Err(invalid("channel_name", "must not start with a '/'"));
    }
    if channel.ends_with('/') {
        return Err(invalid("channel_name", "must not end with a '/'"));
    }
    Ok(())
}

fn check_num_masters(num_masters: &str) -> Result<(), GenerationError> {
    match num_masters.trim().parse::<u32>() {
        Ok(count) if VALID_MASTER_COUNTS.contains(&count) => Ok(()),
        _ => Err(invalid(
            "num_masters",
            format!("must have 1, 3, 5, 7, or 9 masters, found '{}'", num_masters),
        )),
    }
}

fn check_zookeeper(hosts: &[String], path: &str) -> Result<(), GenerationError> {
    if let Some(host) = hosts.iter().find(|host| host.starts_with("zk://")) {
        return Err(invalid(
            "exhibitor_zk_hosts",
            format!("'{}' must be of the form host:port without a zk:// scheme", host),
        ));
    }
    if !path.starts_with('/') {
        return Err(invalid("exhibitor_zk_path", "must be of the form /path/to/znode"));
    }
    Ok(())
}

fn check_dns_search(dns_search: &str) -> Result<(), GenerationError> {
    if dns_search.contains('\n') {
        return Err(invalid("dns_search", "newlines are not allowed"));
    }
    if dns_search.contains(',') {
        return Err(invalid("dns_search", "commas are not allowed"));
    }
    if dns_search.chars().count() >= MAX_DNS_SEARCH_LEN {
        return Err(invalid("dns_search", "must be less than 256 characters long"));
    }
    if dns_search.split_whitespace().count() > MAX_DNS_SEARCH_DOMAINS {
        return Err(invalid("dns_search", "must contain no more than 6 domains"));
    }
    Ok(())
}
