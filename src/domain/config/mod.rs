//! Cluster configuration model.

mod cluster_config;
mod master_discovery;
mod raw;
mod storage_backend;

use std::fmt;

pub use cluster_config::{ClusterConfig, ClusterIdentity, GenerationPaths, Tunables};
pub use master_discovery::{KeepalivedSettings, MasterDiscovery};
pub use raw::RawClusterConfig;
pub use storage_backend::{AwsS3Settings, StorageBackend};

/// Pluggable subsystem selected by a variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    MasterDiscovery,
    StorageBackend,
}

impl Subsystem {
    /// Configuration key holding the variant tag.
    pub fn config_key(self) -> &'static str {
        match self {
            Subsystem::MasterDiscovery => "master_discovery",
            Subsystem::StorageBackend => "exhibitor_storage_backend",
        }
    }

    /// Directory segment used in template paths.
    pub fn template_dir(self) -> &'static str {
        match self {
            Subsystem::MasterDiscovery => "master-discovery",
            Subsystem::StorageBackend => "exhibitor-storage-backend",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// How variant tags outside the known set are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariantPolicy {
    /// Reject unknown tags during validation.
    #[default]
    Strict,
    /// Treat the subsystem as unconfigured: nothing checked, nothing selected.
    Permissive,
}

/// Value of a field demanded by the active variant.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl FieldValue<'_> {
    /// Empty strings and sequences with no elements count as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            FieldValue::Text(value) => value.is_empty(),
            FieldValue::List(values) => values.is_empty(),
        }
    }
}

/// A field the active variant requires, in check order.
#[derive(Debug, Clone, Copy)]
pub struct RequiredField<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> RequiredField<'a> {
    pub(crate) fn text(name: &'static str, value: &'a str) -> Self {
        Self { name, value: FieldValue::Text(value) }
    }

    pub(crate) fn list(name: &'static str, value: &'a [String]) -> Self {
        Self { name, value: FieldValue::List(value) }
    }
}

/// Shared surface of the per-subsystem variant enums.
pub trait Variant {
    const SUBSYSTEM: Subsystem;
    const KNOWN_TAGS: &'static [&'static str];

    /// Tag as written in the configuration.
    fn tag(&self) -> &str;

    /// `false` for tags outside `KNOWN_TAGS`.
    fn is_recognized(&self) -> bool;

    /// Required fields of the active variant in check order. Empty when unrecognized.
    fn required_fields(&self) -> Vec<RequiredField<'_>>;

    /// Directory segment of the variant's template, `None` when unrecognized.
    fn template_segment(&self) -> Option<&'static str>;
}
