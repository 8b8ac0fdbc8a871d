use super::{RequiredField, Subsystem, Variant};

/// Where exhibitor keeps the coordination-service shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Zookeeper { hosts: Vec<String>, path: String },
    AwsS3(AwsS3Settings),
    SharedFilesystem { config_path: String },
    /// Tag outside the known set.
    Unrecognized(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsS3Settings {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub bucket: String,
    pub prefix: String,
}

impl Variant for StorageBackend {
    const SUBSYSTEM: Subsystem = Subsystem::StorageBackend;
    const KNOWN_TAGS: &'static [&'static str] = &["zookeeper", "aws_s3", "shared_filesystem"];

    fn tag(&self) -> &str {
        match self {
            StorageBackend::Zookeeper { .. } => "zookeeper",
            StorageBackend::AwsS3(_) => "aws_s3",
            StorageBackend::SharedFilesystem { .. } => "shared_filesystem",
            StorageBackend::Unrecognized(tag) => tag,
        }
    }

    fn is_recognized(&self) -> bool {
        !matches!(self, StorageBackend::Unrecognized(_))
    }

    fn required_fields(&self) -> Vec<RequiredField<'_>> {
        match self {
            StorageBackend::Zookeeper { hosts, path } => vec![
                RequiredField::list("exhibitor_zk_hosts", hosts),
                RequiredField::text("exhibitor_zk_path", path),
            ],
            StorageBackend::AwsS3(s3) => vec![
                RequiredField::text("aws_access_key_id", &s3.access_key_id),
                RequiredField::text("aws_region", &s3.region),
                RequiredField::text("aws_secret_access_key", &s3.secret_access_key),
                RequiredField::text("s3_bucket", &s3.bucket),
                RequiredField::text("s3_prefix", &s3.prefix),
            ],
            StorageBackend::SharedFilesystem { config_path } => {
                vec![RequiredField::text("exhibitor_fs_config_path", config_path)]
            }
            StorageBackend::Unrecognized(_) => Vec::new(),
        }
    }

    fn template_segment(&self) -> Option<&'static str> {
        match self {
            StorageBackend::Zookeeper { .. } => Some("zookeeper"),
            StorageBackend::AwsS3(_) => Some("aws_s3"),
            // The shared filesystem templates predate the tag and live under `filesystem/`.
            StorageBackend::SharedFilesystem { .. } => Some("filesystem"),
            StorageBackend::Unrecognized(_) => None,
        }
    }
}
