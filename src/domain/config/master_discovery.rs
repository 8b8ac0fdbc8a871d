use super::{RequiredField, Subsystem, Variant};

/// Master discovery strategy and the fields each strategy needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MasterDiscovery {
    /// Fixed, ordered list of master addresses.
    Static { master_list: Vec<String> },
    /// Masters share a VRRP virtual address.
    Keepalived(KeepalivedSettings),
    /// Masters register themselves; only the expected count is known.
    CloudDynamic { num_masters: String },
    /// Tag outside the known set.
    Unrecognized(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepalivedSettings {
    pub router_id: String,
    pub interface: String,
    pub pass: String,
    pub virtual_ipaddress: String,
}

impl MasterDiscovery {
    /// Expected number of masters, when the variant determines one.
    pub fn master_count(&self) -> Option<usize> {
        match self {
            MasterDiscovery::Static { master_list } => Some(master_list.len()),
            MasterDiscovery::CloudDynamic { num_masters } => num_masters.trim().parse().ok(),
            MasterDiscovery::Keepalived(_) | MasterDiscovery::Unrecognized(_) => None,
        }
    }
}

impl Variant for MasterDiscovery {
    const SUBSYSTEM: Subsystem = Subsystem::MasterDiscovery;
    const KNOWN_TAGS: &'static [&'static str] = &["static", "keepalived", "cloud-dynamic"];

    fn tag(&self) -> &str {
        match self {
            MasterDiscovery::Static { .. } => "static",
            MasterDiscovery::Keepalived(_) => "keepalived",
            MasterDiscovery::CloudDynamic { .. } => "cloud-dynamic",
            MasterDiscovery::Unrecognized(tag) => tag,
        }
    }

    fn is_recognized(&self) -> bool {
        !matches!(self, MasterDiscovery::Unrecognized(_))
    }

    fn required_fields(&self) -> Vec<RequiredField<'_>> {
        match self {
            MasterDiscovery::Static { master_list } => {
                vec![RequiredField::list("master_list", master_list)]
            }
            MasterDiscovery::Keepalived(k) => vec![
                RequiredField::text("keepalived_router_id", &k.router_id),
                RequiredField::text("keepalived_interface", &k.interface),
                RequiredField::text("keepalived_pass", &k.pass),
                RequiredField::text("keepalived_virtual_ipaddress", &k.virtual_ipaddress),
            ],
            MasterDiscovery::CloudDynamic { num_masters } => {
                vec![RequiredField::text("num_masters", num_masters)]
            }
            MasterDiscovery::Unrecognized(_) => Vec::new(),
        }
    }

    fn template_segment(&self) -> Option<&'static str> {
        match self {
            MasterDiscovery::Static { .. } => Some("static"),
            MasterDiscovery::Keepalived(_) => Some("keepalived"),
            MasterDiscovery::CloudDynamic { .. } => Some("cloud-dynamic"),
            MasterDiscovery::Unrecognized(_) => None,
        }
    }
}
