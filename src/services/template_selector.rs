//! Maps active variants to the ordered list of templates to render.

use crate::domain::config::{ClusterConfig, Variant};
use crate::domain::{DeploymentType, TemplateRef};

/// Templates for `config` under `deployment`, in render order.
///
/// The base template comes first, then master discovery, then the storage
/// backend. Later templates may rely on files the earlier ones produce.
/// An unrecognized variant contributes no template. Strict validation rejects
/// such configurations before selection runs.
pub fn select_templates(config: &ClusterConfig, deployment: DeploymentType) -> Vec<TemplateRef> {
    let mut templates = vec![TemplateRef::base(deployment)];
    push_variant(&mut templates, deployment, &config.master_discovery);
    push_variant(&mut templates, deployment, &config.storage_backend);
    templates
}

fn push_variant<V: Variant>(
    templates: &mut Vec<TemplateRef>,
    deployment: DeploymentType,
    variant: &V,
) {
    if let Some(segment) = variant.template_segment() {
        templates.push(TemplateRef::subsystem(deployment, V::SUBSYSTEM, segment));
    }
}
