//! Field-presence checks for the active variant of each subsystem.

use crate::domain::config::{ClusterConfig, Variant, VariantPolicy};
use crate::domain::GenerationError;

/// Check that every field the active variants require is present.
///
/// Master discovery is checked before the storage backend. Only the first unmet
/// requirement is reported.
pub fn validate(config: &ClusterConfig, policy: VariantPolicy) -> Result<(), GenerationError> {
    check_variant(&config.master_discovery, policy)?;
    check_variant(&config.storage_backend, policy)?;
    Ok(())
}

fn check_variant<V: Variant>(variant: &V, policy: VariantPolicy) -> Result<(), GenerationError> {
    if !variant.is_recognized() {
        return match policy {
            VariantPolicy::Permissive => Ok(()),
            VariantPolicy::Strict => Err(GenerationError::UnknownVariant {
                subsystem: V::SUBSYSTEM,
                tag: variant.tag().to_string(),
                expected: V::KNOWN_TAGS.join(", "),
            }),
        };
    }

    match variant.required_fields().into_iter().find(|field| field.value.is_missing()) {
        Some(field) => Err(GenerationError::MissingRequiredField {
            field: field.name,
            subsystem: V::SUBSYSTEM,
            variant: variant.tag().to_string(),
        }),
        None => Ok(()),
    }
}
