//! Builds the process-wide registry from every compiled-in variant

use crate::registry::{DuplicatePolicy, Registry, RegistryError};
use crate::views;
use tracing::{debug, info};

/// Registers every base and generated variant into a fresh registry.
///
/// Fails on the first registration error; a half-populated gallery is not
/// handed to callers.
pub fn load_registry(policy: DuplicatePolicy) -> Result<Registry, RegistryError> {
    let mut registry = Registry::with_policy(policy);
    for def in views::builtin_variants() {
        registry.register_def(def)?;
    }

    info!(variants = registry.len(), ?policy, "Variant registry loaded");
    for category in crate::registry::Category::all() {
        match registry.default_for(*category) {
            Some(entry) => debug!(
                category = %category,
                default = entry.metadata.id,
                "Category default"
            ),
            None => debug!(category = %category, "No stable variant for category"),
        }
    }
    Ok(registry)
}
