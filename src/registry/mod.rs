//! Variant registry
//!
//! Maps numeric variant ids to their metadata and renderable. Consumers only
//! need [`Registry::get`], [`Registry::list`] and [`Registry::default_for`].

mod catalog;
mod error;
mod metadata;

pub use catalog::{DuplicatePolicy, ListFilter, Registry, RegistryEntry, Variants};
pub use error::RegistryError;
pub use metadata::{Category, VariantDef, VariantMetadata};
