//! satlens - view variant registry and generator for an SAT practice gallery
//!
//! The gallery shows the same practice data through many visual themes. Each
//! theme is a *variant*: a [`views::Renderable`] plus [`registry::VariantMetadata`]
//! (id, name, category, tags). Variants are collected into a
//! [`registry::Registry`] at startup by [`bootstrap::load_registry`].
//!
//! New variants are stamped out offline by the [`generator`], which clones a
//! base component's source, writes a registration stub next to it and lists
//! the new module in the aggregation file so the next build picks it up.
//!
//! # Example
//!
//! ```no_run
//! use satlens::bootstrap::load_registry;
//! use satlens::registry::{Category, DuplicatePolicy, ListFilter};
//!
//! let registry = load_registry(DuplicatePolicy::Reject)?;
//! for entry in registry.list(&ListFilter::category(Category::Question)) {
//!     println!("{}: {}", entry.metadata.id, entry.metadata.name);
//! }
//! # Ok::<(), satlens::registry::RegistryError>(())
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod fs;
pub mod generator;
pub mod progress;
pub mod registry;
pub mod util;
pub mod views;

pub use config::{ConfigError, SatlensConfig};
pub use generator::{GenerateError, GenerateReport, GeneratedVariantSpec, Generator};
pub use registry::{Category, Registry, RegistryError, VariantMetadata};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
