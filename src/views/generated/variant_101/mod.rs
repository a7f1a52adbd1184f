// Generated by `satlens generate` from ConstellationView. Re-running the generator overwrites this file.
//! Galaxy Map (variant 101).

mod component;

pub use component::GalaxyMapView;

use crate::registry::VariantDef;

pub static VARIANT: VariantDef = VariantDef {
    id: 101,
    name: "Galaxy Map",
    description: "Topics drawn as galaxies, each question a star in orbit.",
    category: component::CATEGORY,
    tags: &["space", "galaxy", "topics"],
    experimental: false,
    renderable: &GalaxyMapView,
};
