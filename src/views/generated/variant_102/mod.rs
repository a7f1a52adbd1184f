// Generated by `satlens generate` from KnowledgeTreeView. Re-running the generator overwrites this file.
//! Subway Map (variant 102).

mod component;

pub use component::SubwayMapView;

use crate::registry::VariantDef;

pub static VARIANT: VariantDef = VariantDef {
    id: 102,
    name: "Subway Map",
    description: "Subjects as subway lines with a stop for every topic.",
    category: component::CATEGORY,
    tags: &["transit", "map", "topics"],
    experimental: false,
    renderable: &SubwayMapView,
};
