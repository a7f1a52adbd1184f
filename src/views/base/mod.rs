//! Hand-written view variants
//!
//! These are the templates `satlens generate` clones from. Each file keeps the
//! same shape: `CATEGORY`, `TITLE` and `VIEW_ID` constants, one exported unit
//! struct, and `crate::`-rooted imports so the file still compiles after it is
//! copied elsewhere in the tree.

pub mod accuracy_heatmap;
pub mod bookshelf;
pub mod constellation;
pub mod knowledge_tree;
pub mod study_timeline;

use crate::registry::VariantDef;

pub static BOOKSHELF: VariantDef = VariantDef {
    id: bookshelf::VIEW_ID,
    name: "Bookshelf",
    description: "Practice sets as books on subject shelves, sized by question count.",
    category: bookshelf::CATEGORY,
    tags: &["books", "sets", "progress"],
    experimental: false,
    renderable: &bookshelf::BookshelfView,
};

pub static ACCURACY_HEATMAP: VariantDef = VariantDef {
    id: accuracy_heatmap::VIEW_ID,
    name: "Accuracy Heatmap",
    description: "Sets against topics, each cell shaded by accuracy.",
    category: accuracy_heatmap::CATEGORY,
    tags: &["heatmap", "accuracy", "grid"],
    experimental: false,
    renderable: &accuracy_heatmap::AccuracyHeatmapView,
};

pub static KNOWLEDGE_TREE: VariantDef = VariantDef {
    id: knowledge_tree::VIEW_ID,
    name: "Knowledge Tree View",
    description: "Questions branch out by subject and topic, leaves coloured by result.",
    category: knowledge_tree::CATEGORY,
    tags: &["tree", "topics", "hierarchy"],
    experimental: false,
    renderable: &knowledge_tree::KnowledgeTreeView,
};

pub static CONSTELLATION: VariantDef = VariantDef {
    id: constellation::VIEW_ID,
    name: "Constellation",
    description: "Topics as star clusters, brightness by difficulty.",
    category: constellation::CATEGORY,
    tags: &["space", "stars", "topics"],
    experimental: true,
    renderable: &constellation::ConstellationView,
};

pub static STUDY_TIMELINE: VariantDef = VariantDef {
    id: study_timeline::VIEW_ID,
    name: "Study Timeline",
    description: "Practice sessions in date order with their scores.",
    category: study_timeline::CATEGORY,
    tags: &["timeline", "history"],
    experimental: false,
    renderable: &study_timeline::StudyTimelineView,
};

pub static DEFS: &[&VariantDef] = &[
    &BOOKSHELF,
    &ACCURACY_HEATMAP,
    &KNOWLEDGE_TREE,
    &CONSTELLATION,
    &STUDY_TIMELINE,
];
