//! Registry behaviour over the compiled-in variant set

use satlens::bootstrap::load_registry;
use satlens::registry::{Category, DuplicatePolicy, ListFilter, RegistryError, VariantMetadata};
use satlens::views::{builtin_variants, Renderable, ViewData};
use std::collections::HashSet;

#[test]
fn test_knowledge_tree_lookup() {
    let registry = load_registry(DuplicatePolicy::Reject).unwrap();

    let entry = registry.get(3).unwrap();
    assert_eq!(entry.metadata.name, "Knowledge Tree View");
    assert_eq!(entry.metadata.category, Category::Question);

    let again = registry.get(3).unwrap();
    assert_eq!(entry.metadata, again.metadata);

    assert_eq!(registry.get(999).unwrap_err(), RegistryError::NotFound(999));
}

#[test]
fn test_builtin_ids_are_unique() {
    let mut seen = HashSet::new();
    for def in builtin_variants() {
        assert!(seen.insert(def.id), "id {} declared twice", def.id);
    }
}

#[test]
fn test_category_filter_matches_every_entry() {
    let registry = load_registry(DuplicatePolicy::Reject).unwrap();
    for category in Category::all() {
        let filter = ListFilter::category(*category).with_experimental(true);
        let listed: Vec<_> = registry.list(&filter).collect();
        assert!(!listed.is_empty(), "no {} variants", category);
        assert!(listed.iter().all(|e| e.metadata.category == *category));
    }
}

#[test]
fn test_listing_is_ordered_and_restartable() {
    let registry = load_registry(DuplicatePolicy::Reject).unwrap();
    let variants = registry.list(&ListFilter::all());
    let first: Vec<u32> = variants.clone().map(|e| e.metadata.id).collect();
    let second: Vec<u32> = variants.map(|e| e.metadata.id).collect();

    assert_eq!(first, second);
    let mut sorted = first.clone();
    sorted.sort_unstable();
    assert_eq!(first, sorted);
}

#[test]
fn test_tag_filter() {
    let registry = load_registry(DuplicatePolicy::Reject).unwrap();
    let ids: Vec<u32> = registry
        .list(&ListFilter::all().with_tag("topics"))
        .map(|e| e.metadata.id)
        .collect();
    assert!(ids.contains(&3));
    assert!(ids.contains(&4));
    assert!(ids.contains(&102));
    assert!(!ids.contains(&1));
}

#[test]
fn test_default_for_skips_experimental() {
    let registry = load_registry(DuplicatePolicy::Reject).unwrap();
    let question = registry.default_for(Category::Question).unwrap();
    assert_eq!(question.metadata.id, 3);
    let timeline = registry.default_for(Category::Timeline).unwrap();
    assert_eq!(timeline.metadata.id, 5);
}

#[test]
fn test_generated_variant_renders_its_own_title() {
    let registry = load_registry(DuplicatePolicy::Reject).unwrap();
    let entry = registry.get(102).unwrap();
    let html = entry
        .renderable
        .render(&ViewData::Question { questions: vec![] })
        .unwrap()
        .into_string();
    assert!(html.contains("View 102: Subway Map"));
    assert!(html.contains("data-view-id=\"102\""));
}

#[test]
fn test_conflicting_registration_rejected_then_overwritten() {
    let base = load_registry(DuplicatePolicy::Reject).unwrap();
    let renderable: &'static dyn Renderable = base.get(3).unwrap().renderable;
    let impostor = VariantMetadata::new(3, "Impostor", Category::Question);

    let mut strict = load_registry(DuplicatePolicy::Reject).unwrap();
    assert!(matches!(
        strict.register(impostor.clone(), renderable),
        Err(RegistryError::DuplicateVariantId { id: 3, .. })
    ));
    assert_eq!(strict.get(3).unwrap().metadata.name, "Knowledge Tree View");

    let mut lenient = load_registry(DuplicatePolicy::Overwrite).unwrap();
    lenient.register(impostor, renderable).unwrap();
    assert_eq!(lenient.get(3).unwrap().metadata.name, "Impostor");
}
