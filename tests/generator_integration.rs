//! Generator runs against a real directory tree

use satlens::fs::RealFileSystem;
use satlens::generator::{
    default_specs, AggregationFile, AggregationStatus, GenerateError, GeneratedVariantSpec,
    Generator, ViewsLayout,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

fn crate_views() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src/views")
}

/// Copies the shipped base components and an empty aggregation file into a temp views dir
fn create_views_dir(dir: &TempDir) -> PathBuf {
    let views = dir.path().join("views");
    fs::create_dir_all(views.join("base")).expect("Failed to create base dir");
    fs::create_dir_all(views.join("generated")).expect("Failed to create generated dir");

    for entry in fs::read_dir(crate_views().join("base")).expect("Failed to read base dir") {
        let entry = entry.expect("Failed to read entry");
        fs::copy(entry.path(), views.join("base").join(entry.file_name()))
            .expect("Failed to copy base component");
    }

    let aggregation = "\
use crate::registry::VariantDef;

macro_rules! generated_variants {
    ($($module:ident,)*) => {
        $(pub mod $module;)*

        pub static DEFS: &[&VariantDef] = &[$(&$module::VARIANT),*];
    };
}

generated_variants! {
    // @satlens:end-variants
}
";
    fs::write(views.join("generated/mod.rs"), aggregation).expect("Failed to write aggregation");
    views
}

fn generator(views: &Path) -> Generator {
    Generator::new(Arc::new(RealFileSystem), ViewsLayout::new(views))
}

fn entries(views: &Path) -> Vec<String> {
    let content = fs::read_to_string(views.join("generated/mod.rs")).unwrap();
    AggregationFile::parse(&content)
        .unwrap()
        .entries()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_batch() {
    let dir = TempDir::new().unwrap();
    let views = create_views_dir(&dir);

    let report = generator(&views).run(&default_specs());

    assert!(report.is_success(), "{:#?}", report);
    assert_eq!(report.succeeded(), default_specs().len());
    assert_eq!(
        entries(&views),
        default_specs()
            .iter()
            .map(|s| format!("variant_{}", s.id))
            .collect::<Vec<_>>()
    );
    for spec in default_specs() {
        let component =
            fs::read_to_string(views.join(format!("generated/variant_{}/component.rs", spec.id)))
                .unwrap();
        assert!(component.contains(&format!("pub struct {};", spec.export)));
        assert!(!component.contains(&spec.base), "variant {} still names its base", spec.id);
    }
}

#[test]
fn test_output_matches_shipped_variants() {
    let dir = TempDir::new().unwrap();
    let views = create_views_dir(&dir);

    let specs: Vec<GeneratedVariantSpec> = default_specs()
        .into_iter()
        .filter(|s| s.id == 101 || s.id == 102)
        .collect();
    generator(&views).run(&specs);

    for id in [101, 102] {
        for file in ["component.rs", "mod.rs"] {
            let relative = format!("generated/variant_{}/{}", id, file);
            let generated = fs::read_to_string(views.join(&relative)).unwrap();
            let shipped = fs::read_to_string(crate_views().join(&relative)).unwrap();
            assert_eq!(generated, shipped, "{} drifted from generator output", relative);
        }
    }
}

#[test]
fn test_rerun_adds_no_duplicates() {
    let dir = TempDir::new().unwrap();
    let views = create_views_dir(&dir);

    generator(&views).run(&default_specs());
    let before = fs::read_to_string(views.join("generated/mod.rs")).unwrap();

    let report = generator(&views).run(&default_specs());
    assert!(matches!(report.aggregation, AggregationStatus::Unchanged));
    assert_eq!(fs::read_to_string(views.join("generated/mod.rs")).unwrap(), before);
}

#[test]
fn test_unknown_base_is_skipped() {
    let dir = TempDir::new().unwrap();
    let views = create_views_dir(&dir);

    let specs = vec![
        GeneratedVariantSpec::new(201, "Pyramid", "PyramidView", "PyramidBaseView"),
        GeneratedVariantSpec::new(202, "Reef", "ReefView", "ConstellationView"),
    ];
    let report = generator(&views).run(&specs);

    assert_eq!(report.succeeded(), 1);
    match report.outcomes[0].error() {
        Some(GenerateError::BaseComponentNotFound {
            name, available, ..
        }) => {
            assert_eq!(name, "PyramidBaseView");
            assert!(available.contains(&"KnowledgeTreeView".to_string()));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(!views.join("generated/variant_201").exists());
    assert_eq!(entries(&views), vec!["variant_202"]);
}

#[test]
fn test_base_view_id_cannot_be_reused() {
    let dir = TempDir::new().unwrap();
    let views = create_views_dir(&dir);

    let specs = vec![GeneratedVariantSpec::new(
        3,
        "Shadow Tree",
        "ShadowTreeView",
        "KnowledgeTreeView",
    )];
    let report = generator(&views).run(&specs);

    assert!(matches!(
        report.outcomes[0].error(),
        Some(GenerateError::IdInUse { id: 3, owner }) if owner == "KnowledgeTreeView"
    ));
    assert!(matches!(report.aggregation, AggregationStatus::Unchanged));
    assert!(!views.join("generated/variant_3").exists());
    assert!(entries(&views).is_empty());
}
