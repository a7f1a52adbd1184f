//! Registration stub written next to each generated component

use super::GeneratedVariantSpec;
use std::fmt::Write;

/// Source of `variant_<id>/mod.rs` for a spec
pub fn render_stub(spec: &GeneratedVariantSpec) -> String {
    let tags = spec
        .tag_list()
        .iter()
        .map(|t| format!("{:?}", t))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "// Generated by `satlens generate` from {}. Re-running the generator overwrites this file.",
        spec.base
    );
    let _ = writeln!(out, "//! {} (variant {}).", spec.name, spec.id);
    out.push('\n');
    out.push_str("mod component;\n\n");
    let _ = writeln!(out, "pub use component::{};", spec.export);
    out.push('\n');
    out.push_str("use crate::registry::VariantDef;\n\n");
    out.push_str("pub static VARIANT: VariantDef = VariantDef {\n");
    let _ = writeln!(out, "    id: {},", spec.id);
    let _ = writeln!(out, "    name: {:?},", spec.name);
    let _ = writeln!(out, "    description: {:?},", spec.description);
    out.push_str("    category: component::CATEGORY,\n");
    let _ = writeln!(out, "    tags: &[{}],", tags);
    out.push_str("    experimental: false,\n");
    let _ = writeln!(out, "    renderable: &{},", spec.export);
    out.push_str("};\n");
    out
}

/// Export a previously written stub registers
pub fn stub_export(stub: &str) -> Option<&str> {
    stub.lines()
        .find_map(|line| line.trim().strip_prefix("renderable: &"))
        .and_then(|rest| rest.strip_suffix(','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_layout() {
        let spec = GeneratedVariantSpec::new(102, "Subway Map", "SubwayMapView", "KnowledgeTreeView")
            .with_description("Subjects as subway lines.")
            .with_tags("transit, map");

        let expected = "\
// Generated by `satlens generate` from KnowledgeTreeView. Re-running the generator overwrites this file.
//! Subway Map (variant 102).

mod component;

pub use component::SubwayMapView;

use crate::registry::VariantDef;

pub static VARIANT: VariantDef = VariantDef {
    id: 102,
    name: \"Subway Map\",
    description: \"Subjects as subway lines.\",
    category: component::CATEGORY,
    tags: &[\"transit\", \"map\"],
    experimental: false,
    renderable: &SubwayMapView,
};
";
        assert_eq!(render_stub(&spec), expected);
        assert_eq!(stub_export(expected), Some("SubwayMapView"));
        assert_eq!(stub_export("pub mod component;\n"), None);
    }

    #[test]
    fn test_stub_escapes_strings_and_allows_no_tags() {
        let spec = GeneratedVariantSpec::new(7, "The \"Loop\"", "LoopView", "BookshelfView");
        let stub = render_stub(&spec);
        assert!(stub.contains(r#"name: "The \"Loop\"","#));
        assert!(stub.contains("tags: &[],"));
    }
}
