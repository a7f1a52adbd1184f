//! Output formatting for JSON, YAML and human-readable text

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::generator::{AggregationStatus, GenerateReport, SpecStatus};
use crate::registry::VariantMetadata;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_variants(&self, variants: &[VariantMetadata]) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&variants, "variant list"),
            OutputFormat::Yaml => to_yaml(&variants, "variant list"),
            OutputFormat::Human => Ok(self.format_variants_human(variants)),
        }
    }

    pub fn format_variant(&self, variant: &VariantMetadata) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(variant, "variant"),
            OutputFormat::Yaml => to_yaml(variant, "variant"),
            OutputFormat::Human => Ok(self.format_variant_human(variant)),
        }
    }

    pub fn format_report(&self, report: &GenerateReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(report, "generation report"),
            OutputFormat::Yaml => to_yaml(report, "generation report"),
            OutputFormat::Human => Ok(self.format_report_human(report)),
        }
    }

    // Human-readable formatting methods

    fn format_variants_human(&self, variants: &[VariantMetadata]) -> String {
        if variants.is_empty() {
            return "No variants match.\n".to_string();
        }

        let name_width = variants.iter().map(|v| v.name.len()).max().unwrap_or(0);
        let mut out = String::new();
        for variant in variants {
            let _ = write!(
                out,
                "{:>5}  {:<width$}  {:<9}",
                variant.id,
                variant.name,
                variant.category.as_str(),
                width = name_width
            );
            if !variant.tags.is_empty() {
                let tags: Vec<&str> = variant.tags.iter().map(String::as_str).collect();
                let _ = write!(out, "  [{}]", tags.join(", "));
            }
            if variant.experimental {
                out.push_str("  (experimental)");
            }
            out.push('\n');
        }
        let _ = writeln!(out, "\n{} variant(s)", variants.len());
        out
    }

    fn format_variant_human(&self, variant: &VariantMetadata) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Variant {}: {}", variant.id, variant.name);
        let _ = writeln!(out, "{}", "=".repeat(50));
        let _ = writeln!(out, "Category:     {}", variant.category);
        if !variant.description.is_empty() {
            let _ = writeln!(out, "Description:  {}", variant.description);
        }
        if !variant.tags.is_empty() {
            let tags: Vec<&str> = variant.tags.iter().map(String::as_str).collect();
            let _ = writeln!(out, "Tags:         {}", tags.join(", "));
        }
        let _ = writeln!(
            out,
            "Status:       {}",
            if variant.experimental {
                "experimental"
            } else {
                "stable"
            }
        );
        out
    }

    fn format_report_human(&self, report: &GenerateReport) -> String {
        let mut out = String::new();
        if report.dry_run {
            out.push_str("Dry run: nothing was written\n\n");
        }

        for outcome in &report.outcomes {
            match &outcome.status {
                SpecStatus::Generated {
                    component,
                    warnings,
                    registered,
                    ..
                } => {
                    let _ = writeln!(
                        out,
                        "  ok    {:>5}  {}  -> {}",
                        outcome.id,
                        outcome.name,
                        component.display()
                    );
                    for warning in warnings {
                        let _ = writeln!(out, "        warning: {}", warning);
                    }
                    if !registered {
                        out.push_str("        not listed in the aggregation file\n");
                    }
                }
                SpecStatus::Failed { error } => {
                    let _ = writeln!(out, "  FAIL  {:>5}  {}: {}", outcome.id, outcome.name, error);
                }
            }
        }

        out.push('\n');
        match &report.aggregation {
            AggregationStatus::Patched { added } => {
                let noun = if *added == 1 { "entry" } else { "entries" };
                let _ = writeln!(out, "Aggregation file: {} new {}", added, noun);
            }
            AggregationStatus::Unchanged => out.push_str("Aggregation file: unchanged\n"),
            AggregationStatus::Failed { error } => {
                let _ = writeln!(out, "Aggregation file: FAILED ({})", error);
            }
        }
        let _ = writeln!(
            out,
            "{} generated, {} failed",
            report.succeeded(),
            report.failed()
        );
        out
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {} to JSON", what))
}

fn to_yaml<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    serde_yaml::to_string(value).with_context(|| format!("Failed to serialize {} to YAML", what))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GenerateError, SpecOutcome};
    use crate::registry::Category;
    use std::path::PathBuf;

    fn variants() -> Vec<VariantMetadata> {
        vec![
            VariantMetadata::new(3, "Knowledge Tree View", Category::Question)
                .with_description("Questions branch out by subject and topic.")
                .with_tags(["tree", "topics"]),
            VariantMetadata::new(4, "Constellation", Category::Question).experimental(true),
        ]
    }

    #[test]
    fn test_variants_json() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format_variants(&variants()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], 3);
        assert_eq!(parsed[0]["category"], "question");
        assert_eq!(parsed[1]["experimental"], true);
    }

    #[test]
    fn test_variant_yaml() {
        let formatter = OutputFormatter::new(OutputFormat::Yaml);
        let output = formatter.format_variant(&variants()[0]).unwrap();
        assert!(output.contains("name: Knowledge Tree View"));
        assert!(output.contains("category: question"));
    }

    #[test]
    fn test_variants_human() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let output = formatter.format_variants(&variants()).unwrap();
        assert!(output.contains("Knowledge Tree View"));
        assert!(output.contains("[topics, tree]"));
        assert!(output.contains("(experimental)"));
        assert!(output.contains("2 variant(s)"));

        let empty = formatter.format_variants(&[]).unwrap();
        assert_eq!(empty, "No variants match.\n");
    }

    #[test]
    fn test_variant_human() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let output = formatter.format_variant(&variants()[0]).unwrap();
        assert!(output.starts_with("Variant 3: Knowledge Tree View\n"));
        assert!(output.contains("Status:       stable"));
    }

    #[test]
    fn test_report_human() {
        let report = GenerateReport {
            outcomes: vec![
                SpecOutcome {
                    id: 101,
                    name: "Galaxy Map".to_string(),
                    status: SpecStatus::Generated {
                        component: PathBuf::from("views/generated/variant_101/component.rs"),
                        stub: PathBuf::from("views/generated/variant_101/mod.rs"),
                        warnings: vec![],
                        registered: true,
                    },
                },
                SpecOutcome {
                    id: 102,
                    name: "Pyramid".to_string(),
                    status: SpecStatus::Failed {
                        error: GenerateError::DuplicateSpecId(102),
                    },
                },
            ],
            aggregation: AggregationStatus::Patched { added: 1 },
            dry_run: false,
        };
        let output = OutputFormatter::new(OutputFormat::Human).format_report(&report).unwrap();
        assert!(output.contains("ok      101  Galaxy Map"));
        assert!(output.contains("FAIL    102  Pyramid"));
        assert!(output.contains("Aggregation file: 1 new entry"));
        assert!(output.contains("1 generated, 1 failed"));
    }
}
