//! Generator input: which variants to stamp out and from which base

use super::GenerateError;
use crate::fs::FileSystem;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One variant to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedVariantSpec {
    pub id: u32,
    pub name: String,
    /// Identifier the new component exports
    pub export: String,
    /// Identifier of the base component to clone
    pub base: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated
    #[serde(default)]
    pub tags: String,
}

impl GeneratedVariantSpec {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        export: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            export: export.into(),
            base: base.into(),
            description: String::new(),
            tags: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Tags split on commas, trimmed, empties dropped
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn module_name(&self) -> String {
        format!("variant_{}", self.id)
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        let invalid = |reason: String| GenerateError::InvalidSpec {
            id: self.id,
            reason,
        };

        if self.id == 0 {
            return Err(invalid("id must be positive".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }
        if !is_type_identifier(&self.export) {
            return Err(invalid(format!(
                "export '{}' is not an UpperCamelCase identifier",
                self.export
            )));
        }
        if !is_type_identifier(&self.base) {
            return Err(invalid(format!(
                "base '{}' is not an UpperCamelCase identifier",
                self.base
            )));
        }
        if self.export == self.base {
            return Err(invalid("export must differ from base".to_string()));
        }
        Ok(())
    }
}

fn is_type_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[derive(Debug, Default, Deserialize)]
struct SpecFile {
    #[serde(default, rename = "variant")]
    variants: Vec<GeneratedVariantSpec>,
}

/// Loads specs from a TOML file of `[[variant]]` tables
pub fn load_specs(fs: &dyn FileSystem, path: &Path) -> Result<Vec<GeneratedVariantSpec>, GenerateError> {
    let spec_error = |reason: String| GenerateError::SpecFile {
        path: path.to_path_buf(),
        reason,
    };

    let content = fs
        .read_to_string(path)
        .map_err(|e| spec_error(format!("{:#}", e)))?;
    parse_specs(&content).map_err(spec_error)
}

pub fn parse_specs(content: &str) -> Result<Vec<GeneratedVariantSpec>, String> {
    let file: SpecFile = toml::from_str(content).map_err(|e| e.to_string())?;
    Ok(file.variants)
}

/// The batch `satlens generate` runs when no spec file is given
pub fn default_specs() -> Vec<GeneratedVariantSpec> {
    vec![
        GeneratedVariantSpec::new(101, "Galaxy Map", "GalaxyMapView", "ConstellationView")
            .with_description("Topics drawn as galaxies, each question a star in orbit.")
            .with_tags("space, galaxy, topics"),
        GeneratedVariantSpec::new(102, "Subway Map", "SubwayMapView", "KnowledgeTreeView")
            .with_description("Subjects as subway lines with a stop for every topic.")
            .with_tags("transit, map, topics"),
        GeneratedVariantSpec::new(103, "Skill Garden", "SkillGardenView", "KnowledgeTreeView")
            .with_description("A garden bed per subject where mastered topics bloom.")
            .with_tags("garden, growth, topics"),
        GeneratedVariantSpec::new(104, "Trophy Cabinet", "TrophyCabinetView", "BookshelfView")
            .with_description("Finished practice sets displayed as trophies on shelves.")
            .with_tags("trophies, sets, progress"),
        GeneratedVariantSpec::new(105, "Thermal Map", "ThermalMapView", "AccuracyHeatmapView")
            .with_description("Set accuracy by topic as a thermal camera image.")
            .with_tags("heatmap, accuracy"),
        GeneratedVariantSpec::new(106, "Study Streak", "StudyStreakView", "StudyTimelineView")
            .with_description("Daily practice sessions as a streak calendar.")
            .with_tags("timeline, streak, habits"),
    ]
}
