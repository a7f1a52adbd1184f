//! Variant metadata types
//!
//! [`VariantMetadata`] is the owned description the registry hands out to
//! consumers. [`VariantDef`] is its `'static` counterpart, written by
//! registration stubs as a plain `static` item so a variant can be declared
//! without running any code.

use super::RegistryError;
use crate::views::Renderable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Data shape a variant expects to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A flat list of practice questions
    Question,
    /// Practice sets, each with its own questions
    Set,
    /// Dated practice sessions
    Timeline,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Category::Question, Category::Set, Category::Timeline]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Question => "question",
            Category::Set => "set",
            Category::Timeline => "timeline",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "question" | "questions" => Ok(Category::Question),
            "set" | "sets" => Ok(Category::Set),
            "timeline" => Ok(Category::Timeline),
            _ => Err(RegistryError::UnknownCategory(s.to_string())),
        }
    }
}

/// Description of one registered variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantMetadata {
    /// Stable identity, never reused
    pub id: u32,

    /// Short human-readable title
    pub name: String,

    /// One-sentence explanation of the visual theme
    pub description: String,

    pub category: Category,

    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Hidden from default listings when set
    #[serde(default)]
    pub experimental: bool,
}

impl VariantMetadata {
    pub fn new(id: u32, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            category,
            tags: BTreeSet::new(),
            experimental: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn experimental(mut self, experimental: bool) -> Self {
        self.experimental = experimental;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// A registration record declared as a `static` by a variant stub
pub struct VariantDef {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
    pub experimental: bool,
    pub renderable: &'static dyn Renderable,
}

impl VariantDef {
    pub fn metadata(&self) -> VariantMetadata {
        VariantMetadata {
            id: self.id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            experimental: self.experimental,
        }
    }
}

impl fmt::Debug for VariantDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantDef")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("tags", &self.tags)
            .field("experimental", &self.experimental)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        question = { "question", Category::Question },
        questions_plural = { "questions", Category::Question },
        set_upper = { "SET", Category::Set },
        timeline_padded = { " timeline ", Category::Timeline },
    )]
    fn test_category_from_str(input: &str, expected: Category) {
        assert_eq!(input.parse::<Category>().unwrap(), expected);
    }

    #[test]
    fn test_category_unknown() {
        let err = "heatmap".parse::<Category>().unwrap_err();
        assert!(matches!(err, RegistryError::UnknownCategory(ref s) if s == "heatmap"));
    }

    #[test]
    fn test_category_display_roundtrips() {
        for category in Category::all() {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), *category);
        }
    }

    #[test]
    fn test_metadata_builder() {
        let meta = VariantMetadata::new(3, "Knowledge Tree View", Category::Question)
            .with_description("Questions branch out by subject and topic.")
            .with_tags(["tree", "topics"]);

        assert_eq!(meta.id, 3);
        assert!(meta.has_tag("tree"));
        assert!(meta.has_tag("TOPICS"));
        assert!(!meta.has_tag("map"));
        assert!(!meta.experimental);
    }

    #[test]
    fn test_metadata_serializes_lowercase_category() {
        let meta = VariantMetadata::new(1, "Bookshelf", Category::Set);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["category"], "set");
        assert_eq!(json["experimental"], false);
    }
}
