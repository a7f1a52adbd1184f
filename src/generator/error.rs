use super::clone::AnchorKind;
use serde::{Serialize, Serializer};
use std::path::PathBuf;
use thiserror::Error;

/// Why a single spec, or the aggregation patch, failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Invalid spec for variant {id}: {reason}")]
    InvalidSpec { id: u32, reason: String },

    #[error("Variant id {0} appears more than once in this run")]
    DuplicateSpecId(u32),

    #[error("Variant id {id} is already used by {owner}")]
    IdInUse { id: u32, owner: String },

    #[error("Base component '{name}' not found at {}{}", .path.display(), format_available(.available))]
    BaseComponentNotFound {
        name: String,
        path: PathBuf,
        available: Vec<String>,
    },

    #[error("{anchor} not found in base component '{base}'")]
    AnchorNotFound { base: String, anchor: AnchorKind },

    #[error("{anchor} matched {occurrences} times in base component '{base}', expected exactly once")]
    AmbiguousAnchor {
        base: String,
        anchor: AnchorKind,
        occurrences: usize,
    },

    #[error("Failed to read {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("Cannot patch aggregation file {}: {reason}", .path.display())]
    AggregationPatch { path: PathBuf, reason: String },

    #[error("Failed to load spec file {}: {reason}", .path.display())]
    SpecFile { path: PathBuf, reason: String },
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        String::new()
    } else {
        format!(" (available: {})", available.join(", "))
    }
}

impl Serialize for GenerateError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_not_found_lists_available() {
        let err = GenerateError::BaseComponentNotFound {
            name: "PyramidView".to_string(),
            path: PathBuf::from("src/views/base/pyramid.rs"),
            available: vec!["BookshelfView".to_string(), "ConstellationView".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Base component 'PyramidView' not found at src/views/base/pyramid.rs \
             (available: BookshelfView, ConstellationView)"
        );
    }

    #[test]
    fn test_serializes_as_message() {
        let err = GenerateError::DuplicateSpecId(101);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, "Variant id 101 appears more than once in this run");
    }
}
