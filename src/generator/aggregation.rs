//! The aggregation file: the list of generated variant modules loaded at bootstrap
//!
//! The file holds a `generated_variants! { ... }` invocation with one
//! `<module>,` line per variant. The entry block is the run of such lines
//! directly above [`END_MARKER`]; everything else in the file is carried
//! through untouched.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

pub const END_MARKER: &str = "// @satlens:end-variants";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("end marker `// @satlens:end-variants` not found")]
    MarkerNotFound,

    #[error("end marker `// @satlens:end-variants` appears {0} times")]
    DuplicateMarker(usize),

    #[error("'{0}' is not a valid module name")]
    InvalidModule(String),
}

fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*),\s*$").expect("valid regex"))
}

fn module_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    line: String,
    module: String,
}

/// Parsed aggregation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationFile {
    head: Vec<String>,
    entries: Vec<Entry>,
    marker: String,
    indent: String,
    tail: Vec<String>,
    line_ending: &'static str,
    trailing_newline: bool,
}

impl AggregationFile {
    pub fn parse(content: &str) -> Result<Self, AggregationError> {
        let lines: Vec<&str> = content.lines().collect();

        let markers: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.trim() == END_MARKER)
            .map(|(i, _)| i)
            .collect();
        let marker_at = match markers.as_slice() {
            [] => return Err(AggregationError::MarkerNotFound),
            [single] => *single,
            many => return Err(AggregationError::DuplicateMarker(many.len())),
        };

        let mut start = marker_at;
        while start > 0 && entry_pattern().is_match(lines[start - 1]) {
            start -= 1;
        }

        let entries = lines[start..marker_at]
            .iter()
            .filter_map(|line| {
                let module = entry_pattern().captures(line)?.get(1)?.as_str().to_string();
                Some(Entry {
                    line: line.to_string(),
                    module,
                })
            })
            .collect();

        let marker = lines[marker_at].to_string();
        let indent = marker[..marker.len() - marker.trim_start().len()].to_string();

        Ok(Self {
            head: lines[..start].iter().map(|l| l.to_string()).collect(),
            entries,
            marker,
            indent,
            tail: lines[marker_at + 1..].iter().map(|l| l.to_string()).collect(),
            line_ending: if content.contains("\r\n") { "\r\n" } else { "\n" },
            trailing_newline: content.ends_with('\n'),
        })
    }

    /// Module names in file order
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.module.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, module: &str) -> bool {
        self.entries.iter().any(|e| e.module == module)
    }

    /// Appends `module` after the last entry; `false` if it was already listed
    pub fn insert(&mut self, module: &str) -> Result<bool, AggregationError> {
        if !module_pattern().is_match(module) {
            return Err(AggregationError::InvalidModule(module.to_string()));
        }
        if self.contains(module) {
            return Ok(false);
        }
        self.entries.push(Entry {
            line: format!("{}{},", self.indent, module),
            module: module.to_string(),
        });
        Ok(true)
    }

    pub fn render(&self) -> String {
        let lines: Vec<&str> = self
            .head
            .iter()
            .map(String::as_str)
            .chain(self.entries.iter().map(|e| e.line.as_str()))
            .chain(std::iter::once(self.marker.as_str()))
            .chain(self.tail.iter().map(String::as_str))
            .collect();

        let mut out = lines.join(self.line_ending);
        if self.trailing_newline {
            out.push_str(self.line_ending);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = "\
use crate::registry::VariantDef;

macro_rules! generated_variants {
    ($($module:ident,)*) => {};
}

generated_variants! {
    variant_101,
    variant_102,
    // @satlens:end-variants
}
";

    #[test]
    fn test_parse_entries() {
        let file = AggregationFile::parse(FILE).unwrap();
        assert_eq!(file.entries().collect::<Vec<_>>(), vec!["variant_101", "variant_102"]);
        assert!(file.contains("variant_102"));
        assert!(!file.contains("variant_103"));
    }

    #[test]
    fn test_render_unchanged_is_identical() {
        let file = AggregationFile::parse(FILE).unwrap();
        assert_eq!(file.render(), FILE);
    }

    #[test]
    fn test_insert_appends_before_marker() {
        let mut file = AggregationFile::parse(FILE).unwrap();
        assert!(file.insert("variant_103").unwrap());
        assert!(!file.insert("variant_101").unwrap());

        let rendered = file.render();
        assert!(rendered.contains(
            "    variant_101,\n    variant_102,\n    variant_103,\n    // @satlens:end-variants\n}\n"
        ));
        assert_eq!(rendered.matches("variant_101").count(), 1);
    }

    #[test]
    fn test_insert_into_empty_block() {
        let content = "generated_variants! {\n  // @satlens:end-variants\n}";
        let mut file = AggregationFile::parse(content).unwrap();
        assert!(file.is_empty());
        file.insert("variant_7").unwrap();
        assert_eq!(
            file.render(),
            "generated_variants! {\n  variant_7,\n  // @satlens:end-variants\n}"
        );
    }

    #[test]
    fn test_crlf_line_endings_survive_insert() {
        let content = FILE.replace('\n', "\r\n");
        let mut file = AggregationFile::parse(&content).unwrap();
        assert_eq!(file.render(), content);

        file.insert("variant_103").unwrap();
        let rendered = file.render();
        assert!(rendered.contains(
            "    variant_102,\r\n    variant_103,\r\n    // @satlens:end-variants\r\n"
        ));
        assert!(!rendered.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_missing_marker() {
        let content = FILE.replace(END_MARKER, "");
        assert_eq!(
            AggregationFile::parse(&content),
            Err(AggregationError::MarkerNotFound)
        );
    }

    #[test]
    fn test_duplicate_marker() {
        let content = format!("{}{}\n", FILE, END_MARKER);
        assert_eq!(
            AggregationFile::parse(&content),
            Err(AggregationError::DuplicateMarker(2))
        );
    }

    #[test]
    fn test_rejects_invalid_module() {
        let mut file = AggregationFile::parse(FILE).unwrap();
        assert!(matches!(
            file.insert("variant-9"),
            Err(AggregationError::InvalidModule(_))
        ));
    }
}
