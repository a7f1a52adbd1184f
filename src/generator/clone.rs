//! Cloning a base component's source into a new variant
//!
//! The generator only talks to [`SourceRewriter`]; [`LiteralRewriter`] is the
//! text-substitution implementation. Every anchor it relies on is counted
//! before it is touched, so a base whose shape has drifted produces
//! [`AnchorWarning`]s instead of a silently half-renamed clone.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

fn title_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?m)^pub const TITLE: &str = "[^"\n]*";"#).expect("valid regex")
    })
}

fn view_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)^pub const VIEW_ID: u32 = \d+;").expect("valid regex")
    })
}

/// The substitution points a base component is expected to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    /// `pub struct <Name>;`
    Export,
    /// `pub const TITLE: &str = "...";`
    Title,
    /// `pub const VIEW_ID: u32 = N;`
    ViewId,
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorKind::Export => f.write_str("export anchor"),
            AnchorKind::Title => f.write_str("title marker"),
            AnchorKind::ViewId => f.write_str("view id anchor"),
        }
    }
}

/// An anchor that did not match exactly once; the step using it was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorWarning {
    pub anchor: AnchorKind,
    pub occurrences: usize,
}

impl fmt::Display for AnchorWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.occurrences == 0 {
            write!(f, "{} not found, substitution skipped", self.anchor)
        } else {
            write!(
                f,
                "{} matched {} times, substitution skipped",
                self.anchor, self.occurrences
            )
        }
    }
}

impl Serialize for AnchorWarning {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Source text of an existing component used as a cloning template
#[derive(Debug, Clone)]
pub struct BaseComponentArtifact {
    /// Exported identifier, e.g. `KnowledgeTreeView`
    pub name: String,
    pub path: PathBuf,
    pub source: String,
}

impl BaseComponentArtifact {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            source: source.into(),
        }
    }

    /// File name of the base, e.g. `knowledge_tree.rs`
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn export_anchor(&self) -> String {
        format!("pub struct {};", self.name)
    }

    /// Title marker literal, when it appears exactly once
    pub fn title_anchor(&self) -> Option<&str> {
        single_match(title_pattern(), &self.source)
    }

    /// View id literal, when it appears exactly once
    pub fn view_id_anchor(&self) -> Option<&str> {
        single_match(view_id_pattern(), &self.source)
    }
}

/// Value of the `VIEW_ID` constant, when it is declared exactly once
pub fn declared_view_id(source: &str) -> Option<u32> {
    single_match(view_id_pattern(), source)?
        .trim_start_matches("pub const VIEW_ID: u32 = ")
        .trim_end_matches(';')
        .parse()
        .ok()
}

fn single_match<'s>(pattern: &Regex, source: &'s str) -> Option<&'s str> {
    let mut matches = pattern.find_iter(source);
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first.as_str())
}

/// What the new variant should look like
#[derive(Debug, Clone, Copy)]
pub struct CloneSpec<'a> {
    pub base: &'a BaseComponentArtifact,
    pub id: u32,
    pub name: &'a str,
    pub export: &'a str,
    pub description: &'a str,
}

impl CloneSpec<'_> {
    pub fn title(&self) -> String {
        format!("View {}: {}", self.id, self.name)
    }
}

/// Result of cloning: the new source plus every anchor that did not line up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonedArtifact {
    pub source: String,
    pub warnings: Vec<AnchorWarning>,
}

impl ClonedArtifact {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Turns a base component into a new variant's source
pub trait SourceRewriter: Send + Sync {
    fn rewrite(&self, spec: &CloneSpec<'_>) -> ClonedArtifact;
}

/// Literal anchor substitution over the raw source text
#[derive(Debug, Default, Clone, Copy)]
pub struct LiteralRewriter;

impl LiteralRewriter {
    fn rename_export(source: &str, from: &str, to: &str) -> String {
        let ident = Regex::new(&format!(r"\b{}\b", regex::escape(from)))
            .expect("escaped identifier is a valid regex");
        ident.replace_all(source, to).into_owned()
    }

    /// Names the base by file so the old export identifier never survives
    fn provenance(spec: &CloneSpec<'_>) -> String {
        let mut header = format!(
            "// Cloned from base/{} by `satlens generate`.\n",
            spec.base.file_name()
        );
        for line in spec.description.lines().filter(|l| !l.trim().is_empty()) {
            header.push_str(&format!("// {}\n", line.trim()));
        }
        header.push('\n');
        header
    }
}

impl SourceRewriter for LiteralRewriter {
    fn rewrite(&self, spec: &CloneSpec<'_>) -> ClonedArtifact {
        let base = spec.base;
        let mut source = base.source.clone();
        let mut warnings = Vec::new();

        let export_anchor = base.export_anchor();
        match source.matches(&export_anchor).count() {
            1 => source = Self::rename_export(&source, &base.name, spec.export),
            occurrences => warnings.push(AnchorWarning {
                anchor: AnchorKind::Export,
                occurrences,
            }),
        }

        match title_pattern().find_iter(&source).count() {
            1 => {
                let replacement = format!("pub const TITLE: &str = {:?};", spec.title());
                source = title_pattern()
                    .replacen(&source, 1, regex::NoExpand(&replacement))
                    .into_owned();
            }
            occurrences => warnings.push(AnchorWarning {
                anchor: AnchorKind::Title,
                occurrences,
            }),
        }

        // The id anchor is optional; only an ambiguous one is worth reporting.
        match view_id_pattern().find_iter(&source).count() {
            0 => {}
            1 => {
                let replacement = format!("pub const VIEW_ID: u32 = {};", spec.id);
                source = view_id_pattern()
                    .replacen(&source, 1, regex::NoExpand(&replacement))
                    .into_owned();
            }
            occurrences => warnings.push(AnchorWarning {
                anchor: AnchorKind::ViewId,
                occurrences,
            }),
        }

        ClonedArtifact {
            source: format!("{}{}", Self::provenance(spec), source),
            warnings,
        }
    }
}
