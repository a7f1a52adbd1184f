//! Variant generator
//!
//! Stamps out new view variants by cloning a base component's source. For each
//! [`GeneratedVariantSpec`] the generator writes
//! `generated/variant_<id>/component.rs` (the clone) and
//! `generated/variant_<id>/mod.rs` (the registration stub), then lists the new
//! module in the aggregation file so the next build registers it.
//!
//! Specs are processed in order and independently: a failing spec is reported
//! and skipped, the rest of the batch still runs. Files already written are
//! never rolled back.

pub mod aggregation;
pub mod clone;
mod error;
pub mod spec;
pub mod stub;

pub use aggregation::{AggregationError, AggregationFile, END_MARKER};
pub use clone::{
    declared_view_id, AnchorKind, AnchorWarning, BaseComponentArtifact, CloneSpec,
    ClonedArtifact, LiteralRewriter, SourceRewriter,
};
pub use error::GenerateError;
pub use spec::{default_specs, load_specs, GeneratedVariantSpec};
pub use stub::{render_stub, stub_export};

use crate::fs::FileSystem;
use crate::progress::{NoOpHandler, ProgressEvent, ProgressHandler};
use heck::{ToSnakeCase, ToUpperCamelCase};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Where things live under the views directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewsLayout {
    root: PathBuf,
}

impl ViewsLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base_dir(&self) -> PathBuf {
        self.root.join("base")
    }

    pub fn generated_dir(&self) -> PathBuf {
        self.root.join("generated")
    }

    /// `BookshelfView` resolves to `base/bookshelf.rs`
    pub fn base_component(&self, export: &str) -> PathBuf {
        self.base_dir().join(format!("{}.rs", base_file_stem(export)))
    }

    pub fn variant_dir(&self, id: u32) -> PathBuf {
        self.generated_dir().join(format!("variant_{}", id))
    }

    pub fn component_file(&self, id: u32) -> PathBuf {
        self.variant_dir(id).join("component.rs")
    }

    pub fn stub_file(&self, id: u32) -> PathBuf {
        self.variant_dir(id).join("mod.rs")
    }

    pub fn aggregation_file(&self) -> PathBuf {
        self.generated_dir().join("mod.rs")
    }

    /// Export names of every base component on disk
    pub fn available_bases(&self, fs: &dyn FileSystem) -> Vec<String> {
        let Ok(entries) = fs.read_dir(&self.base_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .iter()
            .filter(|e| e.is_file())
            .filter_map(|e| e.file_name().strip_suffix(".rs"))
            .filter(|stem| *stem != "mod")
            .map(base_export)
            .collect();
        names.sort();
        names
    }
}

fn base_export(stem: &str) -> String {
    format!("{}View", stem.to_upper_camel_case())
}

fn base_file_stem(export: &str) -> String {
    let snake = export.to_snake_case();
    match snake.strip_suffix("_view") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => snake,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Fail a spec instead of warning when an anchor is missing or ambiguous
    pub strict_anchors: bool,
    /// Compute every artifact but write nothing
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpecStatus {
    Generated {
        component: PathBuf,
        stub: PathBuf,
        warnings: Vec<AnchorWarning>,
        /// Listed in the aggregation file on disk once the run finished
        registered: bool,
    },
    Failed {
        error: GenerateError,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecOutcome {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub status: SpecStatus,
}

impl SpecOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self.status, SpecStatus::Generated { .. })
    }

    pub fn error(&self) -> Option<&GenerateError> {
        match &self.status {
            SpecStatus::Failed { error } => Some(error),
            SpecStatus::Generated { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AggregationStatus {
    Patched { added: usize },
    Unchanged,
    Failed { error: GenerateError },
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub outcomes: Vec<SpecOutcome>,
    pub aggregation: AggregationStatus,
    pub dry_run: bool,
}

impl GenerateReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_generated()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0 && !matches!(self.aggregation, AggregationStatus::Failed { .. })
    }
}

struct Generated {
    component: PathBuf,
    stub: PathBuf,
    warnings: Vec<AnchorWarning>,
}

pub struct Generator {
    fs: Arc<dyn FileSystem>,
    layout: ViewsLayout,
    rewriter: Box<dyn SourceRewriter>,
    progress: Arc<dyn ProgressHandler>,
    options: GenerateOptions,
}

impl Generator {
    pub fn new(fs: Arc<dyn FileSystem>, layout: ViewsLayout) -> Self {
        Self {
            fs,
            layout,
            rewriter: Box::new(LiteralRewriter),
            progress: Arc::new(NoOpHandler),
            options: GenerateOptions::default(),
        }
    }

    pub fn with_rewriter(mut self, rewriter: Box<dyn SourceRewriter>) -> Self {
        self.rewriter = rewriter;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressHandler>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(&self, specs: &[GeneratedVariantSpec]) -> GenerateReport {
        let start = Instant::now();
        let total = specs.len();
        self.progress.on_progress(&ProgressEvent::Started {
            total,
            dry_run: self.options.dry_run,
        });

        let aggregation_path = self.layout.aggregation_file();
        let mut aggregation = self.load_aggregation(&aggregation_path);
        let base_ids = self.base_view_ids();
        let mut added = 0;
        let mut seen = HashSet::new();
        let mut outcomes = Vec::with_capacity(total);
        // (outcome index, newly inserted) for every spec listed in the in-memory file
        let mut listed = Vec::new();

        for (index, spec) in specs.iter().enumerate() {
            self.progress.on_progress(&ProgressEvent::SpecStarted {
                id: spec.id,
                name: spec.name.clone(),
                index: index + 1,
                total,
            });

            let result = if seen.insert(spec.id) {
                self.generate_one(spec, &base_ids)
            } else {
                Err(GenerateError::DuplicateSpecId(spec.id))
            };

            let status = match result {
                Ok(generated) => {
                    if let Ok(file) = &mut aggregation {
                        match file.insert(&spec.module_name()) {
                            Ok(inserted) => {
                                added += usize::from(inserted);
                                listed.push((outcomes.len(), inserted));
                            }
                            Err(e) => {
                                aggregation = Err(GenerateError::AggregationPatch {
                                    path: aggregation_path.clone(),
                                    reason: e.to_string(),
                                });
                            }
                        }
                    }
                    self.progress.on_progress(&ProgressEvent::SpecGenerated {
                        id: spec.id,
                        name: spec.name.clone(),
                        component: generated.component.clone(),
                    });
                    SpecStatus::Generated {
                        component: generated.component,
                        stub: generated.stub,
                        warnings: generated.warnings,
                        registered: false,
                    }
                }
                Err(error) => {
                    self.progress.on_progress(&ProgressEvent::SpecFailed {
                        id: spec.id,
                        error: error.to_string(),
                    });
                    SpecStatus::Failed { error }
                }
            };

            outcomes.push(SpecOutcome {
                id: spec.id,
                name: spec.name.clone(),
                status,
            });
        }

        let aggregation = self.finish_aggregation(&aggregation_path, aggregation, added);

        let written =
            matches!(aggregation, AggregationStatus::Patched { .. }) && !self.options.dry_run;
        for (index, inserted) in listed {
            if let SpecStatus::Generated { registered, .. } = &mut outcomes[index].status {
                *registered = !inserted || written;
            }
        }

        let report = GenerateReport {
            outcomes,
            aggregation,
            dry_run: self.options.dry_run,
        };
        self.progress.on_progress(&ProgressEvent::Completed {
            succeeded: report.succeeded(),
            failed: report.failed(),
            total_time: start.elapsed(),
        });
        report
    }

    fn load_aggregation(&self, path: &Path) -> Result<AggregationFile, GenerateError> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| GenerateError::Read {
                path: path.to_path_buf(),
                reason: format!("{:#}", e),
            })?;
        AggregationFile::parse(&content).map_err(|e| GenerateError::AggregationPatch {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn finish_aggregation(
        &self,
        path: &Path,
        aggregation: Result<AggregationFile, GenerateError>,
        added: usize,
    ) -> AggregationStatus {
        let written = aggregation.and_then(|file| {
            if added > 0 && !self.options.dry_run {
                self.fs
                    .write_string(path, &file.render())
                    .map_err(|e| GenerateError::Write {
                        path: path.to_path_buf(),
                        reason: format!("{:#}", e),
                    })?;
            }
            Ok(())
        });

        match written {
            Ok(()) if added == 0 => {
                self.progress.on_progress(&ProgressEvent::AggregationUnchanged {
                    path: path.to_path_buf(),
                });
                AggregationStatus::Unchanged
            }
            Ok(()) => {
                self.progress.on_progress(&ProgressEvent::AggregationPatched {
                    path: path.to_path_buf(),
                    added,
                });
                AggregationStatus::Patched { added }
            }
            Err(error) => {
                self.progress.on_progress(&ProgressEvent::AggregationFailed {
                    path: path.to_path_buf(),
                    error: error.to_string(),
                });
                AggregationStatus::Failed { error }
            }
        }
    }

    /// Ids declared by base components, mapped to the export that owns each
    fn base_view_ids(&self) -> HashMap<u32, String> {
        let Ok(entries) = self.fs.read_dir(&self.layout.base_dir()) else {
            return HashMap::new();
        };
        entries
            .iter()
            .filter(|e| e.is_file())
            .filter_map(|e| {
                let stem = e.file_name().strip_suffix(".rs")?;
                if stem == "mod" {
                    return None;
                }
                let source = self.fs.read_to_string(e.path()).ok()?;
                Some((declared_view_id(&source)?, base_export(stem)))
            })
            .collect()
    }

    /// An id is free unless a base declares it or a stub for another export holds it.
    /// Regenerating the same export under its own id is allowed.
    fn check_id_free(
        &self,
        spec: &GeneratedVariantSpec,
        base_ids: &HashMap<u32, String>,
    ) -> Result<(), GenerateError> {
        if let Some(owner) = base_ids.get(&spec.id) {
            return Err(GenerateError::IdInUse {
                id: spec.id,
                owner: owner.clone(),
            });
        }

        let stub_path = self.layout.stub_file(spec.id);
        if !self.fs.is_file(&stub_path) {
            return Ok(());
        }
        let stub = self
            .fs
            .read_to_string(&stub_path)
            .map_err(|e| GenerateError::Read {
                path: stub_path.clone(),
                reason: format!("{:#}", e),
            })?;
        match stub_export(&stub) {
            Some(export) if export == spec.export => Ok(()),
            owner => Err(GenerateError::IdInUse {
                id: spec.id,
                owner: owner
                    .map(str::to_string)
                    .unwrap_or_else(|| stub_path.display().to_string()),
            }),
        }
    }

    fn generate_one(
        &self,
        spec: &GeneratedVariantSpec,
        base_ids: &HashMap<u32, String>,
    ) -> Result<Generated, GenerateError> {
        spec.validate()?;
        self.check_id_free(spec, base_ids)?;

        let base_path = self.layout.base_component(&spec.base);
        if !self.fs.is_file(&base_path) {
            return Err(GenerateError::BaseComponentNotFound {
                name: spec.base.clone(),
                path: base_path,
                available: self.layout.available_bases(self.fs.as_ref()),
            });
        }
        let source = self
            .fs
            .read_to_string(&base_path)
            .map_err(|e| GenerateError::Read {
                path: base_path.clone(),
                reason: format!("{:#}", e),
            })?;
        let base = BaseComponentArtifact::new(&spec.base, base_path, source);

        let cloned = self.rewriter.rewrite(&CloneSpec {
            base: &base,
            id: spec.id,
            name: &spec.name,
            export: &spec.export,
            description: &spec.description,
        });
        self.check_anchors(spec, &cloned.warnings)?;

        let component = self.layout.component_file(spec.id);
        let stub = self.layout.stub_file(spec.id);
        if self.options.dry_run {
            debug!(id = spec.id, component = %component.display(), "Dry run, not writing");
        } else {
            let variant_dir = self.layout.variant_dir(spec.id);
            self.fs
                .create_dir_all(&variant_dir)
                .map_err(|e| GenerateError::Write {
                    path: variant_dir,
                    reason: format!("{:#}", e),
                })?;
            self.write(&component, &cloned.source)?;
            self.write(&stub, &render_stub(spec))?;
        }

        Ok(Generated {
            component,
            stub,
            warnings: cloned.warnings,
        })
    }

    fn check_anchors(
        &self,
        spec: &GeneratedVariantSpec,
        warnings: &[AnchorWarning],
    ) -> Result<(), GenerateError> {
        if self.options.strict_anchors {
            if let Some(warning) = warnings.first() {
                return Err(match warning.occurrences {
                    0 => GenerateError::AnchorNotFound {
                        base: spec.base.clone(),
                        anchor: warning.anchor,
                    },
                    occurrences => GenerateError::AmbiguousAnchor {
                        base: spec.base.clone(),
                        anchor: warning.anchor,
                        occurrences,
                    },
                });
            }
        }
        for warning in warnings {
            self.progress.on_progress(&ProgressEvent::AnchorWarning {
                id: spec.id,
                message: format!("{} in {}: {}", spec.export, spec.base, warning),
            });
        }
        Ok(())
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), GenerateError> {
        self.fs
            .write_string(path, content)
            .map_err(|e| GenerateError::Write {
                path: path.to_path_buf(),
                reason: format!("{:#}", e),
            })
    }
}
