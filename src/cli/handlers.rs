//! Subcommand handlers; each returns the process exit code

use super::commands::{GenerateArgs, ListArgs, RenderArgs, ShowArgs};
use super::output::OutputFormatter;
use crate::bootstrap::load_registry;
use crate::config::SatlensConfig;
use crate::fs::{FileSystem, RealFileSystem};
use crate::generator::{default_specs, load_specs, GenerateOptions, Generator, ViewsLayout};
use crate::progress::LoggingHandler;
use crate::registry::{ListFilter, Registry, VariantMetadata};
use crate::views::ViewData;
use anyhow::{bail, Context, Result};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

fn exit_code(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

fn registry(config: &SatlensConfig) -> Result<Registry> {
    load_registry(config.duplicate_policy).context("Failed to load variant registry")
}

pub fn handle_list(args: &ListArgs, config: &SatlensConfig) -> i32 {
    exit_code(list(args, config))
}

fn list(args: &ListArgs, config: &SatlensConfig) -> Result<i32> {
    let registry = registry(config)?;

    let mut filter = ListFilter::default().with_experimental(args.all);
    filter.category = args.category;
    if let Some(tag) = &args.tag {
        filter = filter.with_tag(tag.clone());
    }
    debug!(?filter, "Listing variants");

    let variants: Vec<VariantMetadata> = registry
        .list(&filter)
        .map(|entry| entry.metadata.clone())
        .collect();

    let output = OutputFormatter::new(args.format.into()).format_variants(&variants)?;
    print!("{}", output);
    Ok(0)
}

pub fn handle_show(args: &ShowArgs, config: &SatlensConfig) -> i32 {
    exit_code(show(args, config))
}

fn show(args: &ShowArgs, config: &SatlensConfig) -> Result<i32> {
    let registry = registry(config)?;
    match registry.get(args.id) {
        Ok(entry) => {
            let output = OutputFormatter::new(args.format.into()).format_variant(entry.metadata)?;
            print!("{}", output);
            Ok(0)
        }
        Err(e) => {
            error!("{}", e);
            Ok(1)
        }
    }
}

pub fn handle_render(args: &RenderArgs, config: &SatlensConfig) -> i32 {
    exit_code(render(args, config))
}

fn render(args: &RenderArgs, config: &SatlensConfig) -> Result<i32> {
    let fs = RealFileSystem;
    let content = fs.read_to_string(&args.data)?;
    let data: ViewData = serde_json::from_str(&content)
        .with_context(|| format!("Invalid view data in {}", args.data.display()))?;

    let registry = registry(config)?;
    let entry = match registry.get(args.id) {
        Ok(entry) => entry,
        Err(e) if e.is_not_found() => {
            let Some(fallback) = registry.default_for(data.category()) else {
                bail!("{} and no default variant exists for {} data", e, data.category());
            };
            warn!(
                requested = args.id,
                fallback = fallback.metadata.id,
                "Variant not registered, using the category default"
            );
            fallback
        }
        Err(e) => return Err(e.into()),
    };

    info!(id = entry.metadata.id, name = %entry.metadata.name, "Rendering");
    let markup = entry
        .renderable
        .render(&data)
        .with_context(|| format!("Variant {} cannot render this data", entry.metadata.id))?;
    println!("{}", markup);
    Ok(0)
}

pub fn handle_generate(args: &GenerateArgs, config: &SatlensConfig) -> i32 {
    exit_code(generate(args, config))
}

fn generate(args: &GenerateArgs, config: &SatlensConfig) -> Result<i32> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let views_dir = args.views_dir.clone().unwrap_or_else(|| config.views_dir.clone());
    if !fs.is_dir(&views_dir) {
        bail!("Views directory does not exist: {}", views_dir.display());
    }

    let specs = match &args.specs {
        Some(path) => load_specs(fs.as_ref(), path)?,
        None => default_specs(),
    };
    if specs.is_empty() {
        warn!("No variant specs to generate");
    }

    let options = GenerateOptions {
        strict_anchors: args.strict || config.strict_anchors,
        dry_run: args.dry_run,
    };
    let generator = Generator::new(fs, ViewsLayout::new(views_dir))
        .with_progress(Arc::new(LoggingHandler))
        .with_options(options);

    let report = generator.run(&specs);
    let output = OutputFormatter::new(args.format.into()).format_report(&report)?;
    print!("{}", output);

    Ok(if report.is_success() { 0 } else { 1 })
}
