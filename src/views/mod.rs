//! View variants
//!
//! Every variant is a [`Renderable`] that turns one category of practice data
//! into markup. Hand-written variants live in [`base`]; variants stamped out by
//! `satlens generate` live in [`generated`] and are cloned from a base.

pub mod base;
pub mod generated;
pub mod markup;
pub mod model;

pub use markup::{escape, Markup};
pub use model::{Difficulty, PracticeSet, Question, TimelineEntry, ViewData};

use crate::registry::{Category, VariantDef};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("View expects {expected} data, got {actual} data")]
    CategoryMismatch {
        expected: Category,
        actual: Category,
    },
}

/// A view variant: data in, markup out
pub trait Renderable: Send + Sync {
    fn render(&self, data: &ViewData) -> Result<Markup, RenderError>;
}

/// Registration records of every compiled-in variant, base first
pub fn builtin_variants() -> impl Iterator<Item = &'static VariantDef> {
    base::DEFS.iter().chain(generated::DEFS.iter()).copied()
}
