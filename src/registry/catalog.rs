use super::{Category, RegistryError, VariantDef, VariantMetadata};
use crate::views::Renderable;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use tracing::{debug, warn};

/// What [`Registry::register`] does when an id is already taken by different metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail with [`RegistryError::DuplicateVariantId`]
    #[default]
    Reject,
    /// Replace the existing entry (last write wins)
    Overwrite,
}

/// Metadata paired with the renderable it describes
///
/// The renderable is borrowed for `'static`; its owner is the module that
/// defines it, not the registry.
#[derive(Clone, Copy)]
pub struct RegistryEntry<'a> {
    pub metadata: &'a VariantMetadata,
    pub renderable: &'static dyn Renderable,
}

impl fmt::Debug for RegistryEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("metadata", self.metadata)
            .finish_non_exhaustive()
    }
}

struct Slot {
    metadata: VariantMetadata,
    renderable: &'static dyn Renderable,
}

impl Slot {
    fn entry(&self) -> RegistryEntry<'_> {
        RegistryEntry {
            metadata: &self.metadata,
            renderable: self.renderable,
        }
    }
}

/// Selects which variants [`Registry::list`] yields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub category: Option<Category>,
    pub tag: Option<String>,
    pub include_experimental: bool,
}

impl ListFilter {
    pub fn all() -> Self {
        Self {
            include_experimental: true,
            ..Default::default()
        }
    }

    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_experimental(mut self, include: bool) -> Self {
        self.include_experimental = include;
        self
    }

    pub fn matches(&self, metadata: &VariantMetadata) -> bool {
        if metadata.experimental && !self.include_experimental {
            return false;
        }
        if let Some(category) = self.category {
            if metadata.category != category {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !metadata.has_tag(tag) {
                return false;
            }
        }
        true
    }
}

/// Iterator over registered entries in ascending id order
///
/// Cloning the iterator restarts it from the clone point, so a caller can walk
/// the same listing more than once.
#[derive(Clone)]
pub struct Variants<'a> {
    inner: btree_map::Values<'a, u32, Slot>,
    filter: ListFilter,
}

impl<'a> Iterator for Variants<'a> {
    type Item = RegistryEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = &self.filter;
        self.inner
            .by_ref()
            .find(|slot| filter.matches(&slot.metadata))
            .map(Slot::entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Catalog of view variants keyed by numeric id
///
/// Built once at startup (see [`crate::bootstrap`]) and read afterwards.
/// Mutation takes `&mut self`; wrap it in a mutex if registration ever has to
/// happen from several threads.
pub struct Registry {
    slots: BTreeMap<u32, Slot>,
    policy: DuplicatePolicy,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            slots: BTreeMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Adds a variant, or confirms an identical registration already present.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidId`] for id 0, and
    /// [`RegistryError::DuplicateVariantId`] when the id holds different
    /// metadata under [`DuplicatePolicy::Reject`].
    pub fn register(
        &mut self,
        metadata: VariantMetadata,
        renderable: &'static dyn Renderable,
    ) -> Result<(), RegistryError> {
        if metadata.id == 0 {
            return Err(RegistryError::InvalidId(metadata.id));
        }

        let id = metadata.id;
        if let Some(existing) = self.slots.get(&id) {
            if existing.metadata == metadata {
                debug!(id, name = %metadata.name, "Variant already registered");
                return Ok(());
            }

            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(RegistryError::DuplicateVariantId {
                        id,
                        existing: existing.metadata.name.clone(),
                        incoming: metadata.name,
                    });
                }
                DuplicatePolicy::Overwrite => {
                    warn!(
                        id,
                        previous = %existing.metadata.name,
                        replacement = %metadata.name,
                        "Overwriting registered variant"
                    );
                }
            }
        }

        debug!(id, name = %metadata.name, category = %metadata.category, "Registered variant");
        self.slots.insert(
            id,
            Slot {
                metadata,
                renderable,
            },
        );
        Ok(())
    }

    /// Registers a stub's static record
    pub fn register_def(&mut self, def: &'static VariantDef) -> Result<(), RegistryError> {
        self.register(def.metadata(), def.renderable)
    }

    /// Looks up a variant by id.
    ///
    /// A missing id is an expected outcome: callers usually fall back to
    /// [`Registry::default_for`].
    pub fn get(&self, id: u32) -> Result<RegistryEntry<'_>, RegistryError> {
        self.slots
            .get(&id)
            .map(Slot::entry)
            .ok_or(RegistryError::NotFound(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn list(&self, filter: &ListFilter) -> Variants<'_> {
        Variants {
            inner: self.slots.values(),
            filter: filter.clone(),
        }
    }

    /// Lowest-id stable variant of a category
    pub fn default_for(&self, category: Category) -> Option<RegistryEntry<'_>> {
        self.slots
            .values()
            .find(|slot| slot.metadata.category == category && !slot.metadata.experimental)
            .map(Slot::entry)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every registration, keeping the duplicate policy
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("policy", &self.policy)
            .field("ids", &self.slots.keys().collect::<Vec<_>>())
            .finish()
    }
}
