use thiserror::Error;

/// Errors raised by [`Registry`](super::Registry) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Variant ids start at 1
    #[error("Invalid variant id {0}: ids must be positive")]
    InvalidId(u32),

    /// Category name outside the supported set
    #[error("Unknown category '{0}'. Valid options: question, set, timeline")]
    UnknownCategory(String),

    /// A different variant already holds this id
    #[error("Variant id {id} is already registered as '{existing}', refusing to register '{incoming}'")]
    DuplicateVariantId {
        id: u32,
        existing: String,
        incoming: String,
    },

    /// Nothing registered under this id
    #[error("No variant registered with id {0}")]
    NotFound(u32),
}

impl RegistryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}
