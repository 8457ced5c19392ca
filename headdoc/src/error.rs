//! Error types for document model mutation

use thiserror::Error;

/// Precondition failures of the container mutation API
///
/// A failed precondition never alters any slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Key was empty where a slot name is required
    #[error("Slot name must not be empty")]
    EmptyKey,

    /// No slot with this name exists
    #[error("No slot named '{key}' exists in the document")]
    MissingKey {
        /// The requested slot name
        key: String,
    },

    /// Slot exists but holds a scalar, not a container
    #[error("Slot '{key}' is not a container")]
    NotAContainer {
        /// The requested slot name
        key: String,
    },

    /// A slot with this name already exists
    #[error("A slot named '{key}' already exists")]
    DuplicateKey {
        /// The requested slot name
        key: String,
    },

    /// Core containers cannot be removed
    #[error("Core container '{key}' cannot be removed")]
    CoreContainer {
        /// The requested slot name
        key: String,
    },
}
