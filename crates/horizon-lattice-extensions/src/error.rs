//! Error types for Horizon Lattice extensions.

use thiserror::Error;

/// The error type for extension helpers.
///
/// Only two things can go wrong: a required input was missing, or a count
/// or sum no longer fits its target type. Everything else (an absent
/// optional command, a source that has already been dropped) is a valid
/// state and never surfaces as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    /// A required argument was absent.
    #[error("argument '{name}' must not be absent")]
    InvalidArgument {
        /// The name of the missing argument.
        name: &'static str,
    },

    /// An arithmetic result exceeded the range of its target type.
    #[error("arithmetic overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
    },
}

impl ExtensionError {
    pub(crate) fn invalid_argument(name: &'static str) -> Self {
        Self::InvalidArgument { name }
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}

/// Unwraps a required argument, failing with [`ExtensionError::InvalidArgument`].
pub(crate) fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(ExtensionError::invalid_argument(name))
}

/// A specialized Result type for extension operations.
pub type Result<T> = std::result::Result<T, ExtensionError>;
