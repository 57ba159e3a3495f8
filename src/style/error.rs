//! Style construction errors.

use serde_json::Value;

/// Broad category of a [`StyleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument had the wrong type, e.g. a plain value where a function was expected.
    Type,
}

/// Error returned by the checked constructors of [`Style`](super::Style).
///
/// Only construction can fail. Once a style exists, resolving it never
/// produces a `StyleError`; anything the supplied functions raise reaches the
/// caller unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// A plain value was supplied where a function was required.
    #[error("{operation} expects to be called with a function. Actual: {actual}")]
    NotAFunction {
        /// The operation that rejected the argument (`Style` or `setArgs`).
        operation: &'static str,
        /// The rejected value.
        actual: Value,
    },
}

impl StyleError {
    pub(crate) fn not_a_function(operation: &'static str, actual: Value) -> Self {
        tracing::debug!(operation, actual = %actual, "rejected non-function argument");
        Self::NotAFunction { operation, actual }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StyleError::NotAFunction { .. } => ErrorKind::Type,
        }
    }
}
