//! Dynamically-typed arguments for the checked style constructors.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::error::StyleError;
use super::props::Props;

pub(crate) type Resolver<A, P> = Arc<dyn Fn(&P) -> A + Send + Sync>;

/// An argument that may or may not be a function.
///
/// Styles built from Rust code use [`Style::new`](super::Style::new), where the
/// compiler guarantees a function. `StyleArg` covers values that arrive
/// untyped, for instance from deserialized configuration, and lets
/// [`Style::try_new`](super::Style::try_new) and
/// [`Style::try_set_args`](super::Style::try_set_args) reject anything that is
/// not callable.
///
/// # Example
///
/// ```rust
/// use further::{Css, Props, Style, StyleArg};
/// use serde_json::json;
///
/// assert!(Style::<Css>::try_new(json!(5).into()).is_err());
/// assert!(Style::<Css>::try_new(StyleArg::function(|_: &Props| Css::new())).is_ok());
/// ```
pub enum StyleArg<A, P = Props> {
    /// A callable mapping the environment to a result.
    Function(Resolver<A, P>),
    /// A plain value, which the checked constructors reject.
    Value(Value),
}

impl<A, P> StyleArg<A, P> {
    /// Wraps a function.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&P) -> A + Send + Sync + 'static,
    {
        StyleArg::Function(Arc::new(f))
    }

    pub(crate) fn into_function(
        self,
        operation: &'static str,
    ) -> Result<Resolver<A, P>, StyleError> {
        match self {
            StyleArg::Function(f) => Ok(f),
            StyleArg::Value(actual) => Err(StyleError::not_a_function(operation, actual)),
        }
    }
}

impl<A, P> From<Value> for StyleArg<A, P> {
    fn from(value: Value) -> Self {
        StyleArg::Value(value)
    }
}

impl<A, P> fmt::Debug for StyleArg<A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleArg::Function(_) => f.write_str("StyleArg::Function(..)"),
            StyleArg::Value(value) => f.debug_tuple("StyleArg::Value").field(value).finish(),
        }
    }
}
