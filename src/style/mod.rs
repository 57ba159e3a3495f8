//! The composable style core.
//!
//! This module provides the algebraic primitives:
//!
//! - [`Style`]: a lazily-evaluated transformation from props to a result
//! - [`StyleArg`]: an untyped argument for the checked constructors
//! - [`Merge`]: right-biased shallow merging used by `concat`
//! - [`StyleError`]: errors from checked construction
//! - [`Props`] and [`Css`]: the conventional environment and result types
//!
//! Styles compose as functors, monads and monoids over a shared environment.
//! Resolution is the only point where user functions run.

mod arg;
mod error;
mod merge;
mod props;
#[allow(clippy::module_inception)]
mod style;

pub use arg::StyleArg;
pub use error::{ErrorKind, StyleError};
pub use merge::Merge;
pub use props::{props, Css, Props};
pub use style::Style;
