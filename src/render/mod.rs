//! Render bridge: binding styles to elements.
//!
//! This module connects the style core to an output target:
//!
//! - [`Component`]: a [`Style`](crate::Style) bound to an [`ElementType`]
//! - [`RenderContext`]: the renderer and theme in effect
//! - [`Renderer`]: backends producing class names or inline styles
//!   ([`ClassRenderer`], [`InlineRenderer`], [`TermRenderer`])
//! - [`Element`]: the rendered result, serializable to HTML
//!
//! The bridge only uses the public style contract: it resolves styles with
//! props extended by the injected `theme`, and re-wraps `map`/`concat` results
//! so composition stays available after binding.

mod component;
mod context;
mod element;
mod error;
mod renderer;
mod term;

pub use component::{forward_all, AttributeFilter, Component, ElementType, RESERVED_PROPS};
pub use context::RenderContext;
pub use element::{Element, Node};
pub use error::RenderError;
pub use renderer::{ClassRenderer, InlineRenderer, Rendered, Renderer};
pub use term::TermRenderer;
