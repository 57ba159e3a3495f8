//! # Further - composable styles computed from props
//!
//! A [`Style`] is a lazily-evaluated function from props to a result,
//! usually a CSS object. Styles compose without running anything:
//!
//! - **Functor**: [`Style::map`] transforms the resolved value
//! - **Monoid**: [`Style::concat`] merges two styles, [`Style::empty`] is the identity
//! - **Monad**: [`Style::of`], [`Style::chain`] and [`Style::ap`] thread the
//!   same props through dependent computations
//! - **Environment remapping**: [`Style::set_args`] rewrites the props seen downstream
//!
//! Resolution ([`Style::resolve`]) is the only place user functions run.
//!
//! ## Quick Start
//!
//! ```rust
//! use further::{props, Css, Props, Style};
//! use serde_json::{json, Value};
//!
//! let button = Style::new(|p: &Props| {
//!     let primary = p.get("primary") == Some(&Value::Bool(true));
//!     props(json!({
//!         "fontSize": 16,
//!         "backgroundColor": if primary { "green" } else { "blue" },
//!     }))
//! });
//!
//! let bumped = button.map(|mut css: Css| {
//!     let size = css["fontSize"].as_i64().unwrap_or(0);
//!     css.insert("fontSize".into(), json!(size + 4));
//!     css
//! });
//! let shadowed = bumped.concat(&Style::of(props(json!({ "boxShadow": "0 2px 3px black" }))));
//!
//! let css = shadowed.resolve(&props(json!({ "primary": true })));
//! assert_eq!(css["fontSize"], json!(20));
//! assert_eq!(css["backgroundColor"], json!("green"));
//! assert_eq!(css["boxShadow"], json!("0 2px 3px black"));
//! ```
//!
//! ## Rendering
//!
//! The [`render`] module binds styles to elements. A [`RenderContext`] supplies
//! the renderer and the [`Theme`] injected under the `theme` prop:
//!
//! ```rust
//! use further::{props, ClassRenderer, RenderContext, Style};
//! use serde_json::json;
//!
//! let link = Style::of(props(json!({ "color": "inherit" }))).render("a");
//! let ctx = RenderContext::new().with_renderer(ClassRenderer::new());
//!
//! let element = link.create(&ctx, props(json!({ "href": "home" })), vec!["Home".into()]).unwrap();
//! assert_eq!(element.to_html().unwrap(), r#"<a href="home" class="fx-0">Home</a>"#);
//! ```

pub mod render;
pub mod style;
pub mod theme;
mod util;

pub use render::{
    ClassRenderer, Component, Element, ElementType, InlineRenderer, Node, RenderContext,
    RenderError, Rendered, Renderer, TermRenderer,
};
pub use style::{props, Css, ErrorKind, Merge, Props, Style, StyleArg, StyleError};
pub use theme::{set_theme_detector, AdaptiveTheme, ColorMode, Theme, ThemeChoice};
pub use util::{css_text, parse_hex_color, rgb_to_ansi256, to_kebab_case};
