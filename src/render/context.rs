//! Ambient render context: the renderer and theme in effect.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::renderer::Renderer;
use crate::style::Merge;
use crate::theme::ThemeChoice;

/// The renderer and theme components render with.
///
/// A context is usually built once at the application root and passed to
/// every [`Component::create`](super::Component::create) call.
///
/// # Example
///
/// ```rust
/// use further::{ClassRenderer, RenderContext, Theme};
///
/// let ctx = RenderContext::new()
///     .with_renderer(ClassRenderer::new())
///     .with_theme(Theme::new().add("brand", "teal"));
/// assert!(ctx.renderer().is_some());
/// ```
#[derive(Clone, Default)]
pub struct RenderContext {
    renderer: Option<Arc<dyn Renderer>>,
    theme: Option<ThemeChoice>,
}

impl RenderContext {
    /// Creates an empty context with neither renderer nor theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the renderer.
    pub fn with_renderer<R: Renderer + 'static>(self, renderer: R) -> Self {
        self.with_shared_renderer(Arc::new(renderer))
    }

    /// Sets a renderer shared with other contexts, e.g. to collect one
    /// stylesheet across several render passes.
    pub fn with_shared_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Sets the theme injected into props.
    pub fn with_theme(mut self, theme: impl Into<ThemeChoice>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Returns the renderer, if one was configured.
    pub fn renderer(&self) -> Option<&dyn Renderer> {
        self.renderer.as_deref()
    }

    /// Returns the active theme as a JSON object, `{}` when none is set.
    pub fn theme_value(&self) -> Value {
        match &self.theme {
            Some(choice) => choice.resolve().to_value(),
            None => Value::empty(),
        }
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("renderer", &self.renderer.as_ref().map(|_| ".."))
            .field("theme", &self.theme)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::InlineRenderer;
    use crate::theme::Theme;
    use serde_json::json;

    #[test]
    fn test_empty_context() {
        let ctx = RenderContext::new();
        assert!(ctx.renderer().is_none());
        assert_eq!(ctx.theme_value(), json!({}));
    }

    #[test]
    fn test_context_with_theme() {
        let ctx = RenderContext::new()
            .with_renderer(InlineRenderer)
            .with_theme(Theme::new().add("brand", "teal"));
        assert!(ctx.renderer().is_some());
        assert_eq!(ctx.theme_value(), json!({ "brand": "teal" }));
    }
}
