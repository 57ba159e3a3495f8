//! Render bridge errors.

/// Error returned when a component cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The render context carries no renderer.
    #[error(
        "render() can't render styles for the component '{component}' without a style \
         renderer in the context. Did you forget RenderContext::with_renderer?"
    )]
    MissingRenderer {
        /// Display name or tag of the element being rendered.
        component: String,
    },

    /// Serializing an element to HTML failed.
    #[error("failed to render element: {0}")]
    Template(#[from] minijinja::Error),
}
