//! Renderer backends that turn a resolved style into output.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::style::{Css, Props, Style};
use crate::util::css_text;

/// What a renderer produced for one style rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// A class name referring to a rule in a stylesheet (web targets).
    ClassName(String),
    /// The resolved declarations, applied inline (native targets).
    Inline(Css),
}

/// A backend that renders styles for components.
///
/// The render context hands the renderer the component's style together
/// with the full props (including the injected `theme`). Renderers decide
/// how to resolve and where to put the result.
pub trait Renderer: Send + Sync {
    /// Renders `rule` for the given props.
    fn render_rule(&self, rule: &Style<Css>, props: &Props) -> Rendered;
}

/// Renderer producing atomic class names and collecting a stylesheet.
///
/// Identical declaration blocks share one class name, so rendering the same
/// style for many elements adds a single rule.
///
/// # Example
///
/// ```rust
/// use further::{props, ClassRenderer, Props, Rendered, Renderer, Style};
/// use serde_json::json;
///
/// let renderer = ClassRenderer::with_prefix("btn");
/// let style = Style::of(props(json!({ "color": "blue" })));
///
/// let rendered = renderer.render_rule(&style, &Props::new());
/// assert_eq!(rendered, Rendered::ClassName("btn-0".to_string()));
/// assert_eq!(renderer.stylesheet(), ".btn-0{color:blue}");
/// ```
#[derive(Debug)]
pub struct ClassRenderer {
    prefix: String,
    cache: Mutex<RuleCache>,
}

#[derive(Debug, Default)]
struct RuleCache {
    classes: HashMap<String, String>,
    rules: Vec<(String, String)>,
}

impl ClassRenderer {
    /// Creates a renderer using the `fx` class prefix.
    pub fn new() -> Self {
        Self::with_prefix("fx")
    }

    /// Creates a renderer with a custom class prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            cache: Mutex::new(RuleCache::default()),
        }
    }

    /// Returns the class name for a resolved CSS object, registering a new
    /// rule the first time a declaration block is seen.
    ///
    /// An empty declaration block has no class.
    pub fn class_for(&self, css: &Css) -> String {
        let declarations = css_text(css);
        if declarations.is_empty() {
            return String::new();
        }

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(class) = cache.classes.get(&declarations) {
            return class.clone();
        }

        let class = format!("{}-{}", self.prefix, cache.rules.len());
        tracing::trace!(class = %class, declarations = %declarations, "registered style rule");
        cache.classes.insert(declarations.clone(), class.clone());
        cache.rules.push((class.clone(), declarations));
        class
    }

    /// Number of distinct rules registered so far.
    pub fn rule_count(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .rules
            .len()
    }

    /// Returns every registered rule as CSS, one rule per line.
    pub fn stylesheet(&self) -> String {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache
            .rules
            .iter()
            .map(|(class, declarations)| format!(".{}{{{}}}", class, declarations))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ClassRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ClassRenderer {
    fn render_rule(&self, rule: &Style<Css>, props: &Props) -> Rendered {
        Rendered::ClassName(self.class_for(&rule.resolve(props)))
    }
}

/// Renderer for native targets: hands back the resolved declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineRenderer;

impl Renderer for InlineRenderer {
    fn render_rule(&self, rule: &Style<Css>, props: &Props) -> Rendered {
        Rendered::Inline(rule.resolve(props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::props;
    use serde_json::{json, Value};

    #[test]
    fn test_class_renderer_reuses_classes() {
        let renderer = ClassRenderer::new();
        let a = renderer.class_for(&props(json!({ "color": "blue" })));
        let b = renderer.class_for(&props(json!({ "color": "blue" })));
        let c = renderer.class_for(&props(json!({ "color": "red" })));

        assert_eq!(a, "fx-0");
        assert_eq!(a, b);
        assert_eq!(c, "fx-1");
        assert_eq!(renderer.rule_count(), 2);
    }

    #[test]
    fn test_class_renderer_stylesheet() {
        let renderer = ClassRenderer::new();
        renderer.class_for(&props(json!({ "color": "blue", "marginTop": 2 })));
        renderer.class_for(&props(json!({ "padding": 10 })));
        assert_eq!(
            renderer.stylesheet(),
            ".fx-0{color:blue;margin-top:2}\n.fx-1{padding:10}"
        );
    }

    #[test]
    fn test_class_renderer_empty_css_has_no_class() {
        let renderer = ClassRenderer::new();
        assert_eq!(renderer.class_for(&Css::new()), "");
        assert_eq!(renderer.rule_count(), 0);
    }

    #[test]
    fn test_class_renderer_resolves_with_props() {
        let renderer = ClassRenderer::new();
        let style = Style::new(|p: &Props| {
            let bg = if p.get("primary") == Some(&Value::Bool(true)) { "green" } else { "blue" };
            props(json!({ "backgroundColor": bg }))
        });

        renderer.render_rule(&style, &props(json!({ "primary": true })));
        assert_eq!(renderer.stylesheet(), ".fx-0{background-color:green}");
    }

    #[test]
    fn test_inline_renderer_returns_declarations() {
        let style = Style::of(props(json!({ "color": "blue" })));
        assert_eq!(
            InlineRenderer.render_rule(&style, &Props::new()),
            Rendered::Inline(props(json!({ "color": "blue" })))
        );
    }
}
