//! Components: styles bound to an element type.

use std::fmt;

use serde_json::Value;

use super::context::RenderContext;
use super::element::{Element, Node};
use super::error::RenderError;
use super::renderer::Rendered;
use crate::style::{Css, Props, Style};

/// Props consumed by the bridge itself and never forwarded as attributes.
pub const RESERVED_PROPS: &[&str] = &["is", "innerRef", "theme", "children"];

const THEME_PROP: &str = "theme";
const DEFAULT_DISPLAY_NAME: &str = "StyleComponent";

/// Decides whether a prop is forwarded to a tag element by web renderers.
pub type AttributeFilter = fn(&str) -> bool;

/// Forwards every non-reserved prop.
pub fn forward_all(_name: &str) -> bool {
    true
}

/// The kind of element a component instantiates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    /// A plain tag such as `div`. Web renderers filter its attributes.
    Tag(String),
    /// A user component; all props are forwarded to it.
    Custom { display_name: String },
}

impl ElementType {
    /// Tag or display name.
    pub fn name(&self) -> &str {
        match self {
            ElementType::Tag(tag) => tag,
            ElementType::Custom { display_name } => display_name,
        }
    }

    fn is_tag(&self) -> bool {
        matches!(self, ElementType::Tag(_))
    }
}

impl From<&str> for ElementType {
    fn from(tag: &str) -> Self {
        ElementType::Tag(tag.to_string())
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        ElementType::Tag(tag)
    }
}

impl Default for ElementType {
    fn default() -> Self {
        ElementType::Tag("div".to_string())
    }
}

/// A style bound to an element type.
///
/// Components keep the composition surface of their style: [`map`](Component::map)
/// and [`concat`](Component::concat) (and their aliases) transform the
/// underlying style and bind the result to the same element type.
///
/// # Example
///
/// ```rust
/// use further::{props, ClassRenderer, Props, RenderContext, Style};
/// use serde_json::json;
///
/// let link = Style::of(props(json!({ "color": "inherit", "textDecoration": "none" })))
///     .render("a");
/// let padded = link.map(|mut css| {
///     css.insert("padding".into(), json!(10));
///     css
/// });
///
/// let ctx = RenderContext::new().with_renderer(ClassRenderer::new());
/// let element = padded
///     .create(&ctx, props(json!({ "href": "/home" })), vec!["Home".into()])
///     .unwrap();
/// assert_eq!(element.tag, "a");
/// assert_eq!(element.class_name.as_deref(), Some("fx-0"));
/// ```
#[derive(Clone)]
pub struct Component {
    style: Style<Css>,
    element: ElementType,
    name: Option<String>,
    filter: AttributeFilter,
}

impl Style<Css> {
    /// Binds this style to an element type.
    pub fn render(&self, element: impl Into<ElementType>) -> Component {
        Component::new(self.clone(), element)
    }
}

impl Component {
    /// Creates a component rendering `style` onto `element`.
    pub fn new(style: Style<Css>, element: impl Into<ElementType>) -> Self {
        Self {
            style,
            element: element.into(),
            name: None,
            filter: forward_all,
        }
    }

    /// Sets the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the filter applied to props of tag elements under web renderers.
    pub fn with_attribute_filter(mut self, filter: AttributeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The explicit name, or `StyleComponent`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// The element type this component instantiates.
    pub fn element(&self) -> &ElementType {
        &self.element
    }

    /// The underlying style.
    pub fn style(&self) -> &Style<Css> {
        &self.style
    }

    /// Maps the underlying style and rebinds it to the same element type.
    pub fn map<F>(&self, f: F) -> Component
    where
        F: Fn(Css) -> Css + Send + Sync + 'static,
    {
        self.rebind(self.style.map(f))
    }

    /// Alias for [`map`](Component::map).
    pub fn class<F>(&self, f: F) -> Component
    where
        F: Fn(Css) -> Css + Send + Sync + 'static,
    {
        self.map(f)
    }

    /// Concatenates a style onto the underlying style and rebinds it.
    pub fn concat(&self, other: &Style<Css>) -> Component {
        self.rebind(self.style.concat(other))
    }

    /// Alias for [`concat`](Component::concat).
    pub fn add(&self, other: &Style<Css>) -> Component {
        self.concat(other)
    }

    fn rebind(&self, style: Style<Css>) -> Component {
        Component {
            style,
            element: self.element.clone(),
            name: self.name.clone(),
            filter: self.filter,
        }
    }

    /// Renders the component into an [`Element`].
    ///
    /// The context theme is injected as the `theme` prop before the style is
    /// rendered. Inline results become the element's `style` (paired with the
    /// caller's `style` prop when one is given); class names are prefixed with
    /// the caller's `className`. The `is` prop overrides the tag.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingRenderer`] if the context has no renderer.
    pub fn create(
        &self,
        ctx: &RenderContext,
        mut props: Props,
        children: Vec<Node>,
    ) -> Result<Element, RenderError> {
        let renderer = ctx.renderer().ok_or_else(|| RenderError::MissingRenderer {
            component: self.element_label().to_string(),
        })?;

        props.insert(THEME_PROP.to_string(), ctx.theme_value());
        let rendered = renderer.render_rule(&self.style, &props);

        let tag = match props.get("is") {
            Some(Value::String(tag)) => tag.clone(),
            _ => self.element.name().to_string(),
        };
        let mut element = Element::new(tag);

        match rendered {
            Rendered::Inline(css) => {
                element.attributes = forwarded(&props, |name| name != "style");
                element.style = Some(match props.get("style") {
                    Some(user) => Value::Array(vec![Value::Object(css), user.clone()]),
                    None => Value::Object(css),
                });
            }
            Rendered::ClassName(class) => {
                let filter_tags = self.element.is_tag();
                element.attributes = forwarded(&props, |name| {
                    name != "style" && name != "className" && (!filter_tags || (self.filter)(name))
                });
                element.style = props.get("style").cloned();
                element.class_name = Some(join_class_names(props.get("className"), &class));
            }
        }

        if let Some(id) = props.get("id") {
            element.attributes.insert("id".to_string(), id.clone());
        }
        element.element_ref = props.get("innerRef").cloned();
        element.children = children;

        tracing::debug!(
            component = self.display_name(),
            tag = %element.tag,
            attributes = element.attributes.len(),
            "created element"
        );
        Ok(element)
    }

    fn element_label(&self) -> &str {
        match &self.element {
            ElementType::Custom { display_name } => display_name,
            ElementType::Tag(tag) => self.name.as_deref().unwrap_or(tag),
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.display_name())
            .field("element", &self.element)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

fn forwarded(props: &Props, keep: impl Fn(&str) -> bool) -> Props {
    props
        .iter()
        .filter(|(name, _)| !RESERVED_PROPS.contains(&name.as_str()) && keep(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn join_class_names(existing: Option<&Value>, generated: &str) -> String {
    match existing.and_then(Value::as_str).filter(|c| !c.is_empty()) {
        Some(existing) if generated.is_empty() => existing.to_string(),
        Some(existing) => format!("{} {}", existing, generated),
        None => generated.to_string(),
    }
}
