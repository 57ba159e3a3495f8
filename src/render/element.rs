//! Rendered elements and their HTML serialization.

use minijinja::{context, AutoEscape, Environment, Value as TemplateValue};
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;

use super::error::RenderError;
use crate::style::{Css, Merge, Props};
use crate::util::{css_text, css_value};

const ELEMENT_TEMPLATE: &str = concat!(
    "<{{ tag }}",
    r#"{% for attr in attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}"#,
    ">{{ children }}</{{ tag }}>",
);
const TEXT_TEMPLATE: &str = "{{ text }}";

static HTML: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env
});

/// A child of an [`Element`]: escaped text or a nested element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element produced by [`Component::create`](super::Component::create).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Tag or component name to instantiate.
    pub tag: String,
    /// Props forwarded to the element.
    pub attributes: Props,
    /// Class names, for web renderers.
    pub class_name: Option<String>,
    /// Inline style: a CSS object, or an array of them applied in order.
    pub style: Option<Value>,
    /// The caller's `innerRef`, if any.
    pub element_ref: Option<Value>,
    /// Child nodes, rendered in order.
    pub children: Vec<Node>,
}

#[derive(Serialize)]
struct HtmlAttr {
    name: String,
    value: String,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Props::new(),
            class_name: None,
            style: None,
            element_ref: None,
            children: Vec::new(),
        }
    }

    /// Returns the inline style flattened into one CSS object.
    ///
    /// Arrays are merged left to right, so later entries win.
    pub fn flat_style(&self) -> Option<Css> {
        let style = self.style.as_ref()?;
        let flat = match style {
            Value::Array(items) => items
                .iter()
                .cloned()
                .fold(Value::Object(Css::new()), Merge::merge),
            other => Value::Object(Css::new()).merge(other.clone()),
        };
        match flat {
            Value::Object(css) => Some(css),
            _ => None,
        }
    }

    /// Serializes the element tree to HTML.
    ///
    /// Attribute values and text are escaped; object or array attributes are
    /// written as JSON.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut children = String::new();
        for child in &self.children {
            match child {
                Node::Text(text) => {
                    children.push_str(&HTML.render_str(TEXT_TEMPLATE, context! { text => text })?)
                }
                Node::Element(element) => children.push_str(&element.to_html()?),
            }
        }

        let html = HTML.render_str(
            ELEMENT_TEMPLATE,
            context! {
                tag => &self.tag,
                attributes => self.html_attributes(),
                children => TemplateValue::from_safe_string(children),
            },
        )?;
        Ok(html)
    }

    fn html_attributes(&self) -> Vec<HtmlAttr> {
        let mut attrs: Vec<HtmlAttr> = self
            .attributes
            .iter()
            .filter_map(|(name, value)| {
                css_value(value).map(|value| HtmlAttr {
                    name: name.clone(),
                    value,
                })
            })
            .collect();

        if let Some(class) = self.class_name.as_ref().filter(|c| !c.is_empty()) {
            attrs.push(HtmlAttr {
                name: "class".to_string(),
                value: class.clone(),
            });
        }
        if let Some(css) = self.flat_style().filter(|css| !css.is_empty()) {
            attrs.push(HtmlAttr {
                name: "style".to_string(),
                value: css_text(&css),
            });
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::props;
    use serde_json::json;

    #[test]
    fn test_to_html_simple() {
        let mut element = Element::new("div");
        element.class_name = Some("fx-0".to_string());
        element.children.push("hello".into());
        assert_eq!(element.to_html().unwrap(), r#"<div class="fx-0">hello</div>"#);
    }

    #[test]
    fn test_to_html_escapes_text_and_attributes() {
        let mut element = Element::new("span");
        element.attributes = props(json!({ "title": "a \"quoted\" <value>" }));
        element.children.push("<b>&</b>".into());
        let html = element.to_html().unwrap();
        assert!(html.contains("&lt;b&gt;&amp;&lt;"));
        assert!(!html.contains("<value>"));
    }

    #[test]
    fn test_to_html_nested() {
        let mut inner = Element::new("span");
        inner.children.push("inner".into());
        let mut outer = Element::new("div");
        outer.attributes = props(json!({ "id": "10" }));
        outer.children.push(inner.into());
        assert_eq!(
            outer.to_html().unwrap(),
            r#"<div id="10"><span>inner</span></div>"#
        );
    }

    #[test]
    fn test_flat_style_merges_arrays() {
        let mut element = Element::new("div");
        element.style = Some(json!([{ "color": "blue", "margin": 1 }, { "color": "red" }]));
        assert_eq!(
            element.flat_style(),
            Some(props(json!({ "color": "red", "margin": 1 })))
        );
        assert_eq!(
            element.to_html().unwrap(),
            r#"<div style="color:red;margin:1"></div>"#
        );
    }

    #[test]
    fn test_flat_style_absent() {
        assert_eq!(Element::new("div").flat_style(), None);
    }
}
