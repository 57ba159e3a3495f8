//! Theme struct for building token collections.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::style::Props;

/// A named collection of design tokens injected into props at render time.
///
/// Components see the active theme under the `theme` prop, so styles can read
/// tokens instead of hard-coding values.
///
/// # Example
///
/// ```rust
/// use further::{props, Props, Style, Theme};
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .add("brand", "#0077ff")
///     .add("spacing", 8);
///
/// let link = Style::new(|p: &Props| props(json!({
///     "color": p.get("theme").and_then(|t| t.get("brand")).cloned(),
/// })));
///
/// let css = link.resolve(&props(json!({ "theme": theme.to_value() })));
/// assert_eq!(css["color"], json!("#0077ff"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    tokens: Props,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a theme from an existing token mapping.
    pub fn from_tokens(tokens: Props) -> Self {
        Self { tokens }
    }

    /// Adds a named token, returning an updated theme for chaining.
    pub fn add<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        self.tokens.insert(name.to_string(), value.into());
        self
    }

    /// Returns the token stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.tokens.get(name)
    }

    /// Returns the underlying tokens.
    pub fn tokens(&self) -> &Props {
        &self.tokens
    }

    /// Whether the theme defines no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the theme as a JSON object, the shape injected into props.
    pub fn to_value(&self) -> Value {
        Value::Object(self.tokens.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_theme_add_and_get() {
        let theme = Theme::new().add("brand", "#07f").add("radius", 4);
        assert_eq!(theme.get("brand"), Some(&json!("#07f")));
        assert_eq!(theme.get("radius"), Some(&json!(4)));
        assert_eq!(theme.get("missing"), None);
    }

    #[test]
    fn test_theme_add_overrides() {
        let theme = Theme::new().add("brand", "red").add("brand", "blue");
        assert_eq!(theme.get("brand"), Some(&json!("blue")));
        assert_eq!(theme.tokens().len(), 1);
    }

    #[test]
    fn test_theme_default_is_empty() {
        let theme = Theme::default();
        assert!(theme.is_empty());
        assert_eq!(theme.to_value(), json!({}));
    }

    #[test]
    fn test_theme_deserializes_from_object() {
        let theme: Theme = serde_json::from_value(json!({ "brand": "teal" })).unwrap();
        assert_eq!(theme.get("brand"), Some(&json!("teal")));
        assert_eq!(serde_json::to_value(&theme).unwrap(), json!({ "brand": "teal" }));
    }
}
