//! Terminal renderer backed by `console` styles.

use console::Color;
use serde_json::Value;

use super::renderer::{Rendered, Renderer};
use crate::style::{Css, Props, Style};
use crate::util::{parse_hex_color, rgb_to_ansi256};

/// Renderer that paints text in the terminal.
///
/// As a [`Renderer`] it behaves like a native target and returns the
/// declarations inline. [`paint`](TermRenderer::paint) maps the handful of
/// declarations a terminal can show (`color`, `backgroundColor`,
/// `fontWeight`, `fontStyle`, `textDecoration`, `opacity`) onto ANSI styling.
/// Everything else is ignored.
///
/// # Example
///
/// ```rust
/// use further::{props, Props, Style, TermRenderer};
/// use serde_json::json;
///
/// let renderer = TermRenderer::new().force_styling(true);
/// let warning = Style::of(props(json!({ "color": "yellow", "fontWeight": "bold" })));
///
/// let painted = renderer.paint(&warning, &Props::new(), "careful");
/// assert!(painted.contains("careful"));
/// assert!(painted.contains("\x1b[33m"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TermRenderer {
    force_styling: Option<bool>,
}

impl TermRenderer {
    /// Creates a renderer that follows `console`'s color detection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces styling on or off regardless of terminal detection.
    pub fn force_styling(mut self, force: bool) -> Self {
        self.force_styling = Some(force);
        self
    }

    /// Builds the `console` style for a resolved CSS object.
    pub fn console_style(&self, css: &Css) -> console::Style {
        let mut style = console::Style::new();

        if let Some(color) = css.get("color").and_then(term_color) {
            style = style.fg(color);
        }
        if let Some(color) = css.get("backgroundColor").and_then(term_color) {
            style = style.bg(color);
        }
        if css.get("fontWeight").is_some_and(is_bold) {
            style = style.bold();
        }
        if css.get("fontStyle").and_then(Value::as_str) == Some("italic") {
            style = style.italic();
        }
        if css
            .get("textDecoration")
            .and_then(Value::as_str)
            .is_some_and(|d| d.contains("underline"))
        {
            style = style.underlined();
        }
        if css
            .get("opacity")
            .and_then(Value::as_f64)
            .is_some_and(|o| o < 1.0)
        {
            style = style.dim();
        }

        match self.force_styling {
            Some(force) => style.force_styling(force),
            None => style,
        }
    }

    /// Resolves `style` against `props` and paints `text` with the result.
    pub fn paint(&self, style: &Style<Css>, props: &Props, text: &str) -> String {
        self.console_style(&style.resolve(props))
            .apply_to(text)
            .to_string()
    }
}

impl Renderer for TermRenderer {
    fn render_rule(&self, rule: &Style<Css>, props: &Props) -> Rendered {
        Rendered::Inline(rule.resolve(props))
    }
}

fn term_color(value: &Value) -> Option<Color> {
    let name = value.as_str()?.trim();
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "fuchsia" => Color::Magenta,
        "cyan" | "aqua" => Color::Cyan,
        "white" => Color::White,
        _ => Color::Color256(rgb_to_ansi256(parse_hex_color(name)?)),
    };
    Some(color)
}

fn is_bold(weight: &Value) -> bool {
    match weight {
        Value::String(s) => {
            matches!(s.as_str(), "bold" | "bolder") || s.parse::<u16>().is_ok_and(|w| w >= 600)
        }
        Value::Number(n) => n.as_u64().is_some_and(|w| w >= 600),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::props;
    use serde_json::json;

    fn forced() -> TermRenderer {
        TermRenderer::new().force_styling(true)
    }

    #[test]
    fn test_named_color() {
        let style = Style::of(props(json!({ "color": "red" })));
        let out = forced().paint(&style, &Props::new(), "hi");
        assert!(out.contains("\x1b[31m"));
        assert!(out.contains("hi"));
    }

    #[test]
    fn test_hex_color_maps_to_256() {
        let style = Style::of(props(json!({ "color": "#ff0000" })));
        let out = forced().paint(&style, &Props::new(), "hi");
        assert!(out.contains("\x1b[38;5;196m"));
    }

    #[test]
    fn test_bold_weight() {
        for weight in [json!("bold"), json!(700), json!("600")] {
            let style = Style::of(props(json!({ "fontWeight": weight })));
            let out = forced().paint(&style, &Props::new(), "hi");
            assert!(out.contains("\x1b[1m"), "weight {:?} should be bold", weight);
        }
    }

    #[test]
    fn test_unknown_declarations_are_ignored() {
        let style = Style::of(props(json!({ "padding": 10, "color": "not-a-color" })));
        let out = forced().paint(&style, &Props::new(), "plain");
        assert_eq!(out, "plain");
    }

    #[test]
    fn test_styling_disabled() {
        let style = Style::of(props(json!({ "color": "red" })));
        let out = TermRenderer::new()
            .force_styling(false)
            .paint(&style, &Props::new(), "hi");
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_render_rule_is_inline() {
        let style = Style::new(|p: &Props| props(json!({ "color": p.get("fg").cloned() })));
        assert_eq!(
            forced().render_rule(&style, &props(json!({ "fg": "cyan" }))),
            Rendered::Inline(props(json!({ "color": "cyan" })))
        );
    }
}
