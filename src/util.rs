//! Utility functions for CSS text and color conversion.

use serde_json::Value;

use crate::style::Css;

/// Converts a camelCase property name to its kebab-case CSS form.
///
/// Names that already contain dashes (custom properties, vendor prefixes)
/// are lowercased only where an uppercase letter appears.
///
/// # Example
///
/// ```rust
/// use further::to_kebab_case;
///
/// assert_eq!(to_kebab_case("backgroundColor"), "background-color");
/// assert_eq!(to_kebab_case("color"), "color");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Formats a single CSS value. Strings are written bare, null becomes `None`.
pub(crate) fn css_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Formats a CSS object as a declaration block body.
///
/// Declarations are emitted in map order and null values are skipped. No
/// units are added: values are written exactly as resolved.
///
/// # Example
///
/// ```rust
/// use further::{css_text, props};
/// use serde_json::json;
///
/// let css = props(json!({ "color": "blue", "paddingTop": "4px" }));
/// assert_eq!(css_text(&css), "color:blue;padding-top:4px");
/// ```
pub fn css_text(css: &Css) -> String {
    css.iter()
        .filter_map(|(name, value)| {
            css_value(value).map(|v| format!("{}:{}", to_kebab_case(name), v))
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Parses `#rgb` or `#rrggbb` hex colors.
///
/// # Example
///
/// ```rust
/// use further::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#ff8000"), Some((255, 128, 0)));
/// assert_eq!(parse_hex_color("#fff"), Some((255, 255, 255)));
/// assert_eq!(parse_hex_color("blue"), None);
/// ```
pub fn parse_hex_color(input: &str) -> Option<(u8, u8, u8)> {
    let hex = input.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = hex.chars().map(|c| {
                let v = c.to_digit(16).unwrap_or(0) as u8;
                v * 17
            });
            Some((channels.next()?, channels.next()?, channels.next()?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// Maps an RGB color onto the xterm 256-color palette.
///
/// Grays use the 24-step ramp (232..=255), everything else the 6x6x6 cube.
///
/// ```rust
/// use further::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    let cube = |channel: u8| (u16::from(channel) * 5 / 255) as u8;

    if r != g || g != b {
        return 16 + 36 * cube(r) + 6 * cube(g) + cube(b);
    }
    match r {
        0..=7 => 16,
        249..=255 => 231,
        gray => 232 + ((u16::from(gray) - 8) * 24 / 247) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::props;
    use serde_json::json;

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("fontSize"), "font-size");
        assert_eq!(to_kebab_case("WebkitTransition"), "-webkit-transition");
        assert_eq!(to_kebab_case("--brand"), "--brand");
    }

    #[test]
    fn test_css_text_skips_null() {
        let css = props(json!({ "color": null, "margin": 10 }));
        assert_eq!(css_text(&css), "margin:10");
    }

    #[test]
    fn test_css_text_empty() {
        assert_eq!(css_text(&Css::new()), "");
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert_eq!(parse_hex_color("#12"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("cccccc"), None);
    }

    #[test]
    fn test_parse_hex_color_short_form() {
        assert_eq!(parse_hex_color("#0f0"), Some((0, 255, 0)));
    }

    #[test]
    fn test_rgb_to_ansi256() {
        assert_eq!(rgb_to_ansi256((3, 3, 3)), 16);
        assert_eq!(rgb_to_ansi256((250, 250, 250)), 231);
        assert_eq!(rgb_to_ansi256((128, 128, 128)), 243);
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((204, 204, 0)), 184);
    }
}
