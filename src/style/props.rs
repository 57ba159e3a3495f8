//! Props and CSS object types.

use serde_json::{Map, Value};

/// The environment a style is resolved against: string keys to arbitrary values.
pub type Props = Map<String, Value>;

/// A resolved CSS object: style-property names to values.
pub type Css = Map<String, Value>;

/// Converts a JSON value into a props mapping.
///
/// Objects are taken as-is; any other value yields an empty mapping.
///
/// # Example
///
/// ```rust
/// use further::props;
/// use serde_json::json;
///
/// let p = props(json!({ "primary": true }));
/// assert_eq!(p["primary"], json!(true));
/// assert!(props(json!(42)).is_empty());
/// ```
pub fn props(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
