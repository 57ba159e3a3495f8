//! Environment remapping with `set_args`.

use further::{props, Css, ErrorKind, Props, Style, StyleArg};
use serde_json::{json, Value};

fn original_style() -> Style<Css> {
    Style::new(|p: &Props| {
        props(json!({
            "color": "blue",
            "backgroundColor": p.get("bg").cloned().unwrap_or(Value::Null),
        }))
    })
}

#[test]
fn test_modifies_args_sent_to_original_style() {
    let modified = original_style().set_args(|_: &Props| props(json!({ "bg": "orange" })));
    assert_eq!(
        modified.resolve(&props(json!({ "bg": "black" }))),
        props(json!({ "color": "blue", "backgroundColor": "orange" }))
    );
}

#[test]
fn test_allows_clearing_args() {
    let modified = original_style().set_args(|_: &Props| Props::new());
    assert_eq!(
        modified.resolve(&props(json!({ "bg": "black" }))),
        props(json!({ "color": "blue", "backgroundColor": null }))
    );
}

#[test]
fn test_allows_adding_args_by_merging() {
    let with_size = original_style()
        .concat(&Style::new(|p: &Props| {
            props(json!({ "fontSize": p.get("size").cloned().unwrap_or(Value::Null) }))
        }))
        .set_args(|p: &Props| {
            let mut next = props(json!({ "size": "12px" }));
            next.extend(p.clone());
            next
        });

    assert_eq!(
        with_size.resolve(&props(json!({ "bg": "black" }))),
        props(json!({ "color": "blue", "backgroundColor": "black", "fontSize": "12px" }))
    );
}

#[test]
fn test_reducer_result_is_passed_verbatim() {
    // A reducer producing a non-object value: the downstream resolver sees
    // exactly that value and must cope with it itself.
    let style = Style::new(|p: &Value| {
        props(json!({
            "color": "blue",
            "backgroundColor": p.get("bg").cloned().unwrap_or(Value::Null),
        }))
    });
    let bad = style.set_args(|_: &Props| json!("hey"));
    assert_eq!(
        bad.resolve_default(),
        props(json!({ "color": "blue", "backgroundColor": null }))
    );
}

#[test]
fn test_rewrites_only_downstream() {
    let upstream = Style::new(|p: &Props| props(json!({ "seen": p.get("bg").cloned() })));
    let downstream = original_style().set_args(|_: &Props| props(json!({ "bg": "orange" })));
    let css = upstream.concat(&downstream).resolve(&props(json!({ "bg": "black" })));
    assert_eq!(css["seen"], json!("black"));
    assert_eq!(css["backgroundColor"], json!("orange"));
}

#[test]
fn test_try_set_args_rejects_non_functions() {
    for value in [json!("well hiya"), json!(42), json!({ "msg": "hiya" })] {
        let err = original_style().try_set_args::<Props>(value.into()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    let ok = original_style()
        .try_set_args(StyleArg::function(|_: &Props| Props::new()))
        .unwrap();
    assert_eq!(ok.resolve_default()["color"], json!("blue"));
}

#[test]
fn test_try_new_rejects_non_functions() {
    for value in [json!({ "foo": "bar" }), json!(5), json!("foo"), json!(true)] {
        let err = Style::<Css>::try_new(value.into()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().starts_with("Style expects to be called with a function. Actual:"));
    }
    assert!(Style::<Css>::try_new(StyleArg::function(|_: &Props| Css::new())).is_ok());
}
