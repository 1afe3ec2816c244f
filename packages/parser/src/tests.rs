use crate::ast::LayoutNode;
use crate::error::ParseError;
use crate::parser::parse;

#[test]
fn test_parse_self_closing_root() {
    let node = parse(r#"<View android:layout_width="match_parent"/>"#).unwrap();
    assert_eq!(node.tag, "View");
    assert_eq!(node.attr("android:layout_width"), Some("match_parent"));
    assert!(node.children.is_empty());
}

#[test]
fn test_parse_nested_elements() {
    let source = r#"
        <LinearLayout
            xmlns:android="http://schemas.android.com/apk/res/android"
            android:orientation="vertical">
            <TextView android:id="@+id/title" android:text="Hello"/>
            <ImageView android:id="@+id/icon"/>
        </LinearLayout>
    "#;
    let node = parse(source).unwrap();
    assert_eq!(node.tag, "LinearLayout");
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[0].tag, "TextView");
    assert_eq!(node.children[0].attr("android:id"), Some("@+id/title"));
    assert_eq!(node.children[1].tag, "ImageView");
}

#[test]
fn test_attribute_order_preserved() {
    let node = parse(r#"<View b="2" a="1" c="3"/>"#).unwrap();
    let keys: Vec<_> = node.attributes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn test_parse_prolog_and_comments() {
    let source = r#"<?xml version="1.0" encoding="utf-8"?>
        <!-- top of file -->
        <FrameLayout>
            <!-- inner comment -->
            <View/>
        </FrameLayout>
    "#;
    let node = parse(source).unwrap();
    assert_eq!(node.tag, "FrameLayout");
    assert_eq!(node.children.len(), 1);
}

#[test]
fn test_parse_dotted_tag_name() {
    let node = parse(r#"<com.google.android.material.tabs.TabItem/>"#).unwrap();
    assert_eq!(node.tag, "com.google.android.material.tabs.TabItem");
    assert_eq!(node.local_name(), "TabItem");
}

#[test]
fn test_parse_single_quoted_and_entities() {
    let node = parse(r#"<TextView android:text='Tom &amp; Jerry &lt;3'/>"#).unwrap();
    assert_eq!(node.attr("android:text"), Some("Tom & Jerry <3"));
}

#[test]
fn test_mismatched_closing_tag() {
    let err = parse("<LinearLayout><View/></FrameLayout>").unwrap_err();
    assert!(matches!(
        err,
        ParseError::MismatchedClosingTag { ref expected, ref found, .. }
            if expected == "LinearLayout" && found == "FrameLayout"
    ));
}

#[test]
fn test_duplicate_attribute_is_error() {
    let err = parse(r#"<View a="1" a="2"/>"#).unwrap_err();
    assert!(matches!(err, ParseError::DuplicateAttribute { ref key, .. } if key == "a"));
}

#[test]
fn test_unexpected_eof() {
    let err = parse("<LinearLayout><View/>").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}

#[test]
fn test_trailing_content_rejected() {
    let err = parse("<View/><View/>").unwrap_err();
    assert!(matches!(err, ParseError::InvalidSyntax { .. }));
}

#[test]
fn test_builder_round_trip_through_serde() {
    let node = LayoutNode::new("TextView")
        .with_attr("android:id", "@+id/title")
        .with_child(LayoutNode::new("View"));
    let json = serde_json::to_string(&node).unwrap();
    let back: LayoutNode = serde_json::from_str(&json).unwrap();
    assert_eq!(node, back);
}
