use crate::compiler::{compile_document, CompileOptions};
use crate::element_types::ElementTypes;
use crate::wrapper::generate_wrapper;
use relayout_descriptor::{combine, extract};
use relayout_parser::parse;
use relayout_rules::{builtin_web, Replacements, StyleSheet};
use relayout_translator::{DestNode, Translator, WebStrategy};
use std::path::Path;

fn web_replacements() -> Replacements {
    Replacements::from_rule_set(builtin_web()).unwrap()
}

#[test]
fn test_compile_simple_tree() {
    let root = DestNode::new("div")
        .with_attr("class", "android-LinearLayout")
        .with_css("display", "flex")
        .with_child(DestNode::new("p").with_attr("id", "title"));
    let html = compile_document(&root, CompileOptions::default());

    assert!(html.contains("<div class=\"android-LinearLayout\" style=\"display: flex\">"));
    assert!(html.contains("<p id=\"title\"></p>"));
    assert!(html.contains("</div>"));
}

#[test]
fn test_compile_void_element_self_closes() {
    let root = DestNode::new("img").with_attr("src", "hero.png");
    let html = compile_document(&root, CompileOptions::default());
    assert_eq!(html.trim_end(), "<img src=\"hero.png\"/>");
}

#[test]
fn test_compile_escapes_attribute_values() {
    let root = DestNode::new("div").with_attr("aria-label", "Tom & \"Jerry\"");
    let html = compile_document(&root, CompileOptions::default());
    assert!(html.contains("aria-label=\"Tom &amp; &quot;Jerry&quot;\""));
}

#[test]
fn test_compile_compact_mode() {
    let root = DestNode::new("div").with_child(DestNode::new("p"));
    let options = CompileOptions {
        pretty: false,
        ..Default::default()
    };
    let html = compile_document(&root, options);
    assert_eq!(html, "<div><p></p></div>");
}

#[test]
fn test_translated_layout_round_trip() {
    let source = r#"
        <LinearLayout android:orientation="vertical">
            <TextView android:id="@+id/title"/>
            <ImageView android:id="@+id/hero" android:src="@drawable/hero"/>
        </LinearLayout>
    "#;
    let root = parse(source).unwrap();
    let replacements = web_replacements();
    let styles = StyleSheet::default();
    let translator = Translator::new(&replacements, &styles, &WebStrategy);
    let dest = translator.convert_element(&root).unwrap();
    let html = compile_document(&dest, CompileOptions::default());

    assert!(html.contains("flex-direction: column"));
    assert!(html.contains("id=\"title\""));
    assert!(html.contains("android-TextView"));
    assert!(html.contains("<img"));
}

#[test]
fn test_generate_wrapper_shape() {
    let source = r#"
        <LinearLayout>
            <TextView android:id="@+id/title"/>
            <ImageView android:id="@+id/hero"/>
            <include android:id="@+id/side_panel" layout="@layout/panel"/>
        </LinearLayout>
    "#;
    let root = parse(source).unwrap();
    let descriptor = extract(
        "screen",
        "",
        Path::new("res/layout/screen.xml"),
        &root,
        &StyleSheet::default(),
    )
    .unwrap();
    let ts = generate_wrapper(&descriptor, &web_replacements(), &ElementTypes::web());

    assert!(ts.contains("import html from './screen.html'"));
    assert!(ts.contains("import {PanelXml} from './panel'"));
    assert!(ts.contains("export interface ScreenXml {"));
    assert!(ts.contains("_root: HTMLElement"));
    // TextView translates to <p>, ImageView to <img>.
    assert!(ts.contains("title: HTMLParagraphElement"));
    assert!(ts.contains("hero: HTMLImageElement"));
    assert!(ts.contains("sidePanel: PanelXml"));
    assert!(ts.contains("export namespace ScreenXml {"));
    assert!(ts.contains("inflateHtmlFile(html, \"hero\", \"title\", \"sidePanel\") as ScreenXml"));
}

#[test]
fn test_generate_wrapper_optional_binding() {
    let default = extract(
        "screen",
        "",
        Path::new("res/layout/screen.xml"),
        &parse(r#"<LinearLayout><TextView android:id="@+id/title"/></LinearLayout>"#).unwrap(),
        &StyleSheet::default(),
    )
    .unwrap();
    let land = extract(
        "screen",
        "land",
        Path::new("res/layout-land/screen.xml"),
        &parse("<LinearLayout></LinearLayout>").unwrap(),
        &StyleSheet::default(),
    )
    .unwrap();
    let merged = combine(vec![default, land]).unwrap();
    let ts = generate_wrapper(&merged, &web_replacements(), &ElementTypes::web());
    assert!(ts.contains("title?: HTMLParagraphElement"));
}

#[test]
fn test_generate_wrapper_unknown_tag_falls_back() {
    let root = parse(r#"<com.vendor.Gauge android:id="@+id/gauge"/>"#).unwrap();
    let descriptor = extract(
        "meter",
        "",
        Path::new("res/layout/meter.xml"),
        &root,
        &StyleSheet::default(),
    )
    .unwrap();
    let ts = generate_wrapper(&descriptor, &web_replacements(), &ElementTypes::web());
    assert!(ts.contains("gauge: HTMLDivElement"));
}
