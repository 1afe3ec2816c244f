//! Built-in rule set for the web target.
//!
//! Mirrors the mobile widget vocabulary onto flex/grid containers and plain
//! HTML elements. Loaded like any other rule set, so a project can ship its
//! own JSON instead.

use crate::replacements::{
    AttributeReplacement, ChildArrangement, ElementReplacement, PropertyRule, PropertyTarget,
    RuleSet, ValueKind,
};
use indexmap::IndexMap;

fn element(
    id: &str,
    to: &str,
    css: &[(&str, &str)],
    children: ChildArrangement,
) -> ElementReplacement {
    ElementReplacement {
        id: id.to_string(),
        to: to.to_string(),
        attributes: IndexMap::new(),
        css: css
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        children,
    }
}

fn attribute(
    id: &str,
    scope: Option<&str>,
    key: &str,
    target: PropertyTarget,
    kind: ValueKind,
) -> AttributeReplacement {
    AttributeReplacement {
        id: id.to_string(),
        element: scope.map(str::to_string),
        properties: vec![PropertyRule {
            key: key.to_string(),
            value: "{value}".to_string(),
            target,
            kind,
        }],
    }
}

/// The default android→web rule set.
pub fn builtin_web() -> RuleSet {
    use ChildArrangement::{Frame, Linear, None as Leaf};
    use PropertyTarget::{Attribute, Css};
    use ValueKind::{Dimension, Raw, Resource};

    let mut input = element("EditText", "input", &[], Leaf);
    input
        .attributes
        .insert("type".to_string(), "text".to_string());

    let mut checkbox = element("CheckBox", "input", &[], Leaf);
    checkbox
        .attributes
        .insert("type".to_string(), "checkbox".to_string());

    RuleSet {
        elements: vec![
            element("View", "div", &[], Leaf),
            element("LinearLayout", "div", &[("display", "flex")], Linear),
            element("FrameLayout", "div", &[("display", "grid")], Frame),
            element(
                "ScrollView",
                "div",
                &[("display", "grid"), ("overflow-y", "auto")],
                Frame,
            ),
            element("TextView", "p", &[], Leaf),
            element("Button", "button", &[], Leaf),
            element("ImageView", "img", &[], Leaf),
            input,
            checkbox,
            element("include", "div", &[], Leaf),
        ],
        attributes: vec![
            attribute("android:id", None, "id", Attribute, Resource),
            attribute("android:layout_width", None, "width", Css, Dimension),
            attribute("android:layout_height", None, "height", Css, Dimension),
            attribute("android:padding", None, "padding", Css, Dimension),
            attribute("android:alpha", None, "opacity", Css, Raw),
            attribute("android:background", None, "background", Css, Raw),
            attribute("android:contentDescription", None, "aria-label", Attribute, Raw),
            attribute("android:src", Some("ImageView"), "src", Attribute, Resource),
            attribute("android:hint", Some("EditText"), "placeholder", Attribute, Raw),
            attribute("layout", Some("include"), "data-layout", Attribute, Resource),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replacements::Replacements;

    #[test]
    fn test_builtin_web_loads() {
        let replacements = Replacements::from_rule_set(builtin_web()).unwrap();
        assert_eq!(replacements.element("LinearLayout").to, "div");
        assert_eq!(
            replacements.element("LinearLayout").children,
            ChildArrangement::Linear
        );
        // View doubles as the fallback.
        assert_eq!(replacements.element("com.vendor.Widget").to, "div");
    }

    #[test]
    fn test_builtin_id_attribute_strips_prefix() {
        let replacements = Replacements::from_rule_set(builtin_web()).unwrap();
        let rule = replacements.attribute("TextView", "android:id").unwrap();
        let applied = rule.apply("@+id/title");
        assert_eq!(
            applied,
            vec![(
                PropertyTarget::Attribute,
                "id".to_string(),
                "title".to_string()
            )]
        );
    }
}
